//! Text primitives: splitting, joining, replacement, and layout.

use crate::error::Error;
use crate::types::Type;
use crate::value::Value;

use super::{str_of, to_vec};

/// Splits `lhs` on `rhs` (both rendered as text).
pub fn split(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let haystack = str_of(lhs);
    let sep = str_of(rhs);
    if sep.is_empty() {
        return Ok(Value::list(haystack.chars().map(Value::from)));
    }
    Ok(Value::list(
        haystack.split(sep.as_str()).map(Value::from),
    ))
}

/// Splits like [`split`] but keeps the delimiter as its own element.
pub fn split_keep(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let haystack = str_of(lhs);
    let sep = str_of(rhs);
    if sep.is_empty() {
        return split(lhs, rhs);
    }
    let mut out = Vec::new();
    let mut rest = haystack.as_str();
    while let Some(pos) = rest.find(sep.as_str()) {
        out.push(Value::from(&rest[..pos]));
        out.push(Value::from(sep.as_str()));
        rest = &rest[pos + sep.len()..];
    }
    out.push(Value::from(rest));
    Ok(Value::list(out))
}

/// Joins a sequence's elements with a separator.
pub fn join_on(seq: &Value, sep: &Value) -> crate::Result<Value> {
    let items = to_vec(seq)?;
    let sep = str_of(sep);
    let joined = items
        .iter()
        .map(str_of)
        .collect::<Vec<_>>()
        .join(sep.as_str());
    Ok(Value::from(joined))
}

/// Joins a sequence's elements with newlines.
pub fn join_newlines(seq: &Value) -> crate::Result<Value> {
    join_on(seq, &Value::from("\n"))
}

/// Splits text on newlines; a number becomes the power of ten instead.
pub fn split_newlines_or_pow_ten(v: &Value) -> crate::Result<Value> {
    match v {
        Value::Int(_) | Value::Float(_) => {
            super::arith::exponate(Value::Int(10), v.clone())
        }
        _ => Ok(Value::list(str_of(v).lines().map(Value::from))),
    }
}

/// Strips `rhs`'s symbols from both ends of `lhs`.
pub fn strip(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let text = str_of(lhs);
    let pattern = str_of(rhs);
    let chars: Vec<char> = pattern.chars().collect();
    Ok(Value::from(text.trim_matches(|c| chars.contains(&c))))
}

/// Replaces every occurrence of `needle` with `replacement` (one pass).
pub fn replace(haystack: &Value, needle: &Value, replacement: &Value) -> crate::Result<Value> {
    let h = str_of(haystack);
    let n = str_of(needle);
    let r = str_of(replacement);
    if n.is_empty() {
        return Ok(Value::from(h));
    }
    Ok(Value::from(h.replace(n.as_str(), r.as_str())))
}

/// Replaces until a fixed point is reached.
pub fn infinite_replace(
    haystack: &Value,
    needle: &Value,
    replacement: &Value,
) -> crate::Result<Value> {
    let n = str_of(needle);
    let r = str_of(replacement);
    if n.is_empty() || r.contains(n.as_str()) {
        // Replacement reintroducing the needle would never converge.
        return replace(haystack, needle, replacement);
    }
    let mut current = str_of(haystack);
    loop {
        let next = current.replace(n.as_str(), r.as_str());
        if next == current {
            return Ok(Value::from(next));
        }
        current = next;
    }
}

/// Whether `lhs` (as text) starts with `rhs`.
pub fn starts_with(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    Ok(Value::from(
        str_of(lhs).starts_with(str_of(rhs).as_str()),
    ))
}

/// Appends `s` unless `n` is 1: the classic pluralizer.
pub fn pluralise(word: &Value, n: &Value) -> crate::Result<Value> {
    let count = n.expect_int()?;
    let w = str_of(word);
    if count == 1 {
        Ok(Value::from(w))
    } else {
        Ok(Value::from(format!("{w}s")))
    }
}

/// Centres each line of a sequence within the longest line's width.
pub fn centre(v: &Value) -> crate::Result<Value> {
    let lines: Vec<String> = match v {
        Value::Str(s) => s.lines().map(ToString::to_string).collect(),
        _ => to_vec(v)?.iter().map(str_of).collect(),
    };
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let centred: Vec<Value> = lines
        .into_iter()
        .map(|l| {
            let pad = (width - l.chars().count()) / 2;
            Value::from(format!("{}{l}", " ".repeat(pad)))
        })
        .collect();
    Ok(Value::list(centred))
}

/// Joins a sequence's elements vertically: element `i` of each row becomes
/// column `i`, padded with spaces.
pub fn vertical_join(v: &Value, pad: &Value) -> crate::Result<Value> {
    let rows: Vec<String> = to_vec(v)?.iter().map(str_of).collect();
    let height = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let pad_char = str_of(pad).chars().next().unwrap_or(' ');
    let mut lines = Vec::with_capacity(height);
    for level in (0..height).rev() {
        let line: String = rows
            .iter()
            .map(|row| {
                let chars: Vec<char> = row.chars().collect();
                if chars.len() > level {
                    chars[chars.len() - 1 - level]
                } else {
                    pad_char
                }
            })
            .collect();
        lines.push(line);
    }
    Ok(Value::from(lines.join("\n")))
}

/// Mirrors each line around a vertical axis.
pub fn vertical_mirror(v: &Value, flip: Option<(&str, &str)>) -> crate::Result<Value> {
    let text = str_of(v);
    let mirrored: Vec<String> = text
        .lines()
        .map(|line| {
            let reversed: String = line.chars().rev().collect();
            let reversed = match flip {
                Some((from, to)) => reversed
                    .chars()
                    .map(|c| {
                        from.chars()
                            .position(|f| f == c)
                            .and_then(|i| to.chars().nth(i))
                            .unwrap_or(c)
                    })
                    .collect(),
                None => reversed,
            };
            format!("{line}{reversed}")
        })
        .collect();
    Ok(Value::from(mirrored.join("\n")))
}

/// The bracket-aware vertical mirror: reversed halves flip `()[]{}<>/\`.
pub fn flip_brackets_vertical_mirror(v: &Value) -> crate::Result<Value> {
    vertical_mirror(v, Some(("()[]{}<>/\\", ")(][}{><\\/")))
}

/// Run-length encodes into `[element, count]` rows.
pub fn run_length_encode(v: &Value) -> crate::Result<Value> {
    let groups = super::seq::group_consecutive(v)?;
    let rows: Vec<Value> = groups
        .as_list()
        .map(|l| {
            l.materialize()
                .into_iter()
                .map(|g| {
                    let items = g.as_list().map(crate::List::materialize).unwrap_or_default();
                    let head = items.first().cloned().unwrap_or(Value::Int(0));
                    Value::list([head, Value::from(items.len())])
                })
                .collect()
        })
        .unwrap_or_default();
    Ok(Value::list(rows))
}

/// Decodes `[element, count]` rows back into a flat sequence.
pub fn run_length_decode(v: &Value) -> crate::Result<Value> {
    let rows = to_vec(v)?;
    let mut out: Vec<Value> = Vec::new();
    let mut all_text = true;
    for row in rows {
        let pair = to_vec(&row)?;
        if pair.len() != 2 {
            return Err(Error::type_mismatch(Type::Pair, row.value_type()));
        }
        let count = usize::try_from(pair[1].expect_int()?.max(0)).unwrap_or(0);
        all_text &= matches!(pair[0], Value::Str(_));
        out.extend(std::iter::repeat_n(pair[0].clone(), count));
    }
    if all_text {
        let joined: String = out.iter().filter_map(Value::as_str).collect();
        Ok(Value::from(joined))
    } else {
        Ok(Value::list(out))
    }
}

/// Splits text into runs of word symbols and runs of everything else.
pub fn split_on_words(v: &Value) -> crate::Result<Value> {
    let text = str_of(v);
    let mut out: Vec<Value> = Vec::new();
    let mut current = String::new();
    let mut current_is_word: Option<bool> = None;
    for c in text.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if current_is_word == Some(is_word) || current.is_empty() {
            current.push(c);
        } else {
            out.push(Value::from(std::mem::take(&mut current)));
            current.push(c);
        }
        current_is_word = Some(is_word);
    }
    if !current.is_empty() {
        out.push(Value::from(current));
    }
    Ok(Value::list(out))
}

/// Quotes a value back into source form.
pub fn uneval(v: &Value) -> crate::Result<Value> {
    let text = str_of(v);
    let escaped = text.replace('\\', "\\\\").replace('`', "\\`");
    Ok(Value::from(format!("`{escaped}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitting() {
        assert_eq!(
            split(&Value::from("a,b"), &Value::from(",")).unwrap(),
            Value::list([Value::from("a"), Value::from("b")])
        );
        assert_eq!(
            split_keep(&Value::from("a,b"), &Value::from(",")).unwrap(),
            Value::list([Value::from("a"), Value::from(","), Value::from("b")])
        );
    }

    #[test]
    fn joining() {
        let v = Value::list([Value::Int(1), Value::Int(2)]);
        assert_eq!(join_on(&v, &Value::from("-")).unwrap(), Value::from("1-2"));
        assert_eq!(join_newlines(&v).unwrap(), Value::from("1\n2"));
    }

    #[test]
    fn newline_split_or_pow_ten() {
        assert_eq!(
            split_newlines_or_pow_ten(&Value::from("a\nb")).unwrap(),
            Value::list([Value::from("a"), Value::from("b")])
        );
        assert_eq!(
            split_newlines_or_pow_ten(&Value::Int(3)).unwrap(),
            Value::Int(1000)
        );
    }

    #[test]
    fn replacement() {
        assert_eq!(
            replace(&Value::from("aaa"), &Value::from("a"), &Value::from("b")).unwrap(),
            Value::from("bbb")
        );
        assert_eq!(
            infinite_replace(&Value::from("aaab"), &Value::from("aa"), &Value::from("a")).unwrap(),
            Value::from("ab")
        );
    }

    #[test]
    fn stripping() {
        assert_eq!(
            strip(&Value::from("xxhixx"), &Value::from("x")).unwrap(),
            Value::from("hi")
        );
    }

    #[test]
    fn prefixes_and_plurals() {
        assert_eq!(
            starts_with(&Value::from("hello"), &Value::from("he")).unwrap(),
            Value::Int(1)
        );
        assert_eq!(
            pluralise(&Value::from("cat"), &Value::Int(2)).unwrap(),
            Value::from("cats")
        );
        assert_eq!(
            pluralise(&Value::from("cat"), &Value::Int(1)).unwrap(),
            Value::from("cat")
        );
    }

    #[test]
    fn run_length_round_trip() {
        let encoded = run_length_encode(&Value::from("aab")).unwrap();
        assert_eq!(
            encoded,
            Value::list([
                Value::list([Value::from("a"), Value::Int(2)]),
                Value::list([Value::from("b"), Value::Int(1)]),
            ])
        );
        assert_eq!(run_length_decode(&encoded).unwrap(), Value::from("aab"));
    }

    #[test]
    fn word_split() {
        assert_eq!(
            split_on_words(&Value::from("ab, cd")).unwrap(),
            Value::list([
                Value::from("ab"),
                Value::from(", "),
                Value::from("cd"),
            ])
        );
    }

    #[test]
    fn quoting() {
        assert_eq!(uneval(&Value::from("hi")).unwrap(), Value::from("`hi`"));
    }

    #[test]
    fn vertical_layout() {
        let v = Value::list([Value::from("ab"), Value::from("c")]);
        let joined = vertical_join(&v, &Value::from(" ")).unwrap();
        assert_eq!(joined, Value::from("a \nbc"));
    }
}
