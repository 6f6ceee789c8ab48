//! Matrix and nested-sequence primitives.

use crate::error::Error;
use crate::types::Type;
use crate::value::Value;

use super::to_vec;

fn rows_of(v: &Value) -> crate::Result<Vec<Vec<Value>>> {
    to_vec(v)?.iter().map(to_vec).collect()
}

/// Transposes rows and columns, truncating to the shortest row.
pub fn transpose(v: &Value) -> crate::Result<Value> {
    let rows = rows_of(v)?;
    let width = rows.iter().map(Vec::len).min().unwrap_or(0);
    let mut out = Vec::with_capacity(width);
    for col in 0..width {
        out.push(Value::list(rows.iter().map(|r| r[col].clone())));
    }
    Ok(Value::list(out))
}

/// Transposes rows and columns, padding short rows with `fill`.
pub fn transpose_fill(v: &Value, fill: &Value) -> crate::Result<Value> {
    let rows = rows_of(v)?;
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(width);
    for col in 0..width {
        out.push(Value::list(
            rows.iter()
                .map(|r| r.get(col).cloned().unwrap_or_else(|| fill.clone())),
        ));
    }
    Ok(Value::list(out))
}

/// The main diagonal.
pub fn main_diagonal(v: &Value) -> crate::Result<Value> {
    let rows = rows_of(v)?;
    Ok(Value::list(
        rows.iter()
            .enumerate()
            .filter_map(|(i, r)| r.get(i).cloned()),
    ))
}

/// The anti-diagonal (top-right to bottom-left).
pub fn anti_diagonal(v: &Value) -> crate::Result<Value> {
    let rows = rows_of(v)?;
    Ok(Value::list(rows.iter().enumerate().filter_map(|(i, r)| {
        r.len().checked_sub(i + 1).and_then(|j| r.get(j).cloned())
    })))
}

/// Every diagonal, from the bottom-left corner to the top-right.
pub fn diagonals(v: &Value) -> crate::Result<Value> {
    let rows = rows_of(v)?;
    let height = rows.len();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if height == 0 {
        return Ok(Value::list([]));
    }
    let mut out = Vec::new();
    // Diagonal d collects cells where col - row == d.
    let lo = -(i64::try_from(height).unwrap_or(0) - 1);
    let hi = i64::try_from(width).unwrap_or(0) - 1;
    for d in lo..=hi {
        let mut diag = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            let c = i64::try_from(r).unwrap_or(0) + d;
            if c >= 0 {
                if let Some(cell) = row.get(usize::try_from(c).unwrap_or(usize::MAX)) {
                    diag.push(cell.clone());
                }
            }
        }
        if !diag.is_empty() {
            out.push(Value::list(diag));
        }
    }
    Ok(Value::list(out))
}

/// Every contiguous sublist, shorter ones first.
pub fn sublists(v: &Value) -> crate::Result<Value> {
    let items = to_vec(v)?;
    let mut out = Vec::new();
    for len in 1..=items.len() {
        for start in 0..=(items.len() - len) {
            out.push(Value::list(items[start..start + len].to_vec()));
        }
    }
    Ok(Value::list(out))
}

/// Dot product of two numeric sequences.
pub fn dot_product(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let a = to_vec(lhs)?;
    let b = to_vec(rhs)?;
    let mut acc = Value::Int(0);
    for (x, y) in a.into_iter().zip(b) {
        let term = super::arith::multiply(x, y)?;
        acc = super::arith::add(acc, term)?;
    }
    Ok(acc)
}

/// Matrix multiplication.
pub fn matrix_multiply(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    let a = rows_of(lhs)?;
    let b = rows_of(rhs)?;
    let b_t = transpose(rhs)?;
    let b_cols = rows_of(&b_t)?;
    if a.iter().any(|r| r.len() != b.len()) {
        return Err(Error::type_mismatch(Type::List, Type::List));
    }
    let mut out = Vec::with_capacity(a.len());
    for row in &a {
        let mut out_row = Vec::with_capacity(b_cols.len());
        for col in &b_cols {
            out_row.push(dot_product(
                &Value::list(row.clone()),
                &Value::list(col.clone()),
            )?);
        }
        out.push(Value::list(out_row));
    }
    Ok(Value::list(out))
}

/// Determinant by Laplace expansion.
pub fn determinant(v: &Value) -> crate::Result<Value> {
    let rows = rows_of(v)?;
    let n = rows.len();
    if rows.iter().any(|r| r.len() != n) {
        return Err(Error::type_mismatch(Type::List, Type::List));
    }
    let mut m = Vec::with_capacity(n);
    for row in &rows {
        let mut out_row = Vec::with_capacity(n);
        for cell in row {
            out_row.push(cell.expect_number()?);
        }
        m.push(out_row);
    }
    Ok(Value::Float(det(&m)))
}

fn det(m: &[Vec<f64>]) -> f64 {
    match m.len() {
        0 => 1.0,
        1 => m[0][0],
        2 => m[0][0] * m[1][1] - m[0][1] * m[1][0],
        n => {
            let mut acc = 0.0;
            for col in 0..n {
                let minor: Vec<Vec<f64>> = m[1..]
                    .iter()
                    .map(|row| {
                        row.iter()
                            .enumerate()
                            .filter(|(c, _)| *c != col)
                            .map(|(_, x)| *x)
                            .collect()
                    })
                    .collect();
                let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                acc += sign * m[0][col] * det(&minor);
            }
            acc
        }
    }
}
