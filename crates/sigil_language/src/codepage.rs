//! The 256-symbol code page.
//!
//! The code page is the alphabet for both tokens and compressed literals:
//! position equals byte value. The ordering is a compatibility surface
//! (previously encoded literals depend on it) and must never change.

use std::collections::HashMap;

use sigil_foundation::{Error, Result};

/// The code page symbols in byte order.
pub const CODE_PAGE: &str = concat!(
    "λƛ¬∧⟑∨⟇÷×«\n»°•ß†€",
    "½∆ø↔¢⌐æʀʁɾɽÞƈ∞¨ ",
    "!\"#$%&'()*+,-./01",
    "23456789:;<=>?@A",
    "BCDEFGHIJKLMNOPQ",
    "RSTUVWXYZ[\\]`^_abc",
    "defghijklmnopqrs",
    "tuvwxyz{|}~↑↓∴∵›",
    "‹∷¤ð→←βτȧḃċḋėḟġḣ",
    "ḭŀṁṅȯṗṙṡṫẇẋẏż√⟨⟩",
    "‛₀₁₂₃₄₅₆₇₈¶⁋§ε¡",
    "∑¦≈µȦḂĊḊĖḞĠḢİĿṀṄ",
    "ȮṖṘṠṪẆẊẎŻ₌₍⁰¹²∇⌈",
    "⌊¯±₴…□↳↲⋏⋎꘍ꜝ℅≤≥",
    "≠⁼ƒɖ∪∩⊍£¥⇧⇩ǍǎǏǐǑ",
    "ǒǓǔ⁽‡≬⁺↵⅛¼¾Π„‟",
);

/// Bijective mapping between bytes 0–255 and the 256 code-page symbols.
pub struct CodePage {
    symbols: Vec<char>,
    bytes: HashMap<char, u8>,
}

impl CodePage {
    /// Builds and validates the code page.
    ///
    /// # Errors
    ///
    /// Returns [`sigil_foundation::ErrorKind::MalformedTable`] if the page
    /// does not hold exactly 256 pairwise-distinct symbols. This is fatal at
    /// process start: a malformed page means the build itself is defective.
    pub fn new() -> Result<Self> {
        let symbols: Vec<char> = CODE_PAGE.chars().collect();
        if symbols.len() != 256 {
            return Err(Error::malformed_table(format!(
                "code page has {} symbols, expected 256",
                symbols.len()
            )));
        }
        let mut bytes = HashMap::with_capacity(256);
        for (i, &c) in symbols.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            if bytes.insert(c, i as u8).is_some() {
                return Err(Error::malformed_table(format!(
                    "duplicate code page symbol {c:?}"
                )));
            }
        }
        Ok(Self { symbols, bytes })
    }

    /// The symbol at the given byte value.
    #[must_use]
    pub fn symbol_of(&self, byte: u8) -> char {
        self.symbols[usize::from(byte)]
    }

    /// The byte value of the given symbol, if it is on the page.
    #[must_use]
    pub fn byte_of(&self, symbol: char) -> Option<u8> {
        self.bytes.get(&symbol).copied()
    }

    /// Whether the symbol is on the page.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.bytes.contains_key(&symbol)
    }
}
