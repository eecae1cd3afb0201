// SPDX-License-Identifier: Apache-2.0

//! Korean-locale string ordering.
//!
//! Approximates the `ko` tailoring of the Unicode collation algorithm:
//! spaces sort first, then punctuation and symbols, then digits, then Hangul
//! (in 가나다 order), then Han, then Latin, then everything else. Input is
//! NFKC-folded first, so `㈜` keys as `(주)` and fullwidth forms key as their
//! ASCII counterparts. Case is ignored at the primary level and only breaks
//! ties, lowercase first.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScriptClass {
    Whitespace,
    Punctuation,
    Digit,
    Hangul,
    Han,
    Latin,
    Other,
}

impl ScriptClass {
    #[must_use]
    pub fn of(c: char) -> Self {
        let cp = c as u32;
        if c.is_whitespace() {
            Self::Whitespace
        } else if !c.is_alphanumeric() {
            // Everything outside the letter and number categories: P*, S*, Z*, C*.
            Self::Punctuation
        } else if c.is_numeric() {
            Self::Digit
        } else if (0xAC00..=0xD7A3).contains(&cp)
            || (0x1100..=0x11FF).contains(&cp)
            || (0x3130..=0x318F).contains(&cp)
        {
            Self::Hangul
        } else if (0x4E00..=0x9FFF).contains(&cp)
            || (0x3400..=0x4DBF).contains(&cp)
            || (0xF900..=0xFAFF).contains(&cp)
        {
            Self::Han
        } else if c.is_alphabetic() && cp < 0x0250 {
            Self::Latin
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollationKey {
    primary: Vec<(ScriptClass, char)>,
    tertiary: Vec<bool>,
}

#[must_use]
pub fn collation_key(input: &str) -> CollationKey {
    let mut primary = Vec::with_capacity(input.len());
    let mut tertiary = Vec::with_capacity(input.len());
    for c in input.nfkc() {
        let class = ScriptClass::of(c);
        for lower in c.to_lowercase() {
            primary.push((class, lower));
        }
        tertiary.push(c.is_uppercase());
    }
    CollationKey { primary, tertiary }
}

#[must_use]
pub fn compare_localized(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
