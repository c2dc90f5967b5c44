/*
    Decimal literal grammar

        literal  := '-'? integer fraction? exponent?
        integer  := '0' | [1-9] [0-9]*
        fraction := '.' [0-9]+
        exponent := [eE] [+-]? [0-9]+
*/

use crate::ConvertError;

/// A decimal literal split into its syntactic parts.
/// Every part borrows from the scanned string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Literal<'a> {
    pub negative: bool,
    pub integer: &'a str,
    pub fraction: &'a str,
    pub exponent_negative: bool,
    pub exponent_digits: &'a str,
}

// Exponents saturate at this magnitude.
const EXPONENT_LIMIT: i64 = i64::MAX / 4;

// Advances `pos` past any ASCII digits.
fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

impl<'a> Literal<'a> {
    /// Scans `src` against the literal grammar. The whole string must match.
    pub fn scan(src: &'a str) -> Result<Self, ConvertError> {
        let bytes = src.as_bytes();
        let fail = |offset: usize| ConvertError::Syntax {
            literal: src.to_string(),
            offset,
        };

        // sign
        let negative = bytes.first() == Some(&b'-');
        let mut pos = usize::from(negative);

        // integer part: a lone zero or a non-zero leading digit
        let start = pos;
        match bytes.get(pos) {
            Some(b'0') => pos += 1,
            Some(b'1'..=b'9') => pos = skip_digits(bytes, pos + 1),
            _ => return Err(fail(pos)),
        }
        let integer = &src[start..pos];

        // fraction
        let mut fraction = "";
        if bytes.get(pos) == Some(&b'.') {
            let start = pos + 1;
            pos = skip_digits(bytes, start);
            if pos == start {
                return Err(fail(pos));
            }
            fraction = &src[start..pos];
        }

        // exponent
        let mut exponent_negative = false;
        let mut exponent_digits = "";
        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            pos += 1;
            match bytes.get(pos) {
                Some(b'-') => {
                    exponent_negative = true;
                    pos += 1;
                }
                Some(b'+') => pos += 1,
                _ => {}
            }
            let start = pos;
            pos = skip_digits(bytes, start);
            if pos == start {
                return Err(fail(pos));
            }
            exponent_digits = &src[start..pos];
        }

        if pos != bytes.len() {
            return Err(fail(pos));
        }

        Ok(Self {
            negative,
            integer,
            fraction,
            exponent_negative,
            exponent_digits,
        })
    }

    /// Returns the same literal without its sign.
    pub fn unsigned(self) -> Self {
        Self {
            negative: false,
            ..self
        }
    }

    /// Returns the signed exponent, saturating far outside of
    /// any range where the result could matter.
    pub fn exponent(&self) -> i64 {
        let magnitude = self
            .exponent_digits
            .bytes()
            .fold(0i64, |acc, b| {
                acc.saturating_mul(10)
                    .saturating_add(i64::from(b - b'0'))
                    .min(EXPONENT_LIMIT)
            });
        if self.exponent_negative {
            -magnitude
        } else {
            magnitude
        }
    }
}
