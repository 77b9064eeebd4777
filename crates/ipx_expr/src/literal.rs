//! Based integer literals (`[size]'[s]<base><digits>`).
//!
//! The lexer and the `bit` type check both need the pieces of a based
//! literal rather than only its value: the declared size, the base, and the
//! digit string. [`parse_based_literal`] splits a literal into those parts
//! and rejects digits that do not belong to the base.

/// The base of a based literal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Base {
    /// `'b`
    Binary,
    /// `'o`
    Octal,
    /// `'d`
    Decimal,
    /// `'h`
    Hex,
}

impl Base {
    /// Maps a base letter (either case) to a base.
    pub fn from_char(c: char) -> Option<Base> {
        match c.to_ascii_lowercase() {
            'b' => Some(Base::Binary),
            'o' => Some(Base::Octal),
            'd' => Some(Base::Decimal),
            'h' => Some(Base::Hex),
            _ => None,
        }
    }

    /// Returns the numeric radix.
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hex => 16,
        }
    }
}

/// A based literal split into its parts.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BasedLiteral {
    /// The declared width in bits; `None` for an unsized literal such as `'h1`.
    pub size: Option<u32>,
    /// Whether the `s` signed marker was present.
    pub signed: bool,
    /// The base.
    pub base: Base,
    /// The digits with underscores removed, as written.
    pub digits: String,
}

impl BasedLiteral {
    /// Returns the number of digits, not counting underscores.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` if any digit is `x`, `z`, or `?`.
    pub fn has_unknown_bits(&self) -> bool {
        self.digits
            .chars()
            .any(|c| matches!(c, 'x' | 'X' | 'z' | 'Z' | '?'))
    }

    /// Returns the digits read in the literal's base, ignoring the declared size.
    ///
    /// `None` when a digit is unknown or the value does not fit in 128 bits.
    pub fn raw_value(&self) -> Option<i128> {
        if self.has_unknown_bits() {
            return None;
        }
        u128::from_str_radix(&self.digits, self.base.radix())
            .ok()
            .and_then(|v| i128::try_from(v).ok())
    }

    /// Returns the value the literal denotes: truncated to its size and,
    /// for signed literals, sign-extended from the top declared bit.
    pub fn value(&self) -> Option<i128> {
        let raw = self.raw_value()?;
        let size = match self.size {
            Some(size) if size < 127 => size,
            _ => return Some(raw),
        };
        let mask = (1i128 << size) - 1;
        let truncated = raw & mask;
        if self.signed && size > 0 && truncated & (1i128 << (size - 1)) != 0 {
            Some(truncated - (1i128 << size))
        } else {
            Some(truncated)
        }
    }

    /// Returns `true` if the digits, read without truncation, fit in `bits` bits.
    pub fn fits_in(&self, bits: u32) -> bool {
        match self.raw_value() {
            Some(v) if bits >= 127 => v >= 0,
            Some(v) => v >= 0 && v < (1i128 << bits),
            None => false,
        }
    }
}

/// Splits `text` into a [`BasedLiteral`] if the whole string is one.
///
/// Accepts an optional decimal size, a tick, an optional `s`/`S`, a base
/// letter, and at least one digit of that base (underscores allowed between
/// digits). `x`, `z` and `?` are accepted as digits for every base; a
/// decimal literal may only use them as its single digit. Surrounding
/// whitespace is not trimmed.
pub fn parse_based_literal(text: &str) -> Option<BasedLiteral> {
    let tick = text.find('\'')?;
    let (size_text, rest) = (&text[..tick], &text[tick + 1..]);

    let size = if size_text.is_empty() {
        None
    } else {
        let digits: String = size_text.chars().filter(|&c| c != '_').collect();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match digits.parse::<u32>() {
            Ok(0) | Err(_) => return None,
            Ok(size) => Some(size),
        }
    };

    let mut chars = rest.chars();
    let mut marker = chars.next()?;
    let signed = matches!(marker, 's' | 'S');
    if signed {
        marker = chars.next()?;
    }
    let base = Base::from_char(marker)?;

    let body = chars.as_str();
    if body.starts_with('_') {
        return None;
    }
    let digits: String = body.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return None;
    }
    let unknown = |c: char| matches!(c, 'x' | 'X' | 'z' | 'Z' | '?');
    let valid = match base {
        Base::Decimal => {
            digits.chars().all(|c| c.is_ascii_digit()) || (digits.len() == 1 && digits.chars().all(unknown))
        }
        _ => digits
            .chars()
            .all(|c| c.is_digit(base.radix()) || unknown(c)),
    };
    if !valid {
        return None;
    }

    Some(BasedLiteral {
        size,
        signed,
        base,
        digits,
    })
}

/// Returns `true` if `text` begins with a based literal prefix
/// (`[digits]'[s]<base letter>`), ignoring leading whitespace.
pub fn starts_with_based_literal(text: &str) -> bool {
    let text = text.trim_start();
    let size_len = text
        .bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b'_')
        .count();
    let mut rest = text[size_len..].chars();
    if rest.next() != Some('\'') {
        return false;
    }
    match rest.next() {
        Some('s') | Some('S') => rest.next().and_then(Base::from_char).is_some(),
        Some(c) => Base::from_char(c).is_some(),
        None => false,
    }
}

/// Parses a plain decimal integer with optional underscores.
pub fn parse_decimal(text: &str) -> Option<i128> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sized_binary() {
        let lit = parse_based_literal("2'b11").unwrap();
        assert_eq!(lit.size, Some(2));
        assert_eq!(lit.base, Base::Binary);
        assert_eq!(lit.digits, "11");
        assert_eq!(lit.value(), Some(3));
    }

    #[test]
    fn unsized_hex() {
        let lit = parse_based_literal("'hED").unwrap();
        assert_eq!(lit.size, None);
        assert_eq!(lit.value(), Some(0xED));
    }

    #[test]
    fn underscores_are_ignored() {
        let lit = parse_based_literal("16'h12_89").unwrap();
        assert_eq!(lit.digit_count(), 4);
        assert_eq!(lit.value(), Some(0x1289));
    }

    #[test]
    fn digits_must_match_base() {
        assert!(parse_based_literal("3'b13").is_none());
        assert!(parse_based_literal("3'b3f").is_none());
        assert!(parse_based_literal("8'o9").is_none());
        assert!(parse_based_literal("4'hG").is_none());
    }

    #[test]
    fn malformed_prefixes() {
        assert!(parse_based_literal("'").is_none());
        assert!(parse_based_literal("'b").is_none());
        assert!(parse_based_literal("0'b1").is_none());
        assert!(parse_based_literal("a'b1").is_none());
        assert!(parse_based_literal("'q1").is_none());
        assert!(parse_based_literal("12").is_none());
    }

    #[test]
    fn value_truncates_to_size() {
        let lit = parse_based_literal("2'b111").unwrap();
        assert_eq!(lit.raw_value(), Some(7));
        assert_eq!(lit.value(), Some(3));
        assert!(!lit.fits_in(2));
        assert!(lit.fits_in(3));
    }

    #[test]
    fn signed_literal_sign_extends() {
        let lit = parse_based_literal("4'sb1111").unwrap();
        assert!(lit.signed);
        assert_eq!(lit.value(), Some(-1));
        assert_eq!(parse_based_literal("4'sb0111").unwrap().value(), Some(7));
    }

    #[test]
    fn unknown_bits_have_no_value() {
        let lit = parse_based_literal("4'b10x1").unwrap();
        assert!(lit.has_unknown_bits());
        assert_eq!(lit.value(), None);
        assert!(parse_based_literal("'dx").is_some());
        assert!(parse_based_literal("'d1x").is_none());
    }

    #[test]
    fn based_prefix_detection() {
        assert!(starts_with_based_literal("'h1 + 'h1"));
        assert!(starts_with_based_literal("  8'hff"));
        assert!(starts_with_based_literal("4'sb1"));
        assert!(!starts_with_based_literal("'1"));
        assert!(!starts_with_based_literal("12"));
        assert!(!starts_with_based_literal("x'h1"));
    }

    #[test]
    fn decimal_parsing() {
        assert_eq!(parse_decimal("1_000"), Some(1000));
        assert_eq!(parse_decimal("-1"), None);
        assert_eq!(parse_decimal(""), None);
    }
}
