/// A literal whose text reads as a number, borrowing the literal text so
/// the rendered numeral keeps its exact precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeral<'a> {
    Integer(&'a str),
    Decimal(&'a str),
}

impl<'a> Numeral<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Numeral::Integer(text) | Numeral::Decimal(text) => text,
        }
    }
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_decimal(text: &str) -> bool {
    let unsigned = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty() && fraction.is_empty() {
        return false;
    }

    whole.chars().all(|c| c.is_ascii_digit()) && fraction.chars().all(|c| c.is_ascii_digit())
}

/// Classify literal text, preferring the integer reading over the decimal
/// one. Returns `None` for anything that must be emitted as a string.
pub fn classify_numeral(text: &str) -> Option<Numeral<'_>> {
    if is_integer(text) {
        Some(Numeral::Integer(text))
    } else if is_decimal(text) {
        Some(Numeral::Decimal(text))
    } else {
        None
    }
}
