//! Conversion of evaluated integers to based-literal text.

/// Formats evaluated values in a given radix.
pub struct ValueFormatter;

impl ValueFormatter {
    /// Formats a decimal integer string in `radix`.
    ///
    /// Radix 2 produces an unsized binary literal (`'b101`), with a negative
    /// value keeping its sign in front of the tick. Input that is not a
    /// decimal integer, or any other radix, returns the input unchanged.
    pub fn format(value: &str, radix: u32) -> String {
        let Ok(number) = value.trim().parse::<i128>() else {
            return value.to_string();
        };
        if radix != 2 {
            return value.to_string();
        }
        let sign = if number < 0 { "-" } else { "" };
        format!("{sign}'b{:b}", number.unsigned_abs())
    }
}
