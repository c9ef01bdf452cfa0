//! Numeric input sanitization for amount fields.

/// Strip everything but digits and the decimal point, keeping only the
/// first point. Mirrors what the amount fields enforce on every
/// keystroke, so pasting "1,200.50 INR" leaves "1200.50".
pub fn sanitize_numeric(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' if !seen_point => {
                seen_point = true;
                out.push(c);
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_numeric_characters() {
        assert_eq!(sanitize_numeric("1,200.50 INR"), "1200.50");
        assert_eq!(sanitize_numeric("abc"), "");
        assert_eq!(sanitize_numeric("₹500"), "500");
    }

    #[test]
    fn keeps_only_the_first_decimal_point() {
        assert_eq!(sanitize_numeric("1.2.3"), "1.23");
        assert_eq!(sanitize_numeric("..5"), ".5");
    }

    #[test]
    fn clean_input_is_untouched() {
        assert_eq!(sanitize_numeric("1200.50"), "1200.50");
        assert_eq!(sanitize_numeric(""), "");
    }
}
