use log::debug;

/// Characters allowed through to the parser
fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%' | ' ')
}

/// Strip every character outside the arithmetic whitelist
///
/// Disallowed characters are deleted rather than rejected, so `"2^3"`
/// becomes `"23"` and `"two plus two"` becomes an empty string. The parser
/// decides afterwards whether what is left is a valid expression.
pub fn sanitize(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| is_allowed(*c)).collect();
    if cleaned.len() != raw.len() {
        debug!("Sanitized '{}' to '{}'", raw, cleaned);
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_passes_whitelisted_input_through() {
        assert_eq!(sanitize("1 + 2 * (3.5 % 4) / -5"), "1 + 2 * (3.5 % 4) / -5");
    }

    #[test]
    fn test_sanitize_strips_letters() {
        assert_eq!(sanitize("two plus two"), "  ");
        assert_eq!(sanitize("1 apple + 2 oranges"), "1  + 2 ");
    }

    #[test]
    fn test_sanitize_caret_becomes_adjacent_digits() {
        // '^' is not whitelisted, so "2^3" collapses to "23"
        assert_eq!(sanitize("2^3"), "23");
    }

    #[test]
    fn test_sanitize_strips_injection_attempt() {
        assert_eq!(sanitize("__import__('os').system('ls')"), "().()");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "2 + 2",
            "2^3",
            "__import__('os').system('ls')",
            "hello world",
            "",
            "((1.5))",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }
}
