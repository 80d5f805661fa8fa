/// Removes one layer of matching outer quotes (`"…"` or `'…'`) that an
/// upstream builder may have put around a key. Surrounding whitespace is
/// trimmed first. Anything else is returned untouched.
pub fn strip_outer_quotes(key: &str) -> &str {
    let trimmed = key.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_key_passes_through() {
        assert_eq!(strip_outer_quotes("country"), "country");
        assert_eq!(strip_outer_quotes("a.b.c"), "a.b.c");
    }

    #[test]
    fn test_strips_one_layer() {
        assert_eq!(strip_outer_quotes("\"country\""), "country");
        assert_eq!(strip_outer_quotes("'country'"), "country");
        assert_eq!(strip_outer_quotes("\"\"nested\"\""), "\"nested\"");
        assert_eq!(strip_outer_quotes("  \"padded\" "), "padded");
    }

    #[test]
    fn test_mismatched_or_inner_quotes_kept() {
        assert_eq!(strip_outer_quotes("\"half'"), "\"half'");
        assert_eq!(strip_outer_quotes("it's"), "it's");
        assert_eq!(strip_outer_quotes("a\"b\"c"), "a\"b\"c");
        assert_eq!(strip_outer_quotes("\""), "\"");
    }

    #[test]
    fn test_empty_quoted_key() {
        assert_eq!(strip_outer_quotes("\"\""), "");
    }
}
