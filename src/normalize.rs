//! Token normalization.
//!
//! Each helper borrows its input and returns a sub-slice, so steps chain by
//! plain composition and every step is idempotent.

/// Removes leading whitespace.
pub fn strip_leading_whitespace(s: &str) -> &str {
    s.trim_start()
}

/// Removes trailing whitespace.
pub fn strip_trailing_whitespace(s: &str) -> &str {
    s.trim_end()
}

/// Removes every trailing `\n` and `\r`.
pub fn strip_line_terminator(s: &str) -> &str {
    s.trim_end_matches(['\n', '\r'])
}

/// Applies all three normalizations in the order `type` uses them.
pub fn normalize_token(s: &str) -> &str {
    strip_trailing_whitespace(strip_line_terminator(strip_leading_whitespace(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "echo",
        "  echo  ",
        "hello\n",
        "hello\r\n",
        "hello\n\n",
        "\t mixed \t\r\n",
        "in ner",
    ];

    #[test]
    fn test_strip_leading_whitespace() {
        assert_eq!(strip_leading_whitespace("  \tabc "), "abc ");
    }

    #[test]
    fn test_strip_trailing_whitespace() {
        assert_eq!(strip_trailing_whitespace(" abc \t "), " abc");
    }

    #[test]
    fn test_strip_line_terminator() {
        assert_eq!(strip_line_terminator("hello\n"), "hello");
        assert_eq!(strip_line_terminator("hello\r\n"), "hello");
        assert_eq!(strip_line_terminator("hello "), "hello ");
    }

    #[test]
    fn test_normalizers_are_idempotent() {
        for s in SAMPLES {
            let once = strip_leading_whitespace(s);
            assert_eq!(strip_leading_whitespace(once), once);
            let once = strip_trailing_whitespace(s);
            assert_eq!(strip_trailing_whitespace(once), once);
            let once = strip_line_terminator(s);
            assert_eq!(strip_line_terminator(once), once);
            let once = normalize_token(s);
            assert_eq!(normalize_token(once), once);
        }
    }

    #[test]
    fn test_clean_input_is_unchanged() {
        assert_eq!(normalize_token("type"), "type");
        assert_eq!(normalize_token("in ner"), "in ner");
    }

    #[test]
    fn test_whitespace_only_normalizes_to_empty() {
        assert_eq!(normalize_token(" \t\r\n "), "");
    }
}
