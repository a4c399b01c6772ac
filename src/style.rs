//! Terminal text styling.

use termion::color::{self, Color};

/// Wraps `text` in foreground color escapes when `enabled` is set.
///
/// Nothing is written to the terminal here; the caller decides where the
/// returned string goes.
pub fn paint<C: Color>(text: &str, fg: C, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color::Fg(fg), text, color::Fg(color::Reset))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_disabled_is_plain() {
        assert_eq!(paint("echo", color::Red, false), "echo");
    }

    #[test]
    fn test_paint_enabled_wraps_text() {
        let painted = paint("echo", color::Red, true);
        assert_eq!(
            painted,
            format!("{}echo{}", color::Fg(color::Red), color::Fg(color::Reset))
        );
        assert!(painted.starts_with('\x1b'));
    }
}
