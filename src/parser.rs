use crate::error::{Result, ShellError};

/// Returns true for characters that separate tokens: whitespace and commas.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Splits an input string into a vector of tokens.
///
/// Tokens are separated by any run of whitespace or commas. No quoting or
/// escaping is performed, and separators never produce empty tokens.
///
/// # Example
/// ```
/// use minishell::tokenize;
///
/// let args = tokenize("echo, type  pwd");
/// assert_eq!(args, vec!["echo", "type", "pwd"]);
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if is_separator(c) {
            chars.next();
            continue;
        }

        let mut arg = String::new();
        while let Some(&c) = chars.peek() {
            if is_separator(c) {
                break;
            }
            arg.push(c);
            chars.next();
        }
        args.push(arg);
    }
    args
}

/// Like [`tokenize`], but refuses to produce more than `limit` tokens.
///
/// Exceeding the limit is reported as [`ShellError::TooManyTokens`] instead of
/// truncating the list.
pub fn tokenize_bounded(input: &str, limit: usize) -> Result<Vec<String>> {
    let args = tokenize(input);
    if args.len() > limit {
        return Err(ShellError::TooManyTokens { limit });
    }
    Ok(args)
}

/// Splits a line into its command name and the raw argument text after it.
///
/// The argument keeps its internal spacing; only the whitespace separating it
/// from the command is dropped. `None` means nothing followed the command.
pub fn split_command(line: &str) -> (&str, Option<&str>) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(idx) => {
            let rest = line[idx..].trim_start();
            let argument = if rest.is_empty() { None } else { Some(rest) };
            (&line[..idx], argument)
        }
        None => (line, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_whitespace_and_commas() {
        assert_eq!(tokenize("echo type"), vec!["echo", "type"]);
        assert_eq!(tokenize("a,b , c\t\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_tokenize_empty_and_separators_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,, \t ").is_empty());
    }

    #[test]
    fn test_tokenize_bounded_at_limit() {
        let args = tokenize_bounded("a b c", 3).unwrap();
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_tokenize_bounded_over_limit() {
        let err = tokenize_bounded("a b c d", 3).unwrap_err();
        assert!(matches!(err, ShellError::TooManyTokens { limit: 3 }));
    }

    #[test]
    fn test_split_command_with_argument() {
        assert_eq!(
            split_command("echo   hello   world"),
            ("echo", Some("hello   world"))
        );
    }

    #[test]
    fn test_split_command_without_argument() {
        assert_eq!(split_command("pwd"), ("pwd", None));
        assert_eq!(split_command("pwd   "), ("pwd", None));
        assert_eq!(split_command(""), ("", None));
    }
}
