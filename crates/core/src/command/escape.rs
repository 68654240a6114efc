//! POSIX shell escaping for command strings

/// Quote a single argument so the shell passes it through verbatim.
///
/// The value is wrapped in single quotes; embedded single quotes become `'\''`.
pub fn escape_shell_arg(arg: &str) -> String {
    let mut escaped = String::with_capacity(arg.len() + 2);
    escaped.push('\'');
    for c in arg.chars() {
        if c == '\'' {
            escaped.push_str("'\\''");
        } else {
            escaped.push(c);
        }
    }
    escaped.push('\'');
    escaped
}

const SHELL_METACHARACTERS: &[char] = &[
    '#', '&', ';', '`', '|', '*', '?', '~', '<', '>', '^', '(', ')', '[', ']', '{', '}', '$',
    '\\', '\n',
];

/// Escape the characters of a command that would let it chain or redirect.
///
/// Quotes are left alone when they come in pairs; an unpaired quote is
/// escaped like any other metacharacter.
pub fn escape_shell_cmd(cmd: &str) -> String {
    let chars: Vec<char> = cmd.chars().collect();
    let mut escaped = String::with_capacity(cmd.len());
    let mut open_quote: Option<char> = None;

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '"' | '\'' => {
                if open_quote.is_none() && chars[i + 1..].contains(&c) {
                    open_quote = Some(c);
                } else if open_quote == Some(c) {
                    open_quote = None;
                } else {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            c if SHELL_METACHARACTERS.contains(&c) => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_shell_arg() {
        assert_eq!(escape_shell_arg("foo"), "'foo'");
        assert_eq!(escape_shell_arg(""), "''");
        assert_eq!(escape_shell_arg("a b"), "'a b'");
        assert_eq!(escape_shell_arg("it's"), "'it'\\''s'");
        assert_eq!(escape_shell_arg("$(rm -rf /)"), "'$(rm -rf /)'");
    }

    #[test]
    fn test_escape_shell_cmd_leaves_plain_paths_alone() {
        assert_eq!(
            escape_shell_cmd("node_modules/.bin/tslint"),
            "node_modules/.bin/tslint"
        );
    }

    #[test]
    fn test_escape_shell_cmd_escapes_metacharacters() {
        assert_eq!(escape_shell_cmd("tslint; rm -rf ~"), "tslint\\; rm -rf \\~");
        assert_eq!(escape_shell_cmd("a|b&c"), "a\\|b\\&c");
        assert_eq!(escape_shell_cmd("$HOME/bin"), "\\$HOME/bin");
    }

    #[test]
    fn test_escape_shell_cmd_keeps_non_ascii_letters() {
        assert_eq!(
            escape_shell_cmd("/home/zoÿ/bin/tslint"),
            "/home/zoÿ/bin/tslint"
        );
    }

    #[test]
    fn test_escape_shell_cmd_quotes() {
        assert_eq!(escape_shell_cmd("'paired'"), "'paired'");
        assert_eq!(escape_shell_cmd("\"paired\""), "\"paired\"");
        assert_eq!(escape_shell_cmd("un'paired"), "un\\'paired");
        assert_eq!(escape_shell_cmd("'a\"b'"), "'a\\\"b'");
    }
}
