//! Line protocol for driving the translators from standard input.
//!
//! ```text
//! :down <keycode> [char]    key-down, optionally with the resolved character
//!                           (`\s` space, `\t` tab, `\n` newline, `\\`, or `U+XXXX`)
//! :up <keycode>             key-up
//! :repeat <keycode> <count> auto-repeat of a held key
//! :map <name>               switch the character map
//! ::literal                 text starting with ':'
//! anything else             committed text
//! ```

use thiserror::Error;

/// Error type for input line parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument for :{0}")]
    MissingArgument(&'static str),
    #[error("invalid keycode: {0}")]
    InvalidKeyCode(String),
    #[error("invalid repeat count: {0}")]
    InvalidCount(String),
    #[error("invalid character: {0}")]
    InvalidCharacter(String),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    KeyDown { key_code: u16, character: Option<char> },
    KeyUp { key_code: u16 },
    Repeat { key_code: u16, count: u32 },
    SetKeyMap(String),
    Text(String),
}

impl Command {
    /// Parses a single line (without its trailing newline).
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for malformed `:` commands. Plain text never fails.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        if let Some(literal) = line.strip_prefix("::") {
            return Ok(Command::Text(format!(":{literal}")));
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Command::Text(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        match parts.next() {
            Some("down") => {
                let key_code = key_code_arg(parts.next(), "down")?;
                let character = parts.next().map(character_arg).transpose()?;
                Ok(Command::KeyDown {
                    key_code,
                    character,
                })
            }
            Some("up") => Ok(Command::KeyUp {
                key_code: key_code_arg(parts.next(), "up")?,
            }),
            Some("repeat") => {
                let key_code = key_code_arg(parts.next(), "repeat")?;
                let raw = parts.next().ok_or(CommandError::MissingArgument("repeat"))?;
                let count = raw
                    .parse()
                    .map_err(|_| CommandError::InvalidCount(raw.to_string()))?;
                Ok(Command::Repeat { key_code, count })
            }
            Some("map") => parts
                .next()
                .map(|name| Command::SetKeyMap(name.to_string()))
                .ok_or(CommandError::MissingArgument("map")),
            Some(other) => Err(CommandError::UnknownCommand(other.to_string())),
            None => Err(CommandError::UnknownCommand(String::new())),
        }
    }
}

fn key_code_arg(raw: Option<&str>, command: &'static str) -> Result<u16, CommandError> {
    let raw = raw.ok_or(CommandError::MissingArgument(command))?;
    raw.parse()
        .map_err(|_| CommandError::InvalidKeyCode(raw.to_string()))
}

/// A single character, a backslash escape, or a `U+` code point.
fn character_arg(raw: &str) -> Result<char, CommandError> {
    let invalid = || CommandError::InvalidCharacter(raw.to_string());
    match raw {
        "\\s" => return Ok(' '),
        "\\t" => return Ok('\t'),
        "\\n" => return Ok('\n'),
        "\\\\" => return Ok('\\'),
        _ => {}
    }
    if let Some(hex) = raw.strip_prefix("U+").or_else(|| raw.strip_prefix("u+")) {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(invalid);
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_text() {
        assert_eq!(Command::parse("Hello"), Ok(Command::Text("Hello".into())));
        assert_eq!(Command::parse(""), Ok(Command::Text(String::new())));
    }

    #[test]
    fn test_double_colon_escapes_literal_colon() {
        assert_eq!(Command::parse("::up"), Ok(Command::Text(":up".into())));
    }

    #[test]
    fn test_down_with_and_without_character() {
        assert_eq!(
            Command::parse(":down 29 A"),
            Ok(Command::KeyDown {
                key_code: 29,
                character: Some('A')
            })
        );
        assert_eq!(
            Command::parse(":down 19"),
            Ok(Command::KeyDown {
                key_code: 19,
                character: None
            })
        );
    }

    #[test]
    fn test_down_character_accepts_escapes_and_code_points() {
        // Arrange
        let cases = [
            (":down 62 \\s", ' '),
            (":down 61 \\t", '\t'),
            (":down 66 \\n", '\n'),
            (":down 73 \\\\", '\\'),
            (":down 62 U+0020", ' '),
            (":down 29 u+e9", 'é'),
        ];

        for (line, expected) in cases {
            // Act
            let parsed = Command::parse(line);

            // Assert
            assert!(
                matches!(parsed, Ok(Command::KeyDown { character: Some(c), .. }) if c == expected),
                "{line:?} gave {parsed:?}"
            );
        }
    }

    #[test]
    fn test_down_character_rejects_words_and_bad_code_points() {
        assert_eq!(
            Command::parse(":down 29 ab"),
            Err(CommandError::InvalidCharacter("ab".into()))
        );
        assert_eq!(
            Command::parse(":down 29 U+D800"),
            Err(CommandError::InvalidCharacter("U+D800".into()))
        );
        assert_eq!(
            Command::parse(":down 29 U+zz"),
            Err(CommandError::InvalidCharacter("U+zz".into()))
        );
    }

    #[test]
    fn test_up_repeat_and_map() {
        assert_eq!(Command::parse(":up 19"), Ok(Command::KeyUp { key_code: 19 }));
        assert_eq!(
            Command::parse(":repeat 20 3"),
            Ok(Command::Repeat {
                key_code: 20,
                count: 3
            })
        );
        assert_eq!(Command::parse(":map de_DE"), Ok(Command::SetKeyMap("de_DE".into())));
    }

    #[test]
    fn test_malformed_commands_are_rejected() {
        assert_eq!(Command::parse(":up"), Err(CommandError::MissingArgument("up")));
        assert_eq!(
            Command::parse(":down abc"),
            Err(CommandError::InvalidKeyCode("abc".into()))
        );
        assert_eq!(
            Command::parse(":repeat 20 x"),
            Err(CommandError::InvalidCount("x".into()))
        );
        assert_eq!(
            Command::parse(":jump 1"),
            Err(CommandError::UnknownCommand("jump".into()))
        );
        assert_eq!(Command::parse(":map"), Err(CommandError::MissingArgument("map")));
    }
}
