//! Command inventory and line parser
//!
//! One text line maps to at most one [`Command`]. Parsing is pure: nothing
//! here touches an album. [`crate::apply::apply`] executes a parsed command.
//!
//! ```text
//! shape    <name> <type> <x> <y> <w|rx> <h|ry> <r> <g> <b>
//! move     <name> <x> <y>
//! color    <name> <r> <g> <b>
//! resize   <name> <p1> <p2>
//! remove   <name>
//! snapshot [description to end of line]
//! ```
//!
//! Coordinates and dimensions are floats. Color components are integers in
//! 0..=255 and are scaled to `[0, 1]` when applied.

use std::str::SplitWhitespace;

use crate::errors::{AlbumError, Result};

/// A single parsed album command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a fully specified shape
    Shape {
        name: String,
        shape_type: String,
        x: f64,
        y: f64,
        first: f64,
        second: f64,
        r: i64,
        g: i64,
        b: i64,
    },

    /// Reposition a live shape
    Move { name: String, x: f64, y: f64 },

    /// Recolor a live shape with 0..=255 components
    Color {
        name: String,
        r: i64,
        g: i64,
        b: i64,
    },

    /// Resize a live shape
    Resize {
        name: String,
        first: f64,
        second: f64,
    },

    /// Remove a live shape
    Remove { name: String },

    /// Capture a snapshot; the description may be empty
    Snapshot { description: String },
}

impl Command {
    /// Lowercase keyword that introduces this command
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Shape { .. } => "shape",
            Command::Move { .. } => "move",
            Command::Color { .. } => "color",
            Command::Resize { .. } => "resize",
            Command::Remove { .. } => "remove",
            Command::Snapshot { .. } => "snapshot",
        }
    }
}

/// Parse one input line
///
/// Returns `Ok(None)` for blank lines and `#` comments. The keyword is
/// case-insensitive; the `snapshot` description keeps its original case and
/// inner spacing. Tokens past a command's fixed arguments are ignored.
///
/// # Errors
///
/// Returns `Format` for an unknown keyword, a missing argument, or a token
/// that is not a valid number.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };
    let keyword = keyword.to_lowercase();

    let command = match keyword.as_str() {
        "shape" => {
            let mut args = Args::new("shape", rest);
            let command = Command::Shape {
                name: args.name()?,
                shape_type: args.word("type")?,
                x: args.float("x")?,
                y: args.float("y")?,
                first: args.float("width or x radius")?,
                second: args.float("height or y radius")?,
                r: args.int("r")?,
                g: args.int("g")?,
                b: args.int("b")?,
            };
            args.done();
            command
        }
        "move" => {
            let mut args = Args::new("move", rest);
            let command = Command::Move {
                name: args.name()?,
                x: args.float("x")?,
                y: args.float("y")?,
            };
            args.done();
            command
        }
        "color" => {
            let mut args = Args::new("color", rest);
            let command = Command::Color {
                name: args.name()?,
                r: args.int("r")?,
                g: args.int("g")?,
                b: args.int("b")?,
            };
            args.done();
            command
        }
        "resize" => {
            let mut args = Args::new("resize", rest);
            let command = Command::Resize {
                name: args.name()?,
                first: args.float("first dimension")?,
                second: args.float("second dimension")?,
            };
            args.done();
            command
        }
        "remove" => {
            let mut args = Args::new("remove", rest);
            let command = Command::Remove { name: args.name()? };
            args.done();
            command
        }
        "snapshot" => Command::Snapshot {
            description: rest.to_string(),
        },
        other => {
            return Err(AlbumError::format(format!("unknown command `{}`", other)));
        }
    };

    Ok(Some(command))
}

/// Positional argument reader for one command line
struct Args<'a> {
    command: &'static str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn new(command: &'static str, rest: &'a str) -> Self {
        Self {
            command,
            tokens: rest.split_whitespace(),
        }
    }

    fn next(&mut self, field: &str) -> Result<&'a str> {
        match self.tokens.next() {
            Some(token) => Ok(token),
            None => Err(self.missing(field)),
        }
    }

    fn name(&mut self) -> Result<String> {
        self.word("name")
    }

    fn word(&mut self, field: &str) -> Result<String> {
        Ok(self.next(field)?.to_string())
    }

    fn float(&mut self, field: &str) -> Result<f64> {
        let token = self.next(field)?;
        token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid(field, token))
    }

    fn int(&mut self, field: &str) -> Result<i64> {
        let token = self.next(field)?;
        token.parse().map_err(|_| self.invalid(field, token))
    }

    fn invalid(&self, field: &str, token: &str) -> AlbumError {
        AlbumError::format(format!(
            "`{}` expects a number for <{}>, got `{}`",
            self.command, field, token
        ))
    }

    fn missing(&self, field: &str) -> AlbumError {
        let command = self.command;
        AlbumError::format(format!("`{command}` is missing argument <{field}>"))
    }

    /// Drop whatever follows the fixed arguments
    fn done(self) {
        let ignored: Vec<&str> = self.tokens.collect();
        if !ignored.is_empty() {
            tracing::debug!(command = self.command, ?ignored, "trailing tokens ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Command {
        parse_line(line).unwrap().unwrap()
    }

    fn format_reason(line: &str) -> String {
        match parse_line(line) {
            Err(AlbumError::Format { reason }) => reason,
            other => panic!("expected format error for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \t ").unwrap(), None);
        assert_eq!(parse_line("  # shape R rectangle").unwrap(), None);
    }

    #[test]
    fn test_parse_shape() {
        assert_eq!(
            parsed("shape R rectangle 200 200 50 100 255 0 0"),
            Command::Shape {
                name: "R".to_string(),
                shape_type: "rectangle".to_string(),
                x: 200.0,
                y: 200.0,
                first: 50.0,
                second: 100.0,
                r: 255,
                g: 0,
                b: 0,
            }
        );
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        assert_eq!(
            parsed("MoVe R 1.5 -2"),
            Command::Move {
                name: "R".to_string(),
                x: 1.5,
                y: -2.0,
            }
        );
    }

    #[test]
    fn test_snapshot_description_keeps_text() {
        assert_eq!(
            parsed("snapshot  After the  Move "),
            Command::Snapshot {
                description: "After the  Move".to_string(),
            }
        );
        assert_eq!(
            parsed("SNAPSHOT"),
            Command::Snapshot {
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_missing_argument() {
        assert!(format_reason("resize R 10").contains("missing argument"));
        assert!(format_reason("remove").contains("<name>"));
    }

    #[test]
    fn test_bad_numbers() {
        assert!(format_reason("move R ten 5").contains("`ten`"));
        assert!(format_reason("move R NaN 5").contains("`NaN`"));
        assert!(format_reason("color R 1.5 0 0").contains("<r>"));
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        assert_eq!(
            parsed("remove R now"),
            Command::Remove {
                name: "R".to_string(),
            }
        );
        assert_eq!(
            parsed("shape R rectangle 0 0 50 50 255 0 0 extra"),
            parsed("shape R rectangle 0 0 50 50 255 0 0")
        );
    }

    #[test]
    fn test_unknown_command() {
        let reason = format_reason("rotate R 90");
        assert!(reason.contains("unknown command `rotate`"));
    }

    #[test]
    fn test_keyword_names() {
        assert_eq!(parsed("remove R").keyword(), "remove");
        assert_eq!(parsed("snapshot x").keyword(), "snapshot");
    }
}
