//! Shared error utilities used across the compilation pipeline.
//!
//! Every error carries the byte offset it was detected at. Rendering is left
//! to the caller: `Diagnostic` echoes the input and points at the offending
//! character with a caret, in the style of chibicc.

use std::fmt;
use std::num::ParseIntError;

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CompileError {
  #[snafu(display("invalid token: '{ch}'"))]
  UnrecognizedCharacter { loc: usize, ch: char },

  #[snafu(display("invalid number: {source}"))]
  InvalidNumber { loc: usize, source: ParseIntError },

  #[snafu(display("expected a number, but got \"{got}\""))]
  ExpectedNumber { loc: usize, got: String },

  #[snafu(display("expected \"{expected}\", but got \"{got}\""))]
  ExpectedSymbol {
    loc: usize,
    expected: char,
    got: String,
  },
}

impl CompileError {
  /// Byte offset into the source where the error was detected.
  pub fn loc(&self) -> usize {
    match self {
      Self::UnrecognizedCharacter { loc, .. }
      | Self::InvalidNumber { loc, .. }
      | Self::ExpectedNumber { loc, .. }
      | Self::ExpectedSymbol { loc, .. } => *loc,
    }
  }

  /// Pair the error with the source it was produced from for display.
  pub fn render<'a>(&'a self, source: &'a str) -> Diagnostic<'a> {
    Diagnostic {
      source,
      error: self,
    }
  }
}

/// Two-line caret report: the input verbatim, then a marker under the
/// failing character followed by the message.
pub struct Diagnostic<'a> {
  source: &'a str,
  error: &'a CompileError,
}

impl fmt::Display for Diagnostic<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let safe_loc = self.error.loc().min(self.source.len());
    let char_offset = self.source[..safe_loc].chars().count();
    writeln!(f, "{}", self.source)?;
    write!(f, "{}^ {}", " ".repeat(char_offset), self.error)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn caret_sits_under_offset() {
    let err = CompileError::UnrecognizedCharacter { loc: 1, ch: '*' };
    assert_eq!(err.render("1*2").to_string(), "1*2\n ^ invalid token: '*'");
  }

  #[test]
  fn caret_at_start_has_no_padding() {
    let err = CompileError::ExpectedNumber {
      loc: 0,
      got: "EOF".to_string(),
    };
    assert_eq!(
      err.render("").to_string(),
      "\n^ expected a number, but got \"EOF\""
    );
  }

  #[test]
  fn offset_counts_characters_not_bytes() {
    let err = CompileError::UnrecognizedCharacter { loc: 3, ch: 'x' };
    assert_eq!(err.render("é+x").to_string(), "é+x\n  ^ invalid token: 'x'");
  }

  #[test]
  fn expected_symbol_names_the_symbol() {
    let err = CompileError::ExpectedSymbol {
      loc: 2,
      expected: '-',
      got: "2".to_string(),
    };
    assert_eq!(err.loc(), 2);
    assert_eq!(err.to_string(), "expected \"-\", but got \"2\"");
  }
}
