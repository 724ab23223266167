//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! The tokenizer knows nothing about the grammar beyond recognising the two
//! operators and numeric literals. The whole input is scanned eagerly before
//! code generation starts.

use snafu::ResultExt;
use tracing::trace;

use crate::error::{CompileResult, InvalidNumberSnafu, UnrecognizedCharacterSnafu};

/// Operators, integer literals and the end-of-input marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Punctuator,
  Num,
  Eof,
}

/// A token and where it sits in the input. `value` is set only for `Num`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub value: Option<i64>,
  pub loc: usize,
  pub len: usize,
}

impl Token {
  pub fn new(kind: TokenKind, loc: usize, len: usize, value: Option<i64>) -> Self {
    Self {
      kind,
      value,
      loc,
      len,
    }
  }
}

/// Lex the input into a flat vector of tokens terminated by an `Eof` marker.
pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
  let mut tokens = Vec::new();
  let bytes = input.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    let c = bytes[i];
    // Same set as C `isspace`, which also counts vertical tab.
    if c.is_ascii_whitespace() || c == b'\x0b' {
      i += 1;
      continue;
    }

    if c == b'+' || c == b'-' {
      trace!(loc = i, op = %char::from(c), "punctuator");
      tokens.push(Token::new(TokenKind::Punctuator, i, 1, None));
      i += 1;
      continue;
    }

    if c.is_ascii_digit() {
      let start = i;
      i += 1;
      while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
      }
      // `add`/`sub` only take a sign-extended 32-bit immediate.
      let value = input[start..i]
        .parse::<i32>()
        .context(InvalidNumberSnafu { loc: start })?;
      trace!(loc = start, value, "number");
      tokens.push(Token::new(
        TokenKind::Num,
        start,
        i - start,
        Some(i64::from(value)),
      ));
      continue;
    }

    let ch = input[i..].chars().next().unwrap_or('\0');
    return UnrecognizedCharacterSnafu { loc: i, ch }.fail();
  }

  tokens.push(Token::new(TokenKind::Eof, input.len(), 0, None));
  Ok(tokens)
}

/// Return the slice from the source that produced this token.
pub fn token_text<'a>(token: &Token, source: &'a str) -> &'a str {
  let end = token.loc + token.len;
  &source[token.loc..end]
}

/// Human-friendly description used in diagnostics.
pub fn describe_token(token: &Token, source: &str) -> String {
  match token.kind {
    TokenKind::Eof => "EOF".to_string(),
    _ => token_text(token, source).to_string(),
  }
}
