//! Cursor over the token vector.
//!
//! The stream lexes the whole input up front and then hands tokens out one
//! at a time. The vector always ends in `Eof` and nothing consumes it, so the
//! cursor never runs off the end.

use crate::error::{CompileResult, ExpectedNumberSnafu, ExpectedSymbolSnafu};
use crate::tokenizer::{Token, TokenKind, describe_token, token_text, tokenize};

pub struct TokenStream<'a> {
  tokens: Vec<Token>,
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  /// Tokenize `source`; consumers advance `pos` as they go.
  pub fn new(source: &'a str) -> CompileResult<Self> {
    Ok(Self {
      tokens: tokenize(source)?,
      source,
      pos: 0,
    })
  }

  pub fn current(&self) -> &Token {
    &self.tokens[self.pos]
  }

  fn error_parts(&self) -> (usize, String) {
    let token = self.current();
    (token.loc, describe_token(token, self.source))
  }

  /// Consume the current token if it is the punctuator `op`.
  pub fn consume(&mut self, op: char) -> bool {
    let token = self.current();
    if token.kind == TokenKind::Punctuator && token_text(token, self.source).starts_with(op) {
      self.pos += 1;
      return true;
    }
    false
  }

  pub fn expect(&mut self, op: char) -> CompileResult<()> {
    if self.consume(op) {
      return Ok(());
    }
    let (loc, got) = self.error_parts();
    ExpectedSymbolSnafu {
      loc,
      expected: op,
      got,
    }
    .fail()
  }

  /// Consume the current token as an integer literal and return its value.
  pub fn expect_number(&mut self) -> CompileResult<i64> {
    let token = self.current();
    if token.kind == TokenKind::Num
      && let Some(value) = token.value
    {
      self.pos += 1;
      return Ok(value);
    }
    let (loc, got) = self.error_parts();
    ExpectedNumberSnafu { loc, got }.fail()
  }

  pub fn at_eof(&self) -> bool {
    self.current().kind == TokenKind::Eof
  }
}
