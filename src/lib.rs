//! Crate root: wires together the compilation pipeline.
//!
//! - `tokenizer` performs lexical analysis and produces a flat token stream.
//! - `stream` is the cursor the code generator consumes tokens through.
//! - `codegen` walks the stream once and emits x86-64 Intel-syntax assembly.
//! - `error` holds the error kinds and the caret diagnostic renderer.

pub mod error;
pub mod stream;
pub mod tokenizer;

mod codegen;

pub use error::{CompileError, CompileResult, Diagnostic};

use stream::TokenStream;
use tokenizer::{TokenKind, token_text};

/// Compile an expression into assembly text.
pub fn generate_assembly(expr: &str) -> CompileResult<String> {
  let mut stream = TokenStream::new(expr)?;
  codegen::generate(&mut stream)
}

/// List the tokens of an expression, one per line, for debugging the lexer.
pub fn dump_tokens(expr: &str) -> CompileResult<String> {
  let mut out = String::new();
  for token in tokenizer::tokenize(expr)? {
    let line = match token.kind {
      TokenKind::Eof => format!("EOF {}\n", token.loc),
      TokenKind::Num => format!("NUM {} '{}'\n", token.loc, token_text(&token, expr)),
      TokenKind::Punctuator => format!("PUNCT {} '{}'\n", token.loc, token_text(&token, expr)),
    };
    out.push_str(&line);
  }
  Ok(out)
}
