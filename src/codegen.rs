//! Code generation: walk the token stream once and emit x86-64 assembly.
//!
//! There is no AST. The running result lives in `rax`: the first literal is
//! loaded into it and every following `+ n` / `- n` pair becomes a single
//! `add` or `sub` against the accumulator.

use tracing::debug;

use crate::error::CompileResult;
use crate::stream::TokenStream;

/// Emit the program for a `num (('+' | '-') num)*` expression.
pub fn generate(stream: &mut TokenStream) -> CompileResult<String> {
  let mut asm = String::new();
  asm.push_str(".intel_syntax noprefix\n");
  asm.push_str(".globl main\n");
  asm.push_str("main:\n");

  // An expression must start with an operand.
  let first = stream.expect_number()?;
  emit(&mut asm, "mov", first);

  while !stream.at_eof() {
    if stream.consume('+') {
      let value = stream.expect_number()?;
      emit(&mut asm, "add", value);
      continue;
    }

    stream.expect('-')?;
    let value = stream.expect_number()?;
    emit(&mut asm, "sub", value);
  }

  asm.push_str("  ret\n");
  Ok(asm)
}

fn emit(asm: &mut String, mnemonic: &str, value: i64) {
  debug!(mnemonic, value, "emit");
  asm.push_str(&format!("  {mnemonic} rax, {value}\n"));
}
