//! Tiny interpreter for the accumulator vocabulary the compiler emits, so
//! tests can check what a program returns without assembling it.

pub fn run(asm: &str) -> i64 {
  let mut lines = asm.lines();
  assert_eq!(lines.next(), Some(".intel_syntax noprefix"));
  assert_eq!(lines.next(), Some(".globl main"));
  assert_eq!(lines.next(), Some("main:"));

  let mut rax: Option<i64> = None;
  for line in lines {
    if line == "  ret" {
      return rax.expect("ret before mov");
    }
    let (mnemonic, operand) = line
      .trim()
      .split_once(" rax, ")
      .unwrap_or_else(|| panic!("unexpected line {line:?}"));
    let value: i64 = operand.parse().unwrap();
    rax = Some(match (mnemonic, rax) {
      ("mov", None) => value,
      ("add", Some(acc)) => acc.wrapping_add(value),
      ("sub", Some(acc)) => acc.wrapping_sub(value),
      _ => panic!("unexpected instruction {line:?}"),
    });
  }
  panic!("program does not end in ret");
}
