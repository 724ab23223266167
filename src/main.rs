use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use rs9cc::{dump_tokens, generate_assembly};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Compile a `+`/`-` integer expression into x86-64 assembly.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
  /// The expression to compile, e.g. "10 - 3 + 2".
  #[arg(allow_hyphen_values = true)]
  expr: String,

  /// Print the token stream instead of assembly.
  #[arg(long)]
  dump_tokens: bool,
}

fn main() {
  // stdout carries the assembly, so logs go to stderr.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
      err.exit()
    }
    Err(err) => {
      let _ = err.print();
      process::exit(1);
    }
  };
  debug!(expr = %cli.expr, dump_tokens = cli.dump_tokens, "compiling");

  let result = if cli.dump_tokens {
    dump_tokens(&cli.expr)
  } else {
    generate_assembly(&cli.expr)
  };

  match result {
    Ok(out) => print!("{out}"),
    Err(err) => {
      debug!(loc = err.loc(), ?err, "compilation failed");
      eprintln!("{}", err.render(&cli.expr));
      process::exit(1);
    }
  }
}
