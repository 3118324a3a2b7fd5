// src/main.rs
//
// reindenthtml — re-indent an HTML fragment into canonical source form
//
// - One block element per line, nested blocks two spaces deeper (see --indent).
// - Inline markup and text stay on the line they continue.
// - Whitespace between tags is not significant and is rebuilt from scratch.
//
// CLI flags:
//   --indent <N> : spaces per nesting level (default 2, at most 255)
//   --stdout     : print the result instead of writing a file
//   --check      : write nothing; exit 1 if the input is not already canonical
//   -v           : more logging on stderr (repeatable; RUST_LOG overrides)
// Default: overwrite INPUT, or OUTPUT when given. Without INPUT (or with "-")
// read stdin and write stdout.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, info, LevelFilter};
use reindenthtml::document::{read_fragment, with_final_newline, write_fragment};
use reindenthtml::{FormatOptions, Formatter};
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Spaces per nesting level (0-255)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8))]
    indent: u8,

    /// Print the result to stdout instead of writing a file
    #[arg(long, action = ArgAction::SetTrue)]
    stdout: bool,

    /// Do not write anything; exit with status 1 if the input is not canonical
    #[arg(long, action = ArgAction::SetTrue)]
    check: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input file ("-" or omitted: stdin)
    input: Option<PathBuf>,

    /// Output file (default: overwrite input)
    output: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = cli.input.as_deref().filter(|p| p.as_os_str() != "-");
    let src = read_fragment(input).context("could not load fragment")?;

    let formatter = Formatter::new(FormatOptions {
        indent_width: cli.indent,
    });
    let out = with_final_newline(&formatter.reindent(&src));
    debug!("formatted {} bytes into {} bytes", src.len(), out.len());

    if cli.check {
        if out == src {
            info!("already canonical");
            return Ok(ExitCode::SUCCESS);
        }
        info!("not canonical");
        return Ok(ExitCode::from(1));
    }

    // Precedence: --stdout wins, then OUTPUT, then INPUT; stdin input goes to stdout.
    let out_path = if cli.stdout {
        None
    } else {
        cli.output.as_deref().or(input)
    };
    write_fragment(out_path, &out).context("could not save fragment")?;
    if let Some(path) = out_path {
        info!("wrote {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
