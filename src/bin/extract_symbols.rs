//! Prints the `unicode-math` symbol table as Lua table entries.
//!
//! Symbols listed in `old-symbols.lst` (cf `classify-symbols`) are flagged as safe ; that file must exist.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use unimath_symbols::cli::CommonOptions;
use unimath_symbols::error::Result;
use unimath_symbols::extract;
use unimath_symbols::toolchain::Kpathsea;

#[derive(Parser)]
#[command(name = "extract-symbols", about = "Print unicode-math-table.tex as Lua table entries")]
struct Options {
    #[command(flatten)]
    common : CommonOptions,

    #[arg(short = 'o', long = "output", help = "Lua output file (default: standard output)")]
    output_file_path : Option<PathBuf>,
}

fn run(options : &Options) -> Result<()> {
    let config = options.common.config()?;
    let logger = options.common.logger();
    let tools  = Kpathsea::new(&config);

    match &options.output_file_path {
        Some(path) => extract::run_to_file(&config, &tools, &logger, path),
        None => extract::run(&config, &tools, &logger, &mut std::io::stdout().lock()),
    }
}

fn main() -> ExitCode {
    let options = Options::parse();
    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
