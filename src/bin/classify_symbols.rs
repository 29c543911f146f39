//! Splits the commands of the `unicode-math` table between `old-symbols.lst` (already known) and `new-symbols.lst`.
//!
//! Runs `tex extract-symbols.tex` in the working directory, which must produce `table-symbols.lst`.

use std::process::ExitCode;

use clap::Parser;
use unimath_symbols::cli::CommonOptions;
use unimath_symbols::differ;
use unimath_symbols::error::Result;
use unimath_symbols::toolchain::Kpathsea;

#[derive(Parser)]
#[command(name = "classify-symbols", about = "Sort the unicode-math table symbols into old and new ones")]
struct Options {
    #[command(flatten)]
    common : CommonOptions,
}

fn run(options : &Options) -> Result<()> {
    let config = options.common.config()?;
    let logger = options.common.logger();
    let tools  = Kpathsea::new(&config);

    differ::run(&config, &tools, &logger)?;
    Ok(())
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
