//! Extraction of the `unicode-math` table as Lua table entries.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::Log;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::lua::write_data;
use crate::symbols::SymbolSet;
use crate::table::read_table;
use crate::toolchain::Toolchain;

/// Reads the symbols that are safe to redefine, one per line, surrounding whitespace ignored.
/// The list is produced by the differ ; if it is missing, the differ has not been run and this is an error.
pub fn read_safe_symbols(path: &Path) -> Result<SymbolSet> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

/// Reads the table and the safe symbols, and writes the Lua entries to `out`.
pub fn run<T, W>(config: &Config, tools: &T, logger: &dyn Log, out: &mut W) -> Result<()>
where
    T: Toolchain + ?Sized,
    W: Write + ?Sized,
{
    let table = read_table(tools, config, logger)?;
    let safe_symbols = read_safe_symbols(&config.in_work_dir(&config.safe_symbols))?;
    debug_to!(logger, "{} safe symbols", safe_symbols.len());

    write_data(out, &table, &safe_symbols)?;
    out.flush()?;
    Ok(())
}

/// Same as [`run`], writing to the file at `path`.
/// The file is only created once extraction succeeded, so a failed run leaves a previous output untouched.
pub fn run_to_file<T: Toolchain + ?Sized>(config: &Config, tools: &T, logger: &dyn Log, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    run(config, tools, logger, &mut buffer)?;
    fs::write(path, buffer).map_err(|e| Error::io(path, e))?;
    info_to!(logger, "Lua table written to {}", path.display());
    Ok(())
}
