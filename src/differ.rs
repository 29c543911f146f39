//! Sorting the symbols of the `unicode-math` table into the ones we already knew about and the new ones.
//!
//! The known symbols are those of `known-symbols.lst` together with every public command of a few standard LaTeX files,
//! minus those of `dangerous-symbols.lst`. The table symbols are listed by a TeX run over a driver file.

use std::fs;

use log::Log;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::symbols::{public_symbols, read_symbols, write_symbols, SymbolSet};
use crate::toolchain::Toolchain;

/// Table symbols, split between already known (`old`) and previously unknown (`new`).
/// Every table symbol is in exactly one of the two sets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classification {
    pub old: SymbolSet,
    pub new: SymbolSet,
}

/// `(known ∪ public) − dangerous`
pub fn known_symbols(known: &SymbolSet, public: &SymbolSet, dangerous: &SymbolSet) -> SymbolSet {
    known
        .union(public)
        .filter(|symbol| !dangerous.contains(*symbol))
        .cloned()
        .collect()
}

pub fn classify(table_symbols: &SymbolSet, known: &SymbolSet) -> Classification {
    let (old, new): (SymbolSet, SymbolSet) = table_symbols
        .iter()
        .cloned()
        .partition(|symbol| known.contains(symbol));
    Classification { old, new }
}

/// Public commands of the TeX file `name` ; a file `kpsewhich` cannot find has none.
pub fn scan_public_symbols<T: Toolchain + ?Sized>(tools: &T, name: &str, logger: &dyn Log) -> Result<SymbolSet> {
    let path = match tools.kpsewhich(name)? {
        Some(path) => path,
        None => {
            debug_to!(logger, "{} not found, skipped", name);
            return Ok(SymbolSet::new());
        }
    };

    let bytes = fs::read(&path).map_err(|e| Error::io(&path, e))?;
    let symbols = public_symbols(&String::from_utf8_lossy(&bytes));
    debug_to!(logger, "{} public symbols in {}", symbols.len(), path.display());
    Ok(symbols)
}

/// Known symbols, dangerous ones excluded.
pub fn get_known_symbols<T: Toolchain + ?Sized>(config: &Config, tools: &T, logger: &dyn Log) -> Result<SymbolSet> {
    let known = read_symbols(&config.in_work_dir(&config.known_symbols))?;

    let mut public = SymbolSet::new();
    for source in &config.sources {
        public.extend(scan_public_symbols(tools, source, logger)?);
    }

    let dangerous = read_symbols(&config.in_work_dir(&config.dangerous_symbols))?;
    info_to!(
        logger,
        "{} listed, {} public, {} dangerous symbols",
        known.len(), public.len(), dangerous.len(),
    );
    Ok(known_symbols(&known, &public, &dangerous))
}

/// Runs TeX on the driver file and reads the symbols it lists.
pub fn get_table_symbols<T: Toolchain + ?Sized>(config: &Config, tools: &T, logger: &dyn Log) -> Result<SymbolSet> {
    info_to!(logger, "Running {} on {}", config.tex, config.driver);
    tools.run_tex(&config.driver, &config.work_dir)?;
    read_symbols(&config.in_work_dir(&config.table_symbols))
}

/// Classifies the table symbols and writes the old and new lists.
pub fn run<T: Toolchain + ?Sized>(config: &Config, tools: &T, logger: &dyn Log) -> Result<Classification> {
    let known = get_known_symbols(config, tools, logger)?;
    let table_symbols = get_table_symbols(config, tools, logger)?;
    let classification = classify(&table_symbols, &known);

    let old_path = config.in_work_dir(&config.old_symbols);
    write_symbols(&old_path, &classification.old)?;
    info_to!(logger, "{} old symbols written to {}", classification.old.len(), old_path.display());

    let new_path = config.in_work_dir(&config.new_symbols);
    write_symbols(&new_path, &classification.new)?;
    info_to!(logger, "{} new symbols written to {}", classification.new.len(), new_path.display());

    Ok(classification)
}
