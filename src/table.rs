//! The `unicode-math` symbol table, as read from `unicode-math-table.tex`.

use std::collections::HashMap;
use std::fs;

use log::Log;
use unicode_math_table::{parse_table_line, MathClass};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::toolchain::Toolchain;

/// Class and codepoint of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub class: MathClass,
    /// Codepoint as given in the table ; not necessarily a valid `char` (cf surrogates).
    pub code: u32,
}

/// Commands of the table, in the order they first appear.
/// When a command is declared twice, the later declaration replaces the earlier one but keeps its position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<(String, TableEntry)>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    /// Creates a new empty [`SymbolTable`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `command`, or replaces its entry if already present.
    pub fn insert(&mut self, command: &str, entry: TableEntry) {
        match self.index.get(command) {
            Some(&i) => self.entries[i].1 = entry,
            None => {
                self.index.insert(command.to_string(), self.entries.len());
                self.entries.push((command.to_string(), entry));
            }
        }
    }

    /// Entry of `command`, backslash included.
    pub fn get(&self, command: &str) -> Option<&TableEntry> {
        self.index.get(command).map(|&i| &self.entries[i].1)
    }

    /// Number of distinct commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no command was parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableEntry)> {
        self.entries.iter().map(|(command, entry)| (command.as_str(), entry))
    }

    /// Entries sorted by codepoint ; commands sharing a codepoint stay in insertion order.
    pub fn sorted_by_code(&self) -> Vec<(&str, &TableEntry)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(_, entry)| entry.code);
        entries
    }
}

/// Parses the content of `unicode-math-table.tex`.
/// Lines that are not symbol declarations are reported to `logger` and skipped.
pub fn parse_table(input: &str, logger: &dyn Log) -> SymbolTable {
    let mut table = SymbolTable::new();
    for line in input.lines() {
        if line.is_empty() {
            continue;
        }
        match parse_table_line(line) {
            Some(parsed) => table.insert(parsed.command, TableEntry {
                class: parsed.class,
                code: parsed.codepoint,
            }),
            None => warn_to!(logger, "Unrecognized line {}", line),
        }
    }
    table
}

/// Finds the table in the TeX tree and parses it.
/// Unlike the sources scanned by the differ, the table must exist.
pub fn read_table<T: Toolchain + ?Sized>(tools: &T, config: &Config, logger: &dyn Log) -> Result<SymbolTable> {
    let path = tools
        .kpsewhich(&config.table_file)?
        .ok_or_else(|| Error::Unresolved(config.table_file.clone()))?;
    info_to!(logger, "Reading {}", path.display());

    let input = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let table = parse_table(&input, logger);
    info_to!(logger, "{} symbols in {}", table.len(), config.table_file);
    Ok(table)
}
