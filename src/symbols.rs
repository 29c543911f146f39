//! Sets of command names (`\alpha`, `\{`, ...) and the `.lst` files they are kept in.
//!
//! A `.lst` file holds one symbol per line, in ASCII. The files we write are sorted and free of duplicates.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// A set of command names, backslash included. Iterates in lexicographic order.
pub type SymbolSet = BTreeSet<String>;

/// Reads a symbol list, one symbol per line ; `\r\n` and `\r` end a line just like `\n`.
/// A file that does not exist reads as the empty set ; any other failure is an error.
pub fn read_symbols(path: &Path) -> Result<SymbolSet> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SymbolSet::new()),
        Err(e) => return Err(Error::io(path, e)),
    };

    if let Some(line) = bytes.split(|&b| b == b'\n').find(|line| !line.is_ascii()) {
        return Err(Error::NotAscii {
            path: path.to_path_buf(),
            symbol: String::from_utf8_lossy(line).into_owned(),
        });
    }
    let text = String::from_utf8_lossy(&bytes).replace("\r\n", "\n").replace('\r', "\n");
    Ok(text.split_terminator('\n').map(str::to_string).collect())
}

/// Writes `symbols` to `path`, one per line, sorted.
pub fn write_symbols(path: &Path, symbols: &SymbolSet) -> Result<()> {
    if let Some(symbol) = symbols.iter().find(|symbol| !symbol.is_ascii()) {
        return Err(Error::NotAscii { path: path.to_path_buf(), symbol: symbol.clone() });
    }

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    for symbol in symbols {
        writeln!(out, "{}", symbol).map_err(|e| Error::io(path, e))?;
    }
    out.flush().map_err(|e| Error::io(path, e))
}

fn symbol_regex() -> &'static Regex {
    static SYMBOL: OnceLock<Regex> = OnceLock::new();
    SYMBOL.get_or_init(|| Regex::new(r"\\[A-Za-z@]+|\\[^A-Za-z@]").expect("symbol regex is valid"))
}

/// Every command appearing in a TeX source, internal ones (containing `@`) excepted.
pub fn public_symbols(source: &str) -> SymbolSet {
    symbol_regex()
        .find_iter(source)
        .map(|symbol| symbol.as_str())
        .filter(|symbol| !symbol.contains('@'))
        .map(str::to_string)
        .collect()
}


#[cfg(test)]
mod tests {
    use super::{public_symbols, read_symbols, write_symbols, SymbolSet};
    use crate::error::Error;

    fn set(symbols: &[&str]) -> SymbolSet {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn public_symbols_of_a_definition() {
        let source = r"\def\@tempa{\alpha}\let\mathchoice@=\relax \DeclareMathSymbol{\{}{\mathopen}";
        assert_eq!(
            public_symbols(source),
            set(&[r"\def", r"\alpha", r"\let", r"\relax", r"\DeclareMathSymbol", r"\{", r"\mathopen"]),
        );
    }

    #[test]
    fn single_character_commands() {
        assert_eq!(public_symbols(r"\, \; \\ \@ \%"), set(&[r"\,", r"\;", r"\\", r"\%"]));
        assert_eq!(public_symbols("\\\n"), set(&["\\\n"]));
        assert_eq!(public_symbols(r"no commands here"), SymbolSet::new());
    }

    #[test]
    fn missing_list_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_symbols(&dir.path().join("known-symbols.lst")).unwrap(), SymbolSet::new());
    }

    #[test]
    fn unreadable_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory exists but cannot be read as a file
        match read_symbols(dir.path()) {
            Err(Error::Io { .. }) => (),
            other => panic!("expected an io error, got {:?}", other),
        }
    }

    #[test]
    fn lines_are_only_newline_terminated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("known-symbols.lst");
        std::fs::write(&path, "\\beta\n\\alpha \n\\alpha\n").unwrap();
        assert_eq!(read_symbols(&path).unwrap(), set(&[r"\alpha", r"\alpha ", r"\beta"]));

        std::fs::write(&path, "\\beta").unwrap();
        assert_eq!(read_symbols(&path).unwrap(), set(&[r"\beta"]));

        std::fs::write(&path, "\\beta\n\n").unwrap();
        assert_eq!(read_symbols(&path).unwrap(), set(&["", r"\beta"]));
    }

    #[test]
    fn windows_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table-symbols.lst");
        std::fs::write(&path, "\\alpha\r\n\\beta\r\n\\gamma\r\\delta").unwrap();
        assert_eq!(read_symbols(&path).unwrap(), set(&[r"\alpha", r"\beta", r"\gamma", r"\delta"]));
    }

    #[test]
    fn non_ascii_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dangerous-symbols.lst");
        std::fs::write(&path, "\\alpha\n\\é\n").unwrap();
        assert!(matches!(read_symbols(&path), Err(Error::NotAscii { .. })));

        assert!(matches!(write_symbols(&path, &set(&[r"\é"])), Err(Error::NotAscii { .. })));
    }

    #[test]
    fn written_lists_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old-symbols.lst");
        write_symbols(&path, &set(&[r"\gamma", r"\Alpha", r"\alpha", r"\{"])).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "\\Alpha\n\\alpha\n\\gamma\n\\{\n");
        assert_eq!(read_symbols(&path).unwrap().len(), 4);

        write_symbols(&path, &SymbolSet::new()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
