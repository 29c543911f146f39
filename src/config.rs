//! File names and programs used by both tools.
//!
//! [`Config::default`] is what the tools use when run without arguments ; a YAML file may override any field, e.g.
//!
//! ```yaml
//! work_dir: build/symbols
//! tex: luatex
//! sources: [latex.ltx, amsmath.sty]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// LaTeX files scanned for public commands by the differ.
pub const DEFAULT_SOURCES: &[&str] = &[
    "latex.ltx", "fontmath.ltx",
    "amsmath.sty", "amstext.sty", "amsgen.sty", "amsbsy.sty",
    "amsopn.sty", "amsfonts.sty", "amssymb.sty",
    "mathtools.sty", "mhsetup.sty",
];

/// Settings shared by the extractor and the differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the symbol lists live in and in which TeX is run
    pub work_dir: PathBuf,
    /// Program resolving TeX file names to paths
    pub kpsewhich: String,
    /// TeX engine regenerating the table symbols
    pub tex: String,
    /// Name of the `unicode-math` table, as given to `kpsewhich`
    pub table_file: String,
    /// TeX file run to produce [`Config::table_symbols`]
    pub driver: String,

    /// Symbols that may be redefined (read by the extractor)
    pub safe_symbols: PathBuf,
    pub known_symbols: PathBuf,
    pub dangerous_symbols: PathBuf,
    pub table_symbols: PathBuf,
    pub old_symbols: PathBuf,
    pub new_symbols: PathBuf,

    /// Files scanned for public symbols
    pub sources: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            kpsewhich: "kpsewhich".to_string(),
            tex: "tex".to_string(),
            table_file: "unicode-math-table.tex".to_string(),
            driver: "extract-symbols.tex".to_string(),
            safe_symbols: PathBuf::from("old-symbols.lst"),
            known_symbols: PathBuf::from("known-symbols.lst"),
            dangerous_symbols: PathBuf::from("dangerous-symbols.lst"),
            table_symbols: PathBuf::from("table-symbols.lst"),
            old_symbols: PathBuf::from("old-symbols.lst"),
            new_symbols: PathBuf::from("new-symbols.lst"),
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Reads a configuration from a YAML file ; missing keys keep their default value.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).map_err(|source| Error::Config { path: path.to_path_buf(), source })
    }

    /// Path of a symbol list, relative to [`Config::work_dir`].
    pub fn in_work_dir<P: AsRef<Path>>(&self, file: P) -> PathBuf {
        self.work_dir.join(file)
    }
}
