#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{Level, Log, Metadata, Record};
use unimath_symbols::error::{Error, Result};
use unimath_symbols::toolchain::Toolchain;

pub const TABLE_FIXTURE: &str = "tests/data/unicode-math-table.tex";
pub const EXPECTED_LUA:  &str = "tests/data/expected.lua";
pub const CONFIG_YAML:   &str = "tests/data/config.yaml";

/// What the fake TeX run does.
pub enum TexRun {
    /// Writes these symbols to `table-symbols.lst`
    Lists(Vec<String>),
    /// Exits with a failure status
    Fails,
}

/// A TeX installation made of a few files, with a scripted TeX run.
pub struct FakeToolchain {
    pub files    : HashMap<String, PathBuf>,
    pub tex      : TexRun,
    pub lookups  : RefCell<Vec<String>>,
    pub tex_runs : RefCell<Vec<(String, PathBuf)>>,
}

impl FakeToolchain {
    pub fn new(tex : TexRun) -> Self {
        Self {
            files: HashMap::new(),
            tex,
            lookups: RefCell::new(Vec::new()),
            tex_runs: RefCell::new(Vec::new()),
        }
    }

    pub fn with_file<P: AsRef<Path>>(mut self, name : &str, path : P) -> Self {
        self.files.insert(name.to_string(), path.as_ref().to_path_buf());
        self
    }
}

impl Toolchain for FakeToolchain {
    fn kpsewhich(&self, name: &str) -> Result<Option<PathBuf>> {
        self.lookups.borrow_mut().push(name.to_string());
        Ok(self.files.get(name).cloned())
    }

    fn run_tex(&self, driver: &str, work_dir: &Path) -> Result<()> {
        self.tex_runs.borrow_mut().push((driver.to_string(), work_dir.to_path_buf()));
        match &self.tex {
            TexRun::Lists(symbols) => {
                let path = work_dir.join("table-symbols.lst");
                let content : String = symbols.iter().map(|symbol| format!("{}\n", symbol)).collect();
                std::fs::write(&path, content).map_err(|source| Error::Io { path, source })
            },
            TexRun::Fails => Err(Error::ToolFailed { program: "tex".to_string(), status: failed_status() }),
        }
    }
}

#[cfg(unix)]
fn failed_status() -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(1 << 8)
}

#[cfg(windows)]
fn failed_status() -> std::process::ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(1)
}

/// Keeps every record it is given.
#[derive(Default)]
pub struct CaptureLogger(Mutex<Vec<(Level, String)>>);

impl CaptureLogger {
    pub fn messages(&self, level : Level) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.0.lock().unwrap().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

pub fn write_lines<P: AsRef<Path>>(path : P, lines : &[&str]) {
    let content : String = lines.iter().map(|line| format!("{}\n", line)).collect();
    std::fs::write(path, content).expect("failed to write fixture");
}

pub fn read_lines<P: AsRef<Path>>(path : P) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("failed to read output")
        .lines()
        .map(str::to_string)
        .collect()
}
