//! External TeX programs.
//!
//! Both tools only talk to the TeX installation through the [`Toolchain`] trait, so that they can be tested without one.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::Config;
use crate::error::{Error, Result};

/// Access to a TeX installation.
pub trait Toolchain {
    /// Finds the file `name` in the TeX tree.
    /// Returns `Ok(None)` if the lookup ran but found nothing, and an error only if it could not be run.
    fn kpsewhich(&self, name: &str) -> Result<Option<PathBuf>>;

    /// Runs the TeX engine on `driver` from within `work_dir`, waiting for it to finish.
    fn run_tex(&self, driver: &str, work_dir: &Path) -> Result<()>;
}

/// [`Toolchain`] spawning the actual `kpsewhich` and `tex` programs.
#[derive(Debug, Clone)]
pub struct Kpathsea {
    kpsewhich: String,
    tex: String,
}

impl Kpathsea {
    pub fn new(config: &Config) -> Self {
        Self {
            kpsewhich: config.kpsewhich.clone(),
            tex: config.tex.clone(),
        }
    }
}

impl Toolchain for Kpathsea {
    fn kpsewhich(&self, name: &str) -> Result<Option<PathBuf>> {
        let output = Command::new(&self.kpsewhich)
            .arg(name)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| Error::Spawn { program: self.kpsewhich.clone(), source })?;

        if !output.status.success() {
            return Ok(None);
        }
        Ok(resolved_path(&String::from_utf8_lossy(&output.stdout)))
    }

    fn run_tex(&self, driver: &str, work_dir: &Path) -> Result<()> {
        let status = Command::new(&self.tex)
            .arg(driver)
            .current_dir(work_dir)
            .status()
            .map_err(|source| Error::Spawn { program: self.tex.clone(), source })?;

        if status.success() {
            Ok(())
        }
        else {
            Err(Error::ToolFailed { program: self.tex.clone(), status })
        }
    }
}

fn resolved_path(stdout: &str) -> Option<PathBuf> {
    let path = stdout.trim_end();
    if path.is_empty() {
        None
    }
    else {
        Some(PathBuf::from(path))
    }
}
