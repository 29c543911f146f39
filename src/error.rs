//! Errors that abort a run of either tool.
//!
//! Absence of an optional symbol list and unrecognized table lines are not errors: the former reads as an empty set, the latter is logged and skipped.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type for the [`Error`]
pub type Result<T> = ::std::result::Result<T, Error>;

/// Any fatal error of the extractor or of the differ.
#[derive(Debug)]
pub enum Error {
    /// Reading or writing the given file failed.
    Io {
        /// File that was being read or written
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
    /// Writing the Lua table to its output stream failed.
    Write(io::Error),
    /// `kpsewhich` could not find a file we cannot do without.
    Unresolved(String),
    /// An external program could not be started at all.
    Spawn {
        /// Name of the program
        program: String,
        /// Underlying error
        source: io::Error,
    },
    /// An external program ran and exited with a failure status.
    ToolFailed {
        /// Name of the program
        program: String,
        /// Status it exited with
        status: ExitStatus,
    },
    /// A symbol list contains, or would contain, a non-ASCII symbol.
    NotAscii {
        /// File that was being read or written
        path: PathBuf,
        /// Offending symbol
        symbol: String,
    },
    /// The configuration file could not be parsed.
    Config {
        /// Configuration file
        path: PathBuf,
        /// Underlying error
        source: serde_yaml::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Write(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Error::*;
        match *self {
            Io { ref path, ref source } =>
                write!(f, "{}: {}", path.display(), source),
            Write(ref source) =>
                write!(f, "failed to write output: {}", source),
            Unresolved(ref name) =>
                write!(f, "kpsewhich could not find '{}'", name),
            Spawn { ref program, ref source } =>
                write!(f, "failed to run `{}`: {}", program, source),
            ToolFailed { ref program, status } =>
                write!(f, "`{}` failed ({})", program, status),
            NotAscii { ref path, ref symbol } =>
                write!(f, "{}: symbol {:?} is not ASCII", path.display(), symbol),
            Config { ref path, ref source } =>
                write!(f, "invalid configuration in {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Io { ref source, .. } | Error::Write(ref source) | Error::Spawn { ref source, .. } => Some(source),
            Error::Config { ref source, .. } => Some(source),
            _ => None,
        }
    }
}
