//! Logging to an explicit [`log::Log`] instead of the global logger.

/// Like the macros of the `log` crate, but sends the record to the logger given as first argument.
macro_rules! log_to {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            &::log::Record::builder()
                .args(format_args!($($arg)+))
                .level($level)
                .target(module_path!())
                .module_path_static(Some(module_path!()))
                .file_static(Some(file!()))
                .line(Some(line!()))
                .build()
        )
    };
}

macro_rules! warn_to {
    ($logger:expr, $($arg:tt)+) => { log_to!($logger, ::log::Level::Warn, $($arg)+) };
}

macro_rules! info_to {
    ($logger:expr, $($arg:tt)+) => { log_to!($logger, ::log::Level::Info, $($arg)+) };
}

macro_rules! debug_to {
    ($logger:expr, $($arg:tt)+) => { log_to!($logger, ::log::Level::Debug, $($arg)+) };
}
