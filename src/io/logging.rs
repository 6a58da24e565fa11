//! Logger installation for the command-line tool

use log::LevelFilter;

use crate::io::error::Result;

/// Map the `-v` count and `--quiet` flag to a log level
///
/// Warnings are shown by default; each `-v` adds one level of detail.
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a stderr logger at `level`
///
/// # Errors
///
/// Returns `Logging` if a global logger is already installed
pub fn init_logging(level: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
