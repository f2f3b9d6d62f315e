use log::LevelFilter;
use std::io::Write;

/// Console level for a `-v` count: warn, then info, debug and trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the logging system
///
/// Logs go to stderr; stdout carries the credential prompts.
///
/// The level comes from the `-v` count and can be overridden with `RUST_LOG`:
/// - `RUST_LOG=error` - Only errors
/// - `RUST_LOG=info` - Info, warnings, and errors
/// - `RUST_LOG=git_cred_prompt=trace` - Everything from this crate, usernames included
///
/// Passwords and passphrases are never logged at any level.
pub fn init_logger(verbose: u8) {
    let default_level = level_for_verbosity(verbose);

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:5}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok(); // Ignore error if logger is already initialized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(3), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(u8::MAX), LevelFilter::Trace);
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        init_logger(0);
        init_logger(2);
    }
}
