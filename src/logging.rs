//! Tracing setup for the CLI.
//!
//! Logs go to stderr alongside the rewrite diagnostics. The level comes
//! from the `-v` count only.

use tracing_subscriber::{fmt, EnvFilter};

/// Map a `-v` count to a filter directive for this crate.
pub fn directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("patchsub={}", level)
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::new(directive(verbosity));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(directive(0), "patchsub=warn");
        assert_eq!(directive(1), "patchsub=info");
        assert_eq!(directive(2), "patchsub=debug");
        assert_eq!(directive(7), "patchsub=trace");
    }
}
