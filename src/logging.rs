//! Tracing subscriber setup for the CLI

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for a `-v` count; `RUST_LOG` wins when set
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "sedimark_mock_catalogue=warn",
        1 => "sedimark_mock_catalogue=info",
        2 => "sedimark_mock_catalogue=debug",
        _ => "trace",
    }
}

/// Install a stderr fmt subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert!(default_filter(0).ends_with("warn"));
        assert!(default_filter(1).ends_with("info"));
        assert!(default_filter(2).ends_with("debug"));
        assert_eq!(default_filter(9), "trace");
    }
}
