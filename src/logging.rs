use crate::constants::env_vars;
use crate::error::BlaseballError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a global `tracing` subscriber that writes request logs to stderr.
///
/// The library itself never installs a subscriber; binaries and test
/// harnesses that want to see request logs call this once at startup.
/// `RUST_LOG` takes precedence, otherwise `default_directive` is used
/// (e.g. `"blaser=info"` or `"blaser=debug"` to include response previews).
///
/// Fails with `LogSetup` if `RUST_LOG` or the default directive is invalid,
/// or a global subscriber has already been set.
pub fn setup_logging(default_directive: &str) -> Result<(), BlaseballError> {
    let from_env = std::env::var(env_vars::LOG_FILTER).ok();
    let filter = build_filter(from_env.as_deref(), default_directive)?;

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_filter(filter),
        )
        .try_init()
        .map_err(|e| BlaseballError::log_setup_error(e.to_string()))
}

/// A set, non-blank `RUST_LOG` wins and must parse; it never falls back.
fn build_filter(
    from_env: Option<&str>,
    default_directive: &str,
) -> Result<EnvFilter, BlaseballError> {
    let (source, directive) = match from_env.filter(|value| !value.trim().is_empty()) {
        Some(value) => (env_vars::LOG_FILTER, value),
        None => ("default log directive", default_directive),
    };

    EnvFilter::try_new(directive).map_err(|e| {
        BlaseballError::log_setup_error(format!("Invalid {source} '{directive}': {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_env_filter_is_an_error() {
        let err = build_filter(Some("blaser=notalevel"), "blaser=info").unwrap_err();
        assert!(matches!(err, BlaseballError::LogSetup { .. }));
        assert!(err.to_string().contains("RUST_LOG"));
    }

    #[test]
    fn test_env_filter_takes_precedence() {
        // A broken default is never consulted when RUST_LOG is valid
        assert!(build_filter(Some("blaser=debug"), "blaser=notalevel").is_ok());
        assert!(build_filter(None, "blaser=info").is_ok());
        assert!(build_filter(Some("  "), "blaser=notalevel").is_err());
    }

    #[test]
    fn test_setup_logging_installs_once() {
        // Global subscriber state: keep every assertion in this one test.
        if std::env::var(env_vars::LOG_FILTER).is_ok() {
            return;
        }

        let invalid = setup_logging("blaser=notalevel");
        assert!(matches!(invalid, Err(BlaseballError::LogSetup { .. })));

        assert!(setup_logging("blaser=debug").is_ok());

        let second = setup_logging("blaser=info");
        assert!(matches!(second, Err(BlaseballError::LogSetup { .. })));
    }
}
