//! Log output for the CLI.
//!
//! Events go to stderr so that stdout stays machine-readable. The filter
//! comes from `TERMLEX_LOG` unless `-v` raises it.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding filter directives, e.g. `termlex_lib=debug`.
pub const LOG_ENV: &str = "TERMLEX_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";
const VERBOSE_DIRECTIVES: &str = "warn,termlex=debug,termlex_lib=debug,termlex_core=debug";
const ENGINE_TRACE_DIRECTIVE: &str = "termlex_lib=trace";

pub struct LogArgs {
    /// Number of `-v` flags.
    pub verbosity: u8,
    /// Always show per-term engine events.
    pub trace_engine: bool,
    pub color: bool,
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(args: LogArgs) {
    let env = std::env::var(LOG_ENV).ok();
    let directives = directives(args.verbosity, args.trace_engine, env.as_deref());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("warning: invalid {LOG_ENV} directives: {e}");
        EnvFilter::new(DEFAULT_DIRECTIVES)
    });

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(args.color)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

/// Filter directives for the given flags. `-v` beats the environment.
pub fn directives(verbosity: u8, trace_engine: bool, env: Option<&str>) -> String {
    let base = match verbosity {
        0 => env
            .filter(|env| !env.trim().is_empty())
            .unwrap_or(DEFAULT_DIRECTIVES),
        1 => VERBOSE_DIRECTIVES,
        _ => "trace",
    };
    if trace_engine && verbosity < 2 {
        format!("{base},{ENGINE_TRACE_DIRECTIVE}")
    } else {
        base.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::directives;

    #[test]
    fn defaults_to_warnings() {
        assert_eq!(directives(0, false, None), "warn");
        assert_eq!(directives(0, false, Some("  ")), "warn");
    }

    #[test]
    fn environment_applies_without_flags() {
        assert_eq!(directives(0, false, Some("termlex_lib=debug")), "termlex_lib=debug");
    }

    #[test]
    fn verbose_flags_override_environment() {
        assert_eq!(
            directives(1, false, Some("error")),
            "warn,termlex=debug,termlex_lib=debug,termlex_core=debug"
        );
        assert_eq!(directives(2, false, Some("error")), "trace");
    }

    #[test]
    fn trace_command_adds_engine_events() {
        assert_eq!(directives(0, true, None), "warn,termlex_lib=trace");
        assert_eq!(directives(0, true, Some("info")), "info,termlex_lib=trace");
        assert_eq!(directives(2, true, None), "trace");
    }
}
