//! Logging and tracing initialization.

use crate::config::LoggingConfig;

/// Crate targets that receive the configured level when it is a bare level.
const OPENTRACE_TARGETS: &[&str] = &[
    "opentrace",
    "opentrace_common",
    "opentrace_trace_model",
    "opentrace_trajectory",
    "opentrace_render_engine",
];

/// Expand a bare level (`"debug"`) into a filter scoped to OpenTrace crates,
/// leaving dependencies at `warn`. Full directives pass through unchanged.
pub fn filter_directive(level: &str) -> String {
    let level = level.trim();
    if level.is_empty() {
        return "warn".to_string();
    }
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let mut directive = String::from("warn");
    for target in OPENTRACE_TARGETS {
        directive.push(',');
        directive.push_str(target);
        directive.push('=');
        directive.push_str(level);
    }
    directive
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Logs go to stderr so command output on stdout stays clean.
/// `RUST_LOG` takes precedence over `config.level` when set.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.level)));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if config.json {
        tracing::subscriber::set_global_default(builder.json().finish()).ok();
    } else {
        let subscriber = builder.with_target(config.level.contains("debug")).finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}
