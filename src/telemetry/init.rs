//! Telemetry initialization.
//!
//! Provides configuration and initialization for the tracing subscriber.
//! Everything is written to stderr so stdout stays free for command output.

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Configuration for telemetry initialization.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Default log level
    pub default_level: Level,
    /// Whether to include file and line numbers
    pub include_file_line: bool,
    /// Whether to include the target (module path)
    pub include_target: bool,
    /// Whether to use ANSI colors
    pub ansi_colors: bool,
    /// Custom filter directive (overrides default_level if set)
    pub filter_directive: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            include_file_line: false,
            include_target: false,
            ansi_colors: true,
            filter_directive: None,
        }
    }
}

impl TelemetryConfig {
    /// Create a configuration for `--verbose` runs.
    pub fn verbose() -> Self {
        Self {
            default_level: Level::DEBUG,
            include_file_line: false,
            include_target: true,
            ansi_colors: true,
            filter_directive: None,
        }
    }

    /// Pick the configuration for a CLI invocation
    pub fn for_cli(verbose: bool) -> Self {
        if verbose {
            Self::verbose()
        } else {
            Self::default()
        }
    }
}

/// Initialize telemetry with the given configuration.
///
/// When `RUST_LOG` is set it decides the filter; a `--verbose` level above
/// WARN is still applied to `repokit` on top of it. Otherwise the filter is
/// WARN globally and `default_level` for `repokit`.
///
/// # Example
///
/// ```rust,ignore
/// use repokit::telemetry::{init_telemetry, TelemetryConfig};
///
/// fn main() -> anyhow::Result<()> {
///     init_telemetry(&TelemetryConfig::default())?;
///     Ok(())
/// }
/// ```
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter = build_filter(config)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi_colors)
        .with_target(config.include_target)
        .with_file(config.include_file_line)
        .with_line_number(config.include_file_line)
        .compact();

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn build_filter(config: &TelemetryConfig) -> anyhow::Result<EnvFilter> {
    if let Some(ref directive) = config.filter_directive {
        return Ok(EnvFilter::try_new(directive)?);
    }

    let crate_directive = format!("repokit={}", config.default_level);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(env) if config.default_level > Level::WARN => env.add_directive(crate_directive.parse()?),
        Ok(env) => env,
        Err(_) => EnvFilter::new("warn").add_directive(crate_directive.parse()?),
    };
    Ok(filter)
}
