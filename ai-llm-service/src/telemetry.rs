//! Logging setup shared by the workspace binaries.

use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Targets of the workspace crates whose verbosity follows the debug toggle.
pub const WORKSPACE_TARGETS: &[&str] = &["ai_llm_service", "copilot", "api", "roi_copilot_backend"];

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Build the formatting layer used by the binaries.
///
/// - RFC3339 UTC timestamps
/// - Compact single-line format with target and `file:line`
/// - Span close events (duration of instrumented handlers)
/// - ANSI colors only when stdout is a terminal
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = io::stdout().is_terminal();

    fmt::layer()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(use_ansi)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .event_format(fmt::format().compact().with_source_location(true))
}

/// Directives raising every workspace crate to `level`.
pub fn workspace_directives(level: Level) -> Vec<Directive> {
    let lvl = level.as_str().to_lowercase();
    WORKSPACE_TARGETS
        .iter()
        .filter_map(|t| Directive::from_str(&format!("{t}={lvl}")).ok())
        .collect()
}

/// `EnvFilter` from `RUST_LOG`, or `default` when unset.
///
/// With `verbose`, workspace crates are raised to DEBUG on top of the base
/// filter; other crates keep the base level.
pub fn env_filter(default: &str, verbose: bool) -> EnvFilter {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    if verbose {
        for d in workspace_directives(Level::DEBUG) {
            filter = filter.add_directive(d);
        }
    }
    filter
}
