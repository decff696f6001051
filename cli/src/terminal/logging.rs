use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Events with this target are printed verbatim, without a level symbol.
pub const PRINT_TARGET: &str = "wwnhandler::print";

/// Installs the global subscriber.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let rust_log: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter: EnvFilter = build_filter(verbose, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(WwnFormatter)
        .init();

    Ok(())
}

/// Builds the event filter from `RUST_LOG` and the verbosity flag.
///
/// `RUST_LOG` wins over the flag when set, except for [`PRINT_TARGET`],
/// which always passes at info level since it carries the report itself.
pub fn build_filter(verbose: bool, rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    let default_level: &str = if verbose { "debug" } else { "info" };
    let filter: EnvFilter = match rust_log {
        Some(directives) if !directives.trim().is_empty() => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(default_level))
        }
        _ => EnvFilter::new(default_level),
    };

    Ok(filter.add_directive(format!("{PRINT_TARGET}=info").parse()?))
}

pub struct WwnFormatter;

impl<S, N> FormatEvent<S, N> for WwnFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut visitor = RawMessage::default();
            event.record(&mut visitor);
            return writeln!(writer, "{}", visitor.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the `raw_msg` field out of a print event.
#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = format!("{value:?}");
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
