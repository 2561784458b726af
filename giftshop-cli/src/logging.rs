//! Diagnostic logging for the CLI.
//!
//! Log records go to stderr so stdout only carries the report. The level comes
//! from `--log-level` (default `warn`); `RUST_LOG` takes precedence:
//!
//! ```bash
//! RUST_LOG=giftshop_core=debug giftshop -i ranges.txt
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

pub const DEFAULT_LEVEL: &str = "warn";

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Build the filter: `RUST_LOG` wins, then `level`, then [`DEFAULT_LEVEL`].
fn build_filter(level: &str) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initialize logging. Safe to call multiple times (only first call takes effect).
pub fn init(level: &str) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(build_filter(level));

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
