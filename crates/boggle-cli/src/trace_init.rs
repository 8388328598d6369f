//! Subscriber setup for `--features trace` builds.

use std::path::Path;
use std::sync::Once;

use tracing::level_filters::{LevelFilter, STATIC_MAX_LEVEL};

static INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// With `log_dir`, spans and events go to `boggle-trace.jsonl` in that
/// directory as JSON lines; otherwise they are printed to stderr. `RUST_LOG`
/// overrides the default `boggle_core=debug` filter.
pub fn init_tracing(log_dir: Option<&Path>) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    if STATIC_MAX_LEVEL == LevelFilter::OFF {
        eprintln!("warning: tracing is compiled out; rebuild with --no-default-features --features trace");
    }

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("boggle_core=debug,boggle_cli=debug"));
        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "boggle-trace.jsonl");
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(file_appender)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
}
