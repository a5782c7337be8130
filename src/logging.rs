//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so they never mix with rendered editor output.
//! `RUST_LOG` overrides the level chosen on the command line.

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map a `-v` count to a level: warn, info, debug, then trace.
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init(level: Level, compact: bool) {
    subscriber(level, compact, std::io::stderr).init();
}

/// Multi-line `pretty` output by default, one line per event when `compact`.
fn subscriber<W>(level: Level, compact: bool, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,bodmas={level}"))
    });

    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .without_time();

    if compact {
        Box::new(tracing_subscriber::registry().with(filter).with(layer.compact()))
    } else {
        Box::new(tracing_subscriber::registry().with(filter).with(layer.pretty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for Captured {
        type Writer = Captured;

        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(compact: bool) -> String {
        let sink = Captured::default();
        let subscriber = subscriber(Level::WARN, compact, sink.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(expression = "5/0", "evaluation failed");
        });
        let bytes = sink.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_default_format_is_pretty() {
        let pretty = capture(false);
        assert!(pretty.contains("evaluation failed"));
        assert!(pretty.contains("logging.rs"));
        assert!(pretty.lines().count() > 1);

        let compact = capture(true);
        assert!(compact.contains("evaluation failed"));
        assert!(!compact.contains("logging.rs"));
        assert_eq!(compact.lines().count(), 1);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_from_verbosity(0), Level::WARN);
        assert_eq!(level_from_verbosity(1), Level::INFO);
        assert_eq!(level_from_verbosity(2), Level::DEBUG);
        assert_eq!(level_from_verbosity(9), Level::TRACE);
    }
}
