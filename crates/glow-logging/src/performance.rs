// ABOUTME: Timing guard for whole command runs such as sync and check
// ABOUTME: Records elapsed milliseconds on a span and warns when a run is slow

use std::time::{Duration, Instant};

use tracing::{Span, debug, field, info_span, warn};

/// Runs slower than this are reported unless overridden.
pub const DEFAULT_WARN_THRESHOLD: Duration = Duration::from_millis(500);

/// Measures an operation from construction until drop.
#[must_use = "the timer measures until it is dropped"]
pub struct PerfTimer {
    operation: &'static str,
    started: Instant,
    threshold: Duration,
    span: Span,
}

impl PerfTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            started: Instant::now(),
            threshold: DEFAULT_WARN_THRESHOLD,
            span: info_span!("timed", operation, elapsed_ms = field::Empty),
        }
    }

    pub fn with_warn_threshold(mut self, threshold: Duration) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        self.span.record("elapsed_ms", elapsed_ms);

        let _entered = self.span.enter();
        if elapsed > self.threshold {
            warn!(
                operation = self.operation,
                elapsed_ms,
                threshold_ms = self.threshold.as_millis() as u64,
                "Operation slower than expected"
            );
        } else {
            debug!(operation = self.operation, elapsed_ms, "Operation finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_mock::{expect, subscriber};

    #[test]
    fn test_elapsed_grows() {
        let timer = PerfTimer::new("sync");
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_fast_run_logs_debug_inside_span() {
        let span = expect::span().named("timed");
        let (subscriber, handle) = subscriber::mock()
            .new_span(span.clone())
            .enter(span.clone())
            .event(
                expect::event()
                    .at_level(tracing::Level::DEBUG)
                    .with_fields(expect::msg("Operation finished")),
            )
            .exit(span.clone())
            .drop_span(span)
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            drop(PerfTimer::new("check").with_warn_threshold(Duration::from_secs(60)));
        });

        handle.assert_finished();
    }

    #[test]
    fn test_slow_run_warns() {
        let span = expect::span().named("timed");
        let (subscriber, handle) = subscriber::mock()
            .new_span(span.clone())
            .enter(span.clone())
            .event(
                expect::event()
                    .at_level(tracing::Level::WARN)
                    .with_fields(expect::msg("Operation slower than expected")),
            )
            .exit(span.clone())
            .drop_span(span)
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let timer = PerfTimer::new("sync").with_warn_threshold(Duration::ZERO);
            std::thread::sleep(Duration::from_millis(2));
            drop(timer);
        });

        handle.assert_finished();
    }
}
