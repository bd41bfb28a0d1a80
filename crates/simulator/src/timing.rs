//! Latency instrumentation around a simulation call.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use tradesim_types::LatencyMetrics;

/// Wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_epoch_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Monotonic timer started when a request enters the server.
#[derive(Debug, Clone, Copy)]
pub struct LatencyTimer {
    started: Instant,
}

impl LatencyTimer {
    /// Starts the timer.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds elapsed since [`LatencyTimer::start`].
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Closes the measurement.
    ///
    /// `total_server_time_ms` is measured against the client's own clock, so
    /// it is negative when the client clock runs ahead of the server's.
    #[must_use]
    pub fn finish(&self, client_timestamp_ms: i64) -> LatencyMetrics {
        let server_processing_time_ms = self.elapsed_ms();

        #[allow(clippy::cast_precision_loss)]
        let total_server_time_ms = now_epoch_ms() - client_timestamp_ms as f64;

        LatencyMetrics {
            server_processing_time_ms,
            total_server_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_is_monotonic() {
        let timer = LatencyTimer::start();
        let first = timer.elapsed_ms();
        let second = timer.elapsed_ms();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn test_finish_against_past_client_timestamp() {
        let timer = LatencyTimer::start();
        #[allow(clippy::cast_possible_truncation)]
        let client_ts = now_epoch_ms() as i64 - 50;

        let metrics = timer.finish(client_ts);
        assert!(metrics.server_processing_time_ms >= 0.0);
        assert!(metrics.total_server_time_ms >= 49.0);
    }
}
