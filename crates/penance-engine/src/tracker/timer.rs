use std::time::{Duration, Instant};

/// Elapsed-time source for a single wave.
///
/// Started when the host announces the wave and attached to the [`Wave`]
/// being tracked; spectator waves carry no timer. Drives the 30-second call
/// rotation countdown.
///
/// [`Wave`]: super::Wave
#[derive(Debug, Clone)]
pub struct WaveTimer {
    started: Instant,
    offset: Duration,
}

impl WaveTimer {
    /// Starts a timer at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::with_elapsed(Duration::ZERO)
    }

    /// Starts a timer that reports the wave as already `elapsed` old, e.g.
    /// when tracking begins mid-wave or when replaying a captured snapshot.
    #[must_use]
    pub fn with_elapsed(elapsed: Duration) -> Self {
        Self {
            started: Instant::now(),
            offset: elapsed,
        }
    }

    /// Time elapsed since the wave started.
    #[must_use]
    pub fn wave_time(&self) -> Duration {
        self.offset + self.started.elapsed()
    }
}

impl Default for WaveTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_counts_into_wave_time() {
        let timer = WaveTimer::with_elapsed(Duration::from_secs(90));
        assert!(timer.wave_time() >= Duration::from_secs(90));
    }

    #[test]
    fn test_fresh_timer_starts_near_zero() {
        let timer = WaveTimer::new();
        assert!(timer.wave_time() < Duration::from_secs(1));
    }
}
