use std::time::Duration;
use web_time::Instant;

/// Wall clock for a single game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameTimer {
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl GameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting, does nothing if already started.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
            self.ended_at = None;
        }
    }

    /// Freezes the elapsed time, does nothing unless running.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.ended_at = Some(Instant::now());
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    /// Time since start, zero if never started
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self
                .ended_at
                .unwrap_or_else(Instant::now)
                .saturating_duration_since(started_at),
            None => Duration::ZERO,
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Elapsed time as `mm:ss`.
    pub fn display(&self) -> String {
        format_clock(self.elapsed_secs())
    }
}

fn format_clock(secs: u64) -> String {
    match secs {
        // minutes keep growing past the hour
        0..6000 => format!("{:02}:{:02}", secs / 60, secs % 60),
        6000.. => format!("{}:{:02}", secs / 60, secs % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_clock(6001), "100:01");
    }

    #[test]
    fn idle_timer_is_zero() {
        let timer = GameTimer::new();

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.display(), "00:00");
    }

    #[test]
    fn start_stop_reset() {
        let mut timer = GameTimer::new();

        timer.stop();
        assert!(!timer.is_running());

        timer.start();
        assert!(timer.is_running());
        let started_at = timer.started_at;
        timer.start();
        assert_eq!(timer.started_at, started_at);

        timer.stop();
        assert!(!timer.is_running());
        let frozen = timer.elapsed();
        assert_eq!(timer.elapsed(), frozen);

        timer.reset();
        assert_eq!(timer, GameTimer::default());
    }
}
