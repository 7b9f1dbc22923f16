use std::time::{Duration, Instant};

/// Monotonic millisecond time source used for elapsed-time and power-up timers.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Fixed-rate tick pacing: sleeps away whatever is left of the current tick period.
#[derive(Debug)]
pub struct FramePacer {
    period: Duration,
    last: Instant,
}

impl FramePacer {
    /// Pacer for `tick_rate_hz` ticks per second. Non-positive or non-finite
    /// rates fall back to 60 Hz.
    pub fn new(tick_rate_hz: f32) -> Self {
        let hz = if tick_rate_hz.is_finite() && tick_rate_hz > 0.0 {
            tick_rate_hz
        } else {
            60.0
        };
        Self {
            period: Duration::from_secs_f32(1.0 / hz),
            last: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Block until one period has passed since the previous call.
    pub fn wait(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.period {
            std::thread::sleep(self.period - elapsed);
        } else {
            tracing::trace!(
                overrun_us = (elapsed - self.period).as_micros() as u64,
                "Tick overran its period"
            );
        }
        self.last = Instant::now();
    }
}
