//! Millisecond tick source for the engine's software timers.

/// Monotonic millisecond counter. Wrapping at `u32::MAX` is fine; the
/// engine only computes differences.
pub trait TicksProvider {
    fn milliseconds(&mut self) -> u32;
}

/// Tick source based on [`std::time::Instant`].
#[cfg(feature = "std")]
pub struct StdTicks {
    t0: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdTicks {
    pub fn new() -> Self {
        Self {
            t0: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdTicks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TicksProvider for StdTicks {
    fn milliseconds(&mut self) -> u32 {
        self.t0.elapsed().as_millis() as u32
    }
}
