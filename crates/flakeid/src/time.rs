use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Default epoch: Saturday, January 1, 2000 00:00:00 UTC.
///
/// All generators fall back to this reference point when no explicit epoch is
/// given. Changing the epoch changes the meaning of every stored ID, so pick
/// one per deployment and keep it.
pub const DEFAULT_EPOCH: Duration = Duration::from_millis(946_684_800_000);

/// A trait for time sources that return the current wall-clock time.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. The returned value is in **milliseconds since the
/// Unix epoch**; generators subtract their configured epoch themselves.
///
/// # Example
///
/// ```
/// use flakeid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in whole milliseconds since the Unix epoch,
    /// truncated.
    fn current_millis(&self) -> u64;
}

/// A [`TimeSource`] backed by [`SystemTime`].
///
/// Reads the system clock on every call. The design assumes a locally
/// monotonic-enough clock; a backwards step is tolerated by the host
/// strategy (it holds the last observed millisecond until the clock catches
/// up) but is not detected or corrected here.
#[derive(Default, Clone, Debug)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_clock_is_past_default_epoch() {
        let now = WallClock.current_millis();
        assert!(now > DEFAULT_EPOCH.as_millis() as u64);
    }
}
