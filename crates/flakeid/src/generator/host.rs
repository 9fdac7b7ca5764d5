use crate::{DEFAULT_EPOCH, FlakeGenerator, HostFlakeId, Result, TimeSource, WallClock};
use std::{sync::Mutex, time::Duration};
use tracing::instrument;

struct HostState {
    timestamp: u64,
    counter: u64,
    last: Option<HostFlakeId>,
}

/// The host-identifier flake ID strategy.
///
/// Combines a 41-bit millisecond delta with a fixed 10-bit host ID and a
/// 10-bit counter that resets every millisecond. IDs from one instance are
/// unique as long as fewer than 1024 are requested per millisecond, and
/// unique across instances as long as an external collaborator guarantees
/// host-ID uniqueness (configuration, a coordination service, leader
/// election).
///
/// The `(timestamp, counter, last)` triple is guarded by a single lock held
/// across the whole read-decide-write sequence, so concurrent callers never
/// lose an increment.
///
/// ## Counter wraparound
///
/// The counter is **not** wrap-protected: the 1025th ID requested within one
/// millisecond reuses counter 0 and duplicates the first. A restarted process
/// also resets the counter to zero, which is safe only because the timestamp
/// component keeps advancing.
///
/// ## Recommended When
/// - You can assign each issuing process a unique host ID
/// - You need guaranteed uniqueness within a millisecond
///
/// ## See Also
/// - [`RandomFlakeGenerator`] when host-ID coordination is unavailable
///
/// [`RandomFlakeGenerator`]: crate::RandomFlakeGenerator
pub struct HostFlakeGenerator<T = WallClock>
where
    T: TimeSource,
{
    epoch: Duration,
    host_id: u64,
    state: Mutex<HostState>,
    time: T,
}

impl<T> HostFlakeGenerator<T>
where
    T: TimeSource,
{
    /// Creates a new [`HostFlakeGenerator`] bound to [`DEFAULT_EPOCH`].
    ///
    /// # Parameters
    ///
    /// - `host_id`: An externally assigned identifier in `0..=1023`, unique
    ///   per issuing process. Encoded into every generated ID.
    /// - `time`: A [`TimeSource`] implementation (e.g., [`WallClock`]) that
    ///   determines how timestamps are generated.
    ///
    /// # Example
    ///
    /// ```
    /// use flakeid::{FlakeGenerator, HostFlakeGenerator, WallClock};
    ///
    /// let generator = HostFlakeGenerator::new(789, WallClock);
    /// let id = generator.next_id();
    /// assert_eq!(id.host_id(), 789);
    /// ```
    pub fn new(host_id: u64, time: T) -> Self {
        Self::with_epoch(host_id, DEFAULT_EPOCH, time)
    }

    /// Creates a new [`HostFlakeGenerator`] with an explicit epoch, given as
    /// a duration since the Unix epoch.
    pub fn with_epoch(host_id: u64, epoch: Duration, time: T) -> Self {
        debug_assert!(host_id <= HostFlakeId::max_host_id(), "host_id overflow");
        Self {
            epoch,
            host_id: host_id & HostFlakeId::HOST_ID_MASK,
            state: Mutex::new(HostState {
                timestamp: 0,
                counter: 0,
                last: None,
            }),
            time,
        }
    }

    /// The host ID encoded into every ID this generator issues.
    #[must_use]
    pub fn host_id(&self) -> u64 {
        self.host_id
    }
}

impl<T> FlakeGenerator for HostFlakeGenerator<T>
where
    T: TimeSource,
{
    type Id = HostFlakeId;

    fn epoch(&self) -> Duration {
        self.epoch
    }

    /// Generates the next ID under the generator lock.
    ///
    /// The clock is read while the lock is held, so every caller decides
    /// against a reading no older than the stored millisecond. When the clock
    /// has advanced past the stored millisecond, the new delta is adopted and
    /// the counter resets to zero. Otherwise (same millisecond, or a clock
    /// that stepped backwards) the stored delta is held and the counter
    /// increments, so IDs never decrease relative to this instance's own
    /// issuance order.
    #[instrument(level = "trace", skip(self))]
    fn try_next_id(&self) -> Result<Self::Id> {
        let mut state = self.state.lock()?;
        let now = self
            .time
            .current_millis()
            .saturating_sub(self.epoch.as_millis() as u64);

        if now > state.timestamp {
            state.timestamp = now;
            state.counter = 0;
        } else {
            // Wraps modulo 1024 when a millisecond is oversubscribed.
            state.counter = (state.counter + 1) & HostFlakeId::COUNTER_MASK;
        }
        let id = HostFlakeId::from(state.timestamp, self.host_id, state.counter);
        state.last = Some(id);
        Ok(id)
    }

    fn try_last_id(&self) -> Result<Option<Self::Id>> {
        Ok(self.state.lock()?.last)
    }
}
