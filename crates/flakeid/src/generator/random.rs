use crate::{
    DEFAULT_EPOCH, FlakeGenerator, RandSource, RandomFlakeId, Result, ThreadRandom, TimeSource,
    WallClock,
};
use std::{sync::Mutex, time::Duration};
use tracing::instrument;

/// The entropy-based flake ID strategy.
///
/// Combines a 41-bit millisecond delta with 23 freshly drawn random bits. No
/// coordination between processes is required; in exchange, uniqueness is
/// only probabilistic (birthday bound over 2^23 values per millisecond).
///
/// ## Recommended When
/// - You cannot assign unique host IDs across your fleet
/// - A small, quantifiable collision risk is acceptable
///
/// ## See Also
/// - [`HostFlakeGenerator`] for stronger per-millisecond uniqueness
///
/// [`HostFlakeGenerator`]: crate::HostFlakeGenerator
pub struct RandomFlakeGenerator<T = WallClock, R = ThreadRandom>
where
    T: TimeSource,
    R: RandSource,
{
    epoch: Duration,
    last: Mutex<Option<RandomFlakeId>>,
    time: T,
    rand: R,
}

impl Default for RandomFlakeGenerator<WallClock, ThreadRandom> {
    /// A generator over the system clock and thread-local RNG, bound to
    /// [`DEFAULT_EPOCH`].
    fn default() -> Self {
        Self::new(WallClock, ThreadRandom)
    }
}

impl<T, R> RandomFlakeGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`RandomFlakeGenerator`] bound to [`DEFAULT_EPOCH`].
    ///
    /// The random source is an explicit dependency rather than process-global
    /// state, so tests can substitute a deterministic one.
    ///
    /// # Example
    ///
    /// ```
    /// use flakeid::{FlakeGenerator, RandomFlakeGenerator, ThreadRandom, WallClock};
    ///
    /// let generator = RandomFlakeGenerator::new(WallClock, ThreadRandom);
    /// let id = generator.next_id();
    /// assert!(id.timestamp() > 0);
    /// ```
    pub fn new(time: T, rand: R) -> Self {
        Self::with_epoch(DEFAULT_EPOCH, time, rand)
    }

    /// Creates a new [`RandomFlakeGenerator`] with an explicit epoch, given
    /// as a duration since the Unix epoch.
    ///
    /// IDs are only mutually comparable and decodable across generators that
    /// share an epoch.
    pub fn with_epoch(epoch: Duration, time: T, rand: R) -> Self {
        Self {
            epoch,
            last: Mutex::new(None),
            time,
            rand,
        }
    }
}

impl<T, R> FlakeGenerator for RandomFlakeGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    type Id = RandomFlakeId;

    fn epoch(&self) -> Duration {
        self.epoch
    }

    /// Packs the current millisecond delta with 23 fresh random bits.
    ///
    /// The ID itself is a local computation; the lock only protects the
    /// last-issued bookkeeping read by [`FlakeGenerator::last_id`], using the
    /// same discipline as the host strategy.
    #[instrument(level = "trace", skip(self))]
    fn try_next_id(&self) -> Result<Self::Id> {
        let delta = self
            .time
            .current_millis()
            .saturating_sub(self.epoch.as_millis() as u64);
        let id = RandomFlakeId::from(delta, self.rand.rand_u64());

        *self.last.lock()? = Some(id);
        Ok(id)
    }

    fn try_last_id(&self) -> Result<Option<Self::Id>> {
        Ok(*self.last.lock()?)
    }
}
