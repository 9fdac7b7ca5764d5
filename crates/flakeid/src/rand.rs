use rand::{Rng, rng};

/// A trait for random sources that feed the random-flake strategy.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// one in tests. Implementations must be safe for concurrent use; the
/// generator calls [`RandSource::rand_u64`] without any locking.
///
/// # Example
/// ```
/// use flakeid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn rand_u64(&self) -> u64 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand_u64(), 1234);
/// ```
pub trait RandSource {
    /// Returns a uniformly distributed random integer. Only the low 23 bits
    /// end up in a [`RandomFlakeId`](crate::RandomFlakeId); the generator
    /// masks the rest.
    fn rand_u64(&self) -> u64;
}

/// A [`RandSource`] that uses the thread-local RNG (`rand::rng()`).
///
/// Each OS thread has its own RNG instance, so calls from multiple threads
/// are contention-free. This type does **not** store the RNG itself; it
/// simply accesses the thread-local generator on each call, which makes the
/// zero-sized wrapper freely shareable across threads.
#[derive(Default, Clone, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand_u64(&self) -> u64 {
        rng().random()
    }
}
