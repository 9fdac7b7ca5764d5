use crate::layout;
use core::fmt;
use core::hash::Hash;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A trait representing a layout-compatible 64-bit flake ID.
///
/// Both strategies share the high 41-bit timestamp field; they differ in how
/// the low 23 discriminator bits are spent. The ID itself carries no tag
/// saying which strategy produced it, so the caller must parse a raw value
/// with the matching type.
///
/// # Example
///
/// ```
/// use flakeid::{FlakeId, HostFlakeId};
///
/// let id = HostFlakeId::from(1000, 2, 1);
/// assert_eq!(id.timestamp(), 1000);
/// assert_eq!(id.host_id(), 2);
/// assert_eq!(id.discriminator(), 1);
/// ```
pub trait FlakeId:
    Sized + Copy + Clone + fmt::Display + fmt::Debug + PartialOrd + Ord + PartialEq + Eq + Hash
{
    /// Returns the timestamp portion of the ID, in milliseconds since the
    /// originating generator's epoch.
    fn timestamp(&self) -> u64;

    /// Returns the host ID portion of the ID. Always zero for the random
    /// strategy; present for interface symmetry.
    fn host_id(&self) -> u64;

    /// Returns the low-bit field distinguishing IDs minted within the same
    /// millisecond: random bits, or the per-millisecond counter.
    fn discriminator(&self) -> u64;

    /// Converts this type into its raw `u64` representation.
    fn to_raw(&self) -> u64;

    /// Converts a raw `u64` into this type.
    fn from_raw(raw: u64) -> Self;
}

/// A decoded flake ID: the issuing wall-clock time plus the discriminator
/// fields, resolved against the epoch of the generator that did the decoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecodedFlake {
    /// Wall-clock time of issuance, exact to the millisecond.
    pub time: SystemTime,
    /// Host ID, or zero for the random strategy.
    pub host_id: u64,
    /// Random bits or per-millisecond counter.
    pub discriminator: u64,
}

impl DecodedFlake {
    pub(crate) fn new<ID: FlakeId>(epoch: Duration, id: ID) -> Self {
        Self {
            time: UNIX_EPOCH + epoch + Duration::from_millis(id.timestamp()),
            host_id: id.host_id(),
            discriminator: id.discriminator(),
        }
    }

    /// The issuing time as milliseconds since the Unix epoch.
    ///
    /// Convenience over matching on [`SystemTime`] math in callers.
    #[must_use]
    pub fn unix_millis(&self) -> u64 {
        self.time
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// A 64-bit flake ID using the random layout
///
/// - 41 bits timestamp (ms since the generator's epoch)
/// - 23 bits randomness
///
/// ```text
///  Bit Index:  63             23 22               0
///              +----------------+-----------------+
///  Field:      | timestamp (41) | randomness (23) |
///              +----------------+-----------------+
///              |<--- MSB --- 64 bits --- LSB ---->|
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RandomFlakeId {
    id: u64,
}

impl RandomFlakeId {
    /// Bitmask for extracting the 23-bit randomness field. Occupies bits 0
    /// through 22.
    pub const RANDOM_MASK: u64 = layout::LOW_BITS_MASK;

    /// Number of bits to shift the timestamp to its correct position (bit 23).
    pub const TIMESTAMP_SHIFT: u64 = layout::TIMESTAMP_SHIFT;

    #[must_use]
    pub const fn from(timestamp: u64, random: u64) -> Self {
        Self {
            id: layout::pack(timestamp, random & Self::RANDOM_MASK),
        }
    }

    /// Extracts the timestamp from the packed ID.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        layout::unpack_timestamp(self.id)
    }

    /// Extracts the random bits from the packed ID.
    #[must_use]
    pub const fn randomness(&self) -> u64 {
        layout::unpack_low_bits(self.id)
    }

    /// Returns the maximum representable randomness value.
    #[must_use]
    pub const fn max_randomness() -> u64 {
        Self::RANDOM_MASK
    }
}

impl FlakeId for RandomFlakeId {
    fn timestamp(&self) -> u64 {
        self.timestamp()
    }

    // No host field in this layout.
    fn host_id(&self) -> u64 {
        0
    }

    fn discriminator(&self) -> u64 {
        self.randomness()
    }

    fn to_raw(&self) -> u64 {
        self.id
    }

    fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }
}

impl fmt::Display for RandomFlakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for RandomFlakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomFlakeId")
            .field("id", &format_args!("{} (0x{:x})", self.id, self.id))
            .field("timestamp", &self.timestamp())
            .field("randomness", &self.randomness())
            .finish()
    }
}

/// A 64-bit flake ID using the host layout
///
/// - 41 bits timestamp (ms since the generator's epoch)
/// - 3 bits unused, always zero
/// - 10 bits host ID
/// - 10 bits counter
///
/// ```text
///  Bit Index:  63             23 22     20 19           10 9            0
///              +----------------+---------+---------------+--------------+
///  Field:      | timestamp (41) | zero (3)|  host ID (10) | counter (10) |
///              +----------------+---------+---------------+--------------+
///              |<------------ MSB ------ 64 bits ------ LSB ------------>|
/// ```
///
/// The 3-bit gap between the timestamp and host ID is deliberate: the host
/// strategy spends only 20 of the 23 low bits shared with the random layout.
/// It is part of the wire format, not headroom to reclaim.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostFlakeId {
    id: u64,
}

impl HostFlakeId {
    /// Bitmask for extracting the 10-bit host ID field. Occupies bits 10
    /// through 19.
    pub const HOST_ID_MASK: u64 = layout::HOST_ID_MASK;

    /// Bitmask for extracting the 10-bit counter field. Occupies bits 0
    /// through 9.
    pub const COUNTER_MASK: u64 = layout::COUNTER_MASK;

    /// Number of bits to shift the timestamp to its correct position (bit 23).
    pub const TIMESTAMP_SHIFT: u64 = layout::TIMESTAMP_SHIFT;

    /// Number of bits to shift the host ID to its correct position (bit 10).
    pub const HOST_ID_SHIFT: u64 = layout::HOST_ID_SHIFT;

    #[must_use]
    pub const fn from(timestamp: u64, host_id: u64, counter: u64) -> Self {
        let low = ((host_id & Self::HOST_ID_MASK) << Self::HOST_ID_SHIFT)
            | (counter & Self::COUNTER_MASK);
        Self {
            id: layout::pack(timestamp, low),
        }
    }

    /// Extracts the timestamp from the packed ID.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        layout::unpack_timestamp(self.id)
    }

    /// Extracts the host ID from the packed ID.
    #[must_use]
    pub const fn host_id(&self) -> u64 {
        (self.id >> Self::HOST_ID_SHIFT) & Self::HOST_ID_MASK
    }

    /// Extracts the counter from the packed ID.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.id & Self::COUNTER_MASK
    }

    /// Returns the maximum representable host ID.
    #[must_use]
    pub const fn max_host_id() -> u64 {
        Self::HOST_ID_MASK
    }

    /// Returns the maximum representable counter value.
    #[must_use]
    pub const fn max_counter() -> u64 {
        Self::COUNTER_MASK
    }
}

impl FlakeId for HostFlakeId {
    fn timestamp(&self) -> u64 {
        self.timestamp()
    }

    fn host_id(&self) -> u64 {
        self.host_id()
    }

    fn discriminator(&self) -> u64 {
        self.counter()
    }

    fn to_raw(&self) -> u64 {
        self.id
    }

    fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }
}

impl fmt::Display for HostFlakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for HostFlakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostFlakeId")
            .field("id", &format_args!("{} (0x{:x})", self.id, self.id))
            .field("timestamp", &self.timestamp())
            .field("host_id", &self.host_id())
            .field("counter", &self.counter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_flake_id_fields_and_bounds() {
        let ts = (1 << 41) - 1;
        let random = RandomFlakeId::max_randomness();

        let id = RandomFlakeId::from(ts, random);
        println!("ID: {id:?}");
        assert_eq!(id.timestamp(), ts);
        assert_eq!(id.randomness(), random);
        assert_eq!(RandomFlakeId::from_raw(id.to_raw()), id);
    }

    #[test]
    fn test_random_flake_id_masks_randomness_overflow() {
        let id = RandomFlakeId::from(7, u64::MAX);
        assert_eq!(id.timestamp(), 7);
        assert_eq!(id.randomness(), RandomFlakeId::max_randomness());
    }

    #[test]
    fn test_host_flake_id_fields_and_bounds() {
        let ts = (1 << 41) - 1;
        let host = HostFlakeId::max_host_id();
        let counter = HostFlakeId::max_counter();

        let id = HostFlakeId::from(ts, host, counter);
        println!("ID: {id:?}");
        assert_eq!(id.timestamp(), ts);
        assert_eq!(id.host_id(), host);
        assert_eq!(id.counter(), counter);
        assert_eq!(HostFlakeId::from_raw(id.to_raw()), id);
    }

    #[test]
    fn test_host_flake_id_gap_bits_are_zero() {
        let id = HostFlakeId::from(0, HostFlakeId::max_host_id(), HostFlakeId::max_counter());
        // Bits 20-22 of the low segment never carry data in the host layout.
        assert_eq!(id.to_raw() >> 20, 0);
        assert_eq!(id.to_raw(), 0xF_FFFF);
    }

    #[test]
    fn test_host_flake_id_counter_wrap_is_modulo_1024() {
        let id = HostFlakeId::from(42, 3, 1024);
        assert_eq!(id.counter(), 0);
        assert_eq!(id, HostFlakeId::from(42, 3, 0));
    }

    #[test]
    fn test_ids_order_by_timestamp_first() {
        let a = HostFlakeId::from(1, 1023, 1023);
        let b = HostFlakeId::from(2, 0, 0);
        assert!(a < b);

        let a = RandomFlakeId::from(1, RandomFlakeId::max_randomness());
        let b = RandomFlakeId::from(2, 0);
        assert!(a < b);
    }

    #[test]
    fn test_known_id_vectors_decode() {
        let host = HostFlakeId::from_raw(4_290_444_760_684_712_963);
        assert_eq!(host.timestamp(), 511_460_871_778);
        assert_eq!(host.host_id(), 789);
        assert_eq!(host.counter(), 3);

        let random = RandomFlakeId::from_raw(4_290_444_552_448_220_549);
        assert_eq!(random.timestamp(), 511_460_846_954);
        assert_eq!(random.randomness(), 3_120_517);
        assert_eq!(FlakeId::host_id(&random), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let id = HostFlakeId::from(1000, 789, 3);
        let json = serde_json::to_string(&id).unwrap();
        let back: HostFlakeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
