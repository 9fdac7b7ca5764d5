//! Shared bit-layout constants and pack/unpack helpers.
//!
//! Both ID strategies place a 41-bit millisecond delta in the high bits and a
//! 23-bit discriminator in the low bits:
//!
//! ```text
//!  Bit Index:  63             23 22                  0
//!              +----------------+--------------------+
//!  Field:      | timestamp (41) | discriminator (23) |
//!              +----------------+--------------------+
//!              |<---- MSB ---- 64 bits --- LSB ----->|
//! ```
//!
//! The host strategy further splits the discriminator into a 10-bit host ID
//! (bits 10-19) and a 10-bit counter (bits 0-9), leaving bits 20-22 always
//! zero. That 3-bit gap is part of the wire layout and must not be repacked.

/// Number of bits to shift the timestamp delta to its position (bit 23).
pub const TIMESTAMP_SHIFT: u64 = 23;

/// Bitmask for extracting the 23-bit discriminator field. Occupies bits 0
/// through 22.
pub const LOW_BITS_MASK: u64 = (1 << 23) - 1;

/// Number of bits to shift the host ID to its position (bit 10).
pub const HOST_ID_SHIFT: u64 = 10;

/// Bitmask for extracting the 10-bit host ID field. Occupies bits 10 through
/// 19 after shifting.
pub const HOST_ID_MASK: u64 = (1 << 10) - 1;

/// Bitmask for extracting the 10-bit counter field. Occupies bits 0 through 9.
pub const COUNTER_MASK: u64 = (1 << 10) - 1;

/// Packs a millisecond delta and a 23-bit discriminator into a raw ID.
#[must_use]
pub const fn pack(timestamp: u64, discriminator: u64) -> u64 {
    (timestamp << TIMESTAMP_SHIFT) | (discriminator & LOW_BITS_MASK)
}

/// Extracts the 41-bit millisecond delta from a raw ID.
#[must_use]
pub const fn unpack_timestamp(raw: u64) -> u64 {
    raw >> TIMESTAMP_SHIFT
}

/// Extracts the 23-bit discriminator from a raw ID.
#[must_use]
pub const fn unpack_low_bits(raw: u64) -> u64 {
    raw & LOW_BITS_MASK
}
