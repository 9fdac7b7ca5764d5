//! Coordination-free, sortable 64-bit flake IDs.
//!
//! Two independent strategies in the style of Twitter's Snowflake IDs, both
//! packing a 41-bit millisecond delta (measured from a configurable epoch)
//! into the high bits so that IDs sort approximately by creation time:
//!
//! - [`RandomFlakeGenerator`]: timestamp + 23 random bits. No coordination
//!   required at all, at the cost of a small collision probability.
//! - [`HostFlakeGenerator`]: timestamp + 10-bit host ID + 10-bit
//!   per-millisecond counter. Strong uniqueness within a millisecond, at the
//!   cost of externally assigned, unique host identifiers.
//!
//! ```text
//!  Random:     63             23 22               0
//!              +----------------+-----------------+
//!              | timestamp (41) | randomness (23) |
//!              +----------------+-----------------+
//!
//!  Host:       63             23 22     20 19          10 9            0
//!              +----------------+---------+--------------+--------------+
//!              | timestamp (41) | zero (3)| host ID (10) | counter (10) |
//!              +----------------+---------+--------------+--------------+
//! ```
//!
//! The two layouts share pack/unpack constants (see [`layout`]) but are not
//! self-describing: a raw ID must be decoded by the strategy that minted it.
//!
//! # Quickstart
//!
//! ```
//! use flakeid::{FlakeGenerator, FlakeTextExt, HostFlakeGenerator, TextFormat, WallClock};
//!
//! let generator = HostFlakeGenerator::new(789, WallClock);
//!
//! let id = generator.next_id();
//! assert_eq!(id.host_id(), 789);
//!
//! let decoded = generator.decode(id);
//! assert_eq!(decoded.host_id, 789);
//!
//! let hex = id.encode_text(TextFormat::Hex)?;
//! assert_eq!(flakeid::HostFlakeId::decode_text(&hex, TextFormat::Hex)?, id);
//! # Ok::<(), flakeid::Error>(())
//! ```
//!
//! Clocks and random sources are injected dependencies ([`TimeSource`],
//! [`RandSource`]), so deterministic tests need no process-global state.

mod error;
mod generator;
mod id;
pub mod layout;
mod rand;
pub mod text;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::text::{FlakeTextExt, TextFormat};
pub use crate::time::*;
