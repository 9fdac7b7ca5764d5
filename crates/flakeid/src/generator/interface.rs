use crate::{DecodedFlake, FlakeId, Result};
use std::time::Duration;

/// The common interface across both flake ID strategies.
///
/// A generator is constructed once per epoch (and host ID, for the host
/// strategy) and issues many IDs over the process lifetime. Decoding is bound
/// to the generator because only the generator knows which epoch its IDs are
/// measured against.
///
/// There is no "decode my last ID" sentinel input: [`Self::last_id`] and
/// [`Self::decode_last`] are explicit operations, and [`Self::decode`] always
/// treats its argument as a real ID.
pub trait FlakeGenerator {
    /// The concrete ID layout this strategy produces.
    type Id: FlakeId;

    /// The epoch all of this generator's timestamps are measured from, as a
    /// duration since the Unix epoch.
    fn epoch(&self) -> Duration;

    /// Generates the next ID.
    ///
    /// The only failure mode is a poisoned lock (a thread panicked while
    /// holding the generator's state).
    fn try_next_id(&self) -> Result<Self::Id>;

    /// Generates the next ID.
    ///
    /// # Panics
    /// Panics if the generator lock is poisoned. For explicitly fallible
    /// behavior, use [`Self::try_next_id`] instead.
    fn next_id(&self) -> Self::Id {
        self.try_next_id().unwrap()
    }

    /// Returns the most recently issued ID, if any ID has been issued.
    ///
    /// The only failure mode is a poisoned lock; `Ok(None)` always means no
    /// ID has been issued yet.
    fn try_last_id(&self) -> Result<Option<Self::Id>>;

    /// Returns the most recently issued ID, if any ID has been issued.
    ///
    /// # Panics
    /// Panics if the generator lock is poisoned. For explicitly fallible
    /// behavior, use [`Self::try_last_id`] instead.
    fn last_id(&self) -> Option<Self::Id> {
        self.try_last_id().unwrap()
    }

    /// Decodes an ID produced by any generator with the same epoch and
    /// strategy back into its issuing time and discriminator fields.
    ///
    /// Never fails for a syntactically valid 64-bit ID.
    fn decode(&self, id: Self::Id) -> DecodedFlake {
        DecodedFlake::new(self.epoch(), id)
    }

    /// Decodes the most recently issued ID, if any.
    ///
    /// # Panics
    /// Panics if the generator lock is poisoned, like [`Self::last_id`].
    fn decode_last(&self) -> Option<DecodedFlake> {
        self.last_id().map(|id| self.decode(id))
    }
}
