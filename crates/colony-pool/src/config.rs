//! Colony configuration parameters.

use crate::error::ColonyError;

/// Configuration for a [`Colony`](crate::Colony).
///
/// Controls the size of the first bucket and the ceiling on total reserved
/// slots. Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColonyConfig {
    /// Capacity hint for the first bucket, in slots.
    ///
    /// Clamped up to [`ColonyConfig::MIN_BUCKET_CAPACITY`]. Every later
    /// bucket doubles the capacity of the one before it.
    pub initial_capacity: usize,

    /// Maximum number of slots reserved across all buckets.
    ///
    /// Default: `u32::MAX`, the largest count an [`Address`](crate::Address)
    /// offset can encode. Growth that would pass this ceiling fails with
    /// [`ColonyError::CapacityExceeded`].
    pub max_slots: usize,
}

impl ColonyConfig {
    /// Smallest bucket the colony will ever allocate.
    pub const MIN_BUCKET_CAPACITY: usize = 4;

    /// Default capacity hint for the first bucket.
    pub const DEFAULT_INITIAL_CAPACITY: usize = Self::MIN_BUCKET_CAPACITY;

    /// Default ceiling on reserved slots.
    pub const DEFAULT_MAX_SLOTS: usize = u32::MAX as usize;

    /// Create a config with the given first-bucket capacity hint.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_slots: Self::DEFAULT_MAX_SLOTS,
        }
    }

    /// Set the ceiling on reserved slots.
    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = max_slots;
        self
    }

    /// Capacity of the first bucket after clamping.
    pub fn first_bucket_capacity(&self) -> usize {
        self.initial_capacity.max(Self::MIN_BUCKET_CAPACITY)
    }

    /// Check that the config can be honoured.
    pub fn validate(&self) -> Result<(), ColonyError> {
        if self.max_slots > Self::DEFAULT_MAX_SLOTS {
            return Err(ColonyError::InvalidConfig {
                reason: "max_slots exceeds u32::MAX",
            });
        }
        if self.first_bucket_capacity() > self.max_slots {
            return Err(ColonyError::CapacityExceeded {
                requested: self.first_bucket_capacity(),
                limit: self.max_slots,
            });
        }
        Ok(())
    }
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_hints_clamp_to_minimum() {
        assert_eq!(ColonyConfig::new(0).first_bucket_capacity(), 4);
        assert_eq!(ColonyConfig::new(3).first_bucket_capacity(), 4);
        assert_eq!(ColonyConfig::new(9).first_bucket_capacity(), 9);
    }

    #[test]
    fn default_is_valid() {
        assert!(ColonyConfig::default().validate().is_ok());
    }

    #[test]
    fn first_bucket_above_ceiling_is_rejected() {
        let config = ColonyConfig::new(16).with_max_slots(8);
        assert_eq!(
            config.validate(),
            Err(ColonyError::CapacityExceeded {
                requested: 16,
                limit: 8,
            })
        );
    }

    #[test]
    fn ceiling_is_bounded_by_offset_width() {
        let config = ColonyConfig::new(4).with_max_slots(usize::MAX);
        if usize::BITS > 32 {
            assert!(matches!(
                config.validate(),
                Err(ColonyError::InvalidConfig { .. })
            ));
        }
    }
}
