//! Traversal path records and the offline traversal engine.

pub mod local;
pub mod model;

pub use local::LocalGraph;
pub use model::{dedup_paths, PathEntity, PathRecord};

use crate::{ChainError, ChainResult};

/// Upper bound accepted for `max_hops`; keeps a mistyped argument from
/// turning into an unbounded store traversal.
pub const MAX_HOPS_CEILING: u32 = 8;

/// Default hop bound used by the reference behavior.
pub const DEFAULT_MAX_HOPS: i64 = 3;

/// Validate a caller-supplied hop bound.
///
/// A hop is one relationship traversed, so a path of k entities has
/// k - 1 hops. Zero or negative bounds are caller errors; anything
/// above [`MAX_HOPS_CEILING`] is clamped.
pub fn validate_max_hops(max_hops: i64) -> ChainResult<u32> {
    if max_hops <= 0 {
        return Err(ChainError::invalid_argument(format!(
            "max_hops must be positive, got {max_hops}"
        )));
    }
    Ok((max_hops as u64).min(u64::from(MAX_HOPS_CEILING)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_hop_bounds() {
        assert!(validate_max_hops(0).is_err());
        assert!(validate_max_hops(-3).is_err());
    }

    #[test]
    fn clamps_oversized_hop_bounds() {
        assert_eq!(validate_max_hops(3).unwrap(), 3);
        assert_eq!(validate_max_hops(100).unwrap(), MAX_HOPS_CEILING);
    }
}
