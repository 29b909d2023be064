//! Hash builder selection for [`AssociativeMap`](super::AssociativeMap).
//!
//! By default keys are hashed with the standard library's SipHash
//! (`RandomState`). The `fxhash` and `ahash` features swap in faster,
//! non-DoS-resistant hashers; when both are enabled `fxhash` wins.

#[cfg(feature = "fxhash")]
/// The hash builder used when a map is created without an explicit hasher.
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// The hash builder used when a map is created without an explicit hasher.
pub type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// The hash builder used when a map is created without an explicit hasher.
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

#[cfg(test)]
mod tests {
    use super::DefaultHashBuilder;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_same_builder_hashes_deterministically() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
        assert_eq!(builder.hash_one(42_u64), builder.hash_one(42_u64));
    }
}
