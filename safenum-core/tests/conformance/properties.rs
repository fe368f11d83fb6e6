//! Conformance: property tests over random keys and identifiers.
//!
//! Case counts are kept small: each case runs 2 × 5200 SHA-512 rounds
//! per fingerprint.

use proptest::prelude::*;
use safenum_core::canonical::canonicalize;
use safenum_core::{compute_fingerprint, IdentityKey};

fn identity_key() -> impl Strategy<Value = IdentityKey> {
    prop::array::uniform32(any::<u8>()).prop_map(|point| IdentityKey::from_djb_public_key(&point))
}

fn key_set() -> impl Strategy<Value = Vec<IdentityKey>> {
    prop::collection::vec(identity_key(), 1..4)
}

fn stable_id() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn swapping_parties_never_changes_fingerprint(
        a_id in stable_id(),
        a_keys in key_set(),
        b_id in stable_id(),
        b_keys in key_set(),
    ) {
        let ab = compute_fingerprint(0, &a_id, &a_keys, &b_id, &b_keys).unwrap();
        let ba = compute_fingerprint(0, &b_id, &b_keys, &a_id, &a_keys).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn every_block_is_five_digits(
        a_id in stable_id(),
        a_keys in key_set(),
        b_id in stable_id(),
        b_keys in key_set(),
    ) {
        let fp = compute_fingerprint(0, &a_id, &a_keys, &b_id, &b_keys).unwrap();
        prop_assert_eq!(fp.blocks().len(), 12);
        for block in fp.blocks() {
            prop_assert_eq!(block.len(), 5);
            prop_assert!(block.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Canonicalization only, so more cases.
    #[test]
    fn reversed_key_order_gives_same_blob(keys in prop::collection::vec(identity_key(), 1..8)) {
        let mut reversed = keys.clone();
        reversed.reverse();
        prop_assert_eq!(canonicalize(&keys).unwrap(), canonicalize(&reversed).unwrap());
    }

    #[test]
    fn rotated_key_order_gives_same_blob(
        keys in prop::collection::vec(identity_key(), 1..8),
        shift in 0usize..8,
    ) {
        let mut rotated = keys.clone();
        let len = rotated.len();
        rotated.rotate_left(shift % len);
        prop_assert_eq!(canonicalize(&keys).unwrap(), canonicalize(&rotated).unwrap());
    }
}
