//! Conformance: Fingerprint Determinism
//!
//! Invariants under test:
//! - Same inputs always produce the same 12 blocks
//! - Swapping local/remote never changes the displayed number
//! - Key order inside a party never changes the displayed number
//! - Identical parties show their six blocks twice
//! - Flipping one bit of any key or identifier changes the number

use safenum_core::encoding::from_hex;
use safenum_core::{compute_fingerprint, Fingerprint, IdentityKey};

const ALICE_IDENTITY: &str = "0506863bc66d02b40d27b8d49ca7c09e9239236f9d7d25d6fcca5ce13c7064d868";
const BOB_IDENTITY: &str = "05f781b6fb32fed9ba1cf2de978d4d5da28dc34046ae814402b5c0dbd96fda907b";

fn key_bytes(hex: &str) -> Vec<u8> {
    from_hex(hex).expect("invalid hex")
}

fn key(bytes: &[u8]) -> IdentityKey {
    IdentityKey::from_serialized(bytes).expect("invalid key")
}

fn reference() -> Fingerprint {
    compute_fingerprint(
        0,
        b"alice",
        &[key(&key_bytes(ALICE_IDENTITY))],
        b"bob",
        &[key(&key_bytes(BOB_IDENTITY))],
    )
    .expect("reference fingerprint")
}

// ── Conformance: Determinism (No Entropy Drift) ─────────────────

#[test]
fn conformance_fingerprint_deterministic_10_rounds() {
    let expected = reference();
    for round in 1..=10 {
        let fp = reference();
        assert_eq!(fp, expected, "fingerprint drift at round {round}");
    }
}

// ── Conformance: Symmetry ───────────────────────────────────────

#[test]
fn conformance_fingerprint_symmetric() {
    let a = [key(&key_bytes(ALICE_IDENTITY))];
    let b = [key(&key_bytes(BOB_IDENTITY))];
    let ab = compute_fingerprint(0, b"alice", &a, b"bob", &b).unwrap();
    let ba = compute_fingerprint(0, b"bob", &b, b"alice", &a).unwrap();
    assert_eq!(ab, ba, "A→B='{ab}', B→A='{ba}'");
}

// ── Conformance: Key-Order Invariance ───────────────────────────

#[test]
fn conformance_multi_device_key_order_invariant() {
    let k1 = key(&key_bytes(ALICE_IDENTITY));
    let k2 = key(&key_bytes(BOB_IDENTITY));
    let k3 = IdentityKey::from_djb_public_key(&[0x42; 32]);
    let remote = [IdentityKey::from_djb_public_key(&[0x24; 32])];

    let reference =
        compute_fingerprint(0, b"alice", &[k1.clone(), k2.clone(), k3.clone()], b"bob", &remote)
            .unwrap();
    for keys in [
        [k3.clone(), k2.clone(), k1.clone()],
        [k2.clone(), k1.clone(), k3.clone()],
        [k3.clone(), k1.clone(), k2.clone()],
    ] {
        let fp = compute_fingerprint(0, b"alice", &keys, b"bob", &remote).unwrap();
        assert_eq!(fp, reference);
    }
}

// ── Conformance: Output Format ──────────────────────────────────

#[test]
fn conformance_fingerprint_shape() {
    let fp = reference();
    assert_eq!(fp.blocks().len(), 12);
    for block in fp.blocks() {
        assert_eq!(block.len(), 5, "block '{block}' is not 5 chars");
        assert!(block.bytes().all(|b| b.is_ascii_digit()));
        let value: u32 = block.parse().unwrap();
        assert!(value <= 99_999);
    }
    assert_eq!(fp.to_string().len(), 60);
}

/// The party whose blocks sort first is displayed first.
#[test]
fn conformance_lower_party_displayed_first() {
    let fp = reference();
    let (top, bottom) = fp.rows();
    assert!(top <= bottom, "rows out of order: {top:?} > {bottom:?}");
}

#[test]
fn conformance_identical_parties_repeat_blocks() {
    let k = [key(&key_bytes(ALICE_IDENTITY))];
    let fp = compute_fingerprint(0, b"alice", &k, b"alice", &k).unwrap();
    let (top, bottom) = fp.rows();
    assert_eq!(top, bottom);
}

// ── Conformance: Sensitivity ────────────────────────────────────

#[test]
fn conformance_key_bit_flip_changes_fingerprint() {
    let expected = reference();
    let alice = key_bytes(ALICE_IDENTITY);
    let bob = [key(&key_bytes(BOB_IDENTITY))];

    // One bit per byte position, rotating through bit indices.
    for i in 0..alice.len() {
        let mut flipped = alice.clone();
        flipped[i] ^= 1 << (i % 8);
        let fp = compute_fingerprint(0, b"alice", &[key(&flipped)], b"bob", &bob).unwrap();
        assert_ne!(fp, expected, "flip at byte {i} left fingerprint unchanged");
    }
}

#[test]
fn conformance_identifier_bit_flip_changes_fingerprint() {
    let expected = reference();
    let a = [key(&key_bytes(ALICE_IDENTITY))];
    let b = [key(&key_bytes(BOB_IDENTITY))];

    let mut id = b"bob".to_vec();
    for i in 0..id.len() {
        id[i] ^= 0x01;
        let fp = compute_fingerprint(0, b"alice", &a, &id, &b).unwrap();
        assert_ne!(fp, expected, "flip at id byte {i} left fingerprint unchanged");
        id[i] ^= 0x01;
    }
}
