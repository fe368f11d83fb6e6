//! Display ordering: deterministic placement of the two parties' blocks.
//!
//! Both devices must show the same 12 blocks whichever of them is
//! "local". The sequence that sorts first (shorter first, then pairwise
//! string comparison) goes in front; on a full tie `local` goes first.

use std::cmp::Ordering;

use crate::chunks::ChunkSequence;
use crate::fingerprint::Fingerprint;

/// Compare two block sequences: length first, then block by block.
pub fn compare_chunk_sequences(local: &[String], remote: &[String]) -> Ordering {
    match local.len().cmp(&remote.len()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    for (l, r) in local.iter().zip(remote) {
        match l.as_str().cmp(r.as_str()) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Join both parties' blocks into the displayed fingerprint.
pub fn order(local: ChunkSequence, remote: ChunkSequence) -> Fingerprint {
    let (first, second) = match compare_chunk_sequences(local.as_slice(), remote.as_slice()) {
        Ordering::Less | Ordering::Equal => (local, remote),
        Ordering::Greater => (remote, local),
    };
    let mut blocks = first.into_inner();
    blocks.extend(second.into_inner());
    Fingerprint::from_blocks_unchecked(blocks)
}
