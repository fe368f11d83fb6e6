//! Concurrent fingerprint runner.
//!
//! The local and remote branches share no data, so each runs its 5200
//! SHA-512 rounds on a blocking worker. The join is the only barrier:
//! callers get either the full 12 blocks or an error, never one party's
//! half. Dropping the returned future abandons both branches; their
//! results are discarded when the workers finish.

use safenum_core::canonical::CanonicalKeyBlob;
use safenum_core::chunks::{encode_chunks, ChunkSequence};
use safenum_core::constants::ITERATIONS;
use safenum_core::display::order;
use safenum_core::encoding::to_hex;
use safenum_core::fingerprint::canonicalize_pair;
use safenum_core::hash::derive_party_digest;
use safenum_core::{Fingerprint, Party, Side};

use crate::error::AppError;

/// Digest and encode one branch on a blocking worker.
async fn party_branch(
    side: Side,
    version: i16,
    stable_id: Vec<u8>,
    blob: CanonicalKeyBlob,
) -> Result<ChunkSequence, AppError> {
    let chunks = tokio::task::spawn_blocking(move || {
        let digest = derive_party_digest(version, &stable_id, &blob, ITERATIONS);
        tracing::debug!(
            %side,
            blob_len = blob.len(),
            digest_prefix = %to_hex(&digest[..4]),
            "party digest derived"
        );
        encode_chunks(&digest)
    })
    .await
    .map_err(|e| AppError::Task(format!("{side} branch: {e}")))??;
    Ok(chunks)
}

/// Compute the fingerprint with both parties digested concurrently.
///
/// Same result as `safenum_core::compute_party_fingerprint`. Key-set
/// validation for both sides happens before either branch starts.
pub async fn compute_fingerprint_concurrent(
    version: i16,
    local: Party,
    remote: Party,
) -> Result<Fingerprint, AppError> {
    let (local_blob, remote_blob) = canonicalize_pair(&local.keys, &remote.keys)?;

    let (local_chunks, remote_chunks) = tokio::try_join!(
        party_branch(Side::Local, version, local.stable_id, local_blob),
        party_branch(Side::Remote, version, remote.stable_id, remote_blob),
    )?;

    tracing::debug!("both branches joined");
    Ok(order(local_chunks, remote_chunks))
}
