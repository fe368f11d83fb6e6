//! Command handlers. Each returns the text to print on stdout; errors
//! propagate to `main`, which prints nothing on stdout for them.

use anyhow::{bail, Context, Result};
use safenum_app_core::{compute_fingerprint_concurrent, AppConfig, TrustAnchors};
use safenum_core::encoding::{from_base64, from_hex};
use safenum_core::{compute_fingerprint_simple, Fingerprint, FingerprintError, IdentityKey, Party};

use crate::args::{KeyEncoding, OutputFormat, PartyArgs, TrustArgs};

fn decode_key(text: &str, encoding: KeyEncoding) -> Result<Vec<u8>, FingerprintError> {
    match encoding {
        KeyEncoding::Hex => from_hex(text.trim()),
        KeyEncoding::Base64 => from_base64(text),
    }
}

fn decode_keys(texts: &[String], encoding: KeyEncoding) -> Result<Vec<IdentityKey>> {
    texts
        .iter()
        .map(|t| -> Result<IdentityKey> {
            let bytes = decode_key(t, encoding)?;
            Ok(IdentityKey::from_serialized(&bytes)?)
        })
        .collect()
}

fn single_raw_key(texts: &[String], encoding: KeyEncoding, side: &str) -> Result<Vec<u8>> {
    match texts {
        [only] => Ok(decode_key(only, encoding)?),
        _ => bail!("--raw takes exactly one {side} key, got {}", texts.len()),
    }
}

/// Compute the fingerprint described by the party flags.
pub async fn fingerprint_for(args: &PartyArgs) -> Result<Fingerprint> {
    if args.raw {
        let local_key = single_raw_key(&args.local_keys, args.key_encoding, "local")?;
        let remote_key = single_raw_key(&args.remote_keys, args.key_encoding, "remote")?;
        let (version, local_id, remote_id) =
            (args.version, args.local_id.clone(), args.remote_id.clone());
        let fp = tokio::task::spawn_blocking(move || {
            compute_fingerprint_simple(version, &local_id, &local_key, &remote_id, &remote_key)
        })
        .await
        .context("fingerprint task failed")??;
        return Ok(fp);
    }

    let local = Party::new(
        args.local_id.as_bytes(),
        decode_keys(&args.local_keys, args.key_encoding).context("local key")?,
    );
    let remote = Party::new(
        args.remote_id.as_bytes(),
        decode_keys(&args.remote_keys, args.key_encoding).context("remote key")?,
    );
    Ok(compute_fingerprint_concurrent(args.version, local, remote).await?)
}

pub fn render(fp: &Fingerprint, format: OutputFormat) -> String {
    match format {
        OutputFormat::Rows => fp.to_rows_string(),
        OutputFormat::Line => fp.to_string(),
        OutputFormat::Json => serde_json::json!({ "blocks": fp.blocks() }).to_string(),
    }
}

/// Outcome of `safenum verify`.
#[derive(Debug, PartialEq, Eq)]
pub enum Verification {
    Match,
    Mismatch,
}

pub async fn verify(args: &PartyArgs, expected: &str) -> Result<Verification> {
    let expected: Fingerprint = expected.parse().context("--expected")?;
    let computed = fingerprint_for(args).await?;
    if computed == expected {
        tracing::info!("safety number matches");
        Ok(Verification::Match)
    } else {
        tracing::warn!("safety number mismatch");
        Ok(Verification::Mismatch)
    }
}

pub fn vectors() -> Result<String> {
    Ok(safenum_core::vectors::generate_fingerprint_json()?)
}

pub fn trust(args: &TrustArgs, config: &AppConfig) -> String {
    let path = args.root_ca.as_deref().or(config.root_ca.as_deref());
    let anchors = TrustAnchors::load(path);
    format!(
        "{} root certificate(s) from {}",
        anchors.len(),
        anchors.source()
    )
}
