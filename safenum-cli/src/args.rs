//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "safenum", version, about = "Numeric safety numbers for end-to-end encrypted sessions")]
pub struct Cli {
    /// JSON config file (root_ca, log_filter)
    #[arg(long, global = true, env = "SAFENUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tracing filter directive; RUST_LOG still wins for matching targets
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the safety number for two parties
    Compute(ComputeArgs),
    /// Compare a number read from the other device with the computed one
    Verify(VerifyArgs),
    /// Print the golden vector JSON
    Vectors,
    /// Load trust anchors and report where they came from
    Trust(TrustArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyEncoding {
    #[default]
    Hex,
    Base64,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Two rows of six blocks
    #[default]
    Rows,
    /// One 60-digit line
    Line,
    /// {"blocks": [...]}
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct PartyArgs {
    /// Local stable identifier (UTF-8)
    #[arg(long)]
    pub local_id: String,

    /// Local identity key; repeat for multi-device
    #[arg(long = "local-key", required = true)]
    pub local_keys: Vec<String>,

    /// Remote stable identifier (UTF-8)
    #[arg(long)]
    pub remote_id: String,

    /// Remote identity key; repeat for multi-device
    #[arg(long = "remote-key", required = true)]
    pub remote_keys: Vec<String>,

    /// Encoding of the key arguments
    #[arg(long, value_enum, default_value_t = KeyEncoding::Hex)]
    pub key_encoding: KeyEncoding,

    /// Keys are raw buffers with a one-byte type prefix (one key per party)
    #[arg(long)]
    pub raw: bool,

    /// Accepted for compatibility; does not change the result
    #[arg(long = "fingerprint-version", default_value_t = 0)]
    pub version: i16,
}

#[derive(Args, Debug)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub party: PartyArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Rows)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub party: PartyArgs,

    /// Number shown on the other device (whitespace ignored)
    #[arg(long)]
    pub expected: String,
}

#[derive(Args, Debug)]
pub struct TrustArgs {
    /// PEM bundle overriding the configured root CA
    #[arg(long)]
    pub root_ca: Option<PathBuf>,
}
