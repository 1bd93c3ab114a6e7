use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hashline",
    about = "hashline — append-only, hash-linked record chains",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a chain from the given payloads and print every record
    Print(PrintArgs),
    /// Build a chain and look up a record by its digest
    Search(SearchArgs),
    /// Print the digest of a single payload
    Digest(DigestArgs),
    /// Build a chain and check its integrity
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct PrintArgs {
    #[arg(required = true)]
    pub payloads: Vec<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Digest to look up, as 64 hex characters
    #[arg(short, long)]
    pub target: String,

    #[arg(required = true)]
    pub payloads: Vec<String>,
}

#[derive(Args)]
pub struct DigestArgs {
    pub payload: String,
}

#[derive(Args)]
pub struct VerifyArgs {
    #[arg(required = true)]
    pub payloads: Vec<String>,
}
