pub mod check;
pub mod serve;
pub mod upload;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pinrelay")]
#[command(version)]
#[command(about = "Relay file uploads to an IPFS pinning service", long_about = None)]
pub struct Cli {
    /// Optional TOML config file; environment variables override it
    #[arg(short, long, env = "PIN_RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the upload relay
    Serve {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Upload a file through a running relay
    Upload(UploadArgs),
    /// Print the effective configuration and check it
    Check,
}

#[derive(Args, Debug, Clone)]
pub struct UploadArgs {
    /// File to upload
    pub file: Option<PathBuf>,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Relay upload endpoint, e.g. http://localhost:5000/upload
    #[arg(long)]
    pub relay_url: Option<String>,
}
