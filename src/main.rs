//! SDXS Studio - terminal client for local SD-XS image generation
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;

/// SDXS Studio - terminal client for local SD-XS image generation
///
/// The backend address is read from SDXS_BACKEND_URL
/// (default http://localhost:8001).
#[derive(Parser, Debug)]
#[command(name = "sdxs", version)]
#[command(about = "Terminal client for local SD-XS image generation", long_about = None)]
struct Args {}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let _args = Args::parse();
    sdxs_studio::run().await?;
    Ok(())
}
