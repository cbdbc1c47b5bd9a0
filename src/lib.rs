//! SDXS Studio
//!
//! Terminal client for a local SD-XS image generation backend. The binary
//! only parses arguments; bootstrap lives here.

use sdxs_app::BackendConfig;
use sdxs_core::prelude::*;
use sdxs_core::NoiseFilter;

/// Application entry point
///
/// Installs error reporting and file logging, reads the backend address and
/// runs the TUI until the user quits.
pub async fn run() -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let noise = NoiseFilter::layout_loop();

    // Initialize logging (to file, since TUI owns stdout)
    sdxs_core::logging::init(noise.clone())?;

    let config = BackendConfig::from_env()?;

    let result = sdxs_tui::run(config, noise).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(log_file) = sdxs_core::logging::get_current_log_file() {
            eprintln!("Details were logged to {}", log_file.display());
        }
    }

    info!("SDXS Studio exiting");
    result
}
