use chainparams_rs::{ActiveNetParams, Settings};
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init();

    // Optional settings file path as the only argument
    let settings_path = std::env::args().nth(1).map(PathBuf::from);

    let settings = match Settings::load(settings_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load settings: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    let active = match settings.resolve().and_then(|(chain, kind)| ActiveNetParams::select(chain, kind)) {
        Ok(active) => active,
        Err(e) => {
            // Never fall back to a default network.
            log::error!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    if let Some(checkpoint) = active.latest_checkpoint() {
        log::info!("Latest checkpoint: height {} hash {}", checkpoint.height, checkpoint.hash);
    } else {
        log::info!("No checkpoints declared for {} {}", active.chain(), active.kind());
    }

    let json = serde_json::to_string_pretty(active.params())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
