//! Sandfall - headless falling-sand runner

use sandfall_headless::{HeadlessConfig, Runner};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Sandfall");

    let config = HeadlessConfig::load()?;
    let (width, height) = config.dimensions()?;
    log::info!("{}x{} sandbox, {} frames", width, height, config.frames);

    let mut runner = Runner::new(config)?;
    let stdout = std::io::stdout();
    runner.run(&mut stdout.lock())?;

    Ok(())
}
