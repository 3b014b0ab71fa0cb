mod application;
mod config;
mod console;
mod states;

use anyhow::Result;

use bplot_engine::device::GpuInit;
use bplot_engine::logging::init_logging;
use bplot_engine::window::Runtime;

use application::Application;
use config::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::default();
    let console = init_logging(config.logging.clone());

    log::info!("App starts, the resolution is {}x{}", config.width, config.height);

    let runtime = config.runtime_config();
    Runtime::run(runtime, GpuInit::default(), Application::new(config, console))?;

    log::info!("App closed");
    Ok(())
}
