use log::info;
use parley::{config, logging, ui};

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> anyhow::Result<()> {
    config::initialize_config()?;
    let _logger = logging::init()?;

    info!(
        "parley starting, backend at {}",
        config::get_config().base_url
    );

    ui::run_ui().await?;
    Ok(())
}
