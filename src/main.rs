//! ADToolkit Gallery - Main Entry Point

use std::path::PathBuf;

use ad_toolkit::app::application::run_app;
use ad_toolkit::theme::registry::preset_file_schema;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("--schema") {
        println!("{}", preset_file_schema()?);
        return Ok(());
    }

    tracing::info!("Starting ADToolkit gallery...");

    run_app(arg.map(PathBuf::from));
    Ok(())
}
