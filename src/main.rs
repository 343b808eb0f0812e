use std::sync::Arc;

use hellotron::config::{load_config, print_schema};
use hellotron::startup;
use hellotron::utils::logger::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // "--schema" prints the config JSON schema and exits, for validating
    // deployed config files.
    if std::env::args().any(|arg| arg == "--schema") {
        print_schema();
        return Ok(());
    }

    let config = Arc::new(load_config());
    init_logging(&config.logging);

    startup::run(config).await
}
