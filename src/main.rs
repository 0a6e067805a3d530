use std::{net::TcpListener, time::Duration};

use env_logger::Env;
use hikaku::{
    configuration::get_configuration,
    domain::DomainProfile,
    services::{BackendClient, Controller},
    startup::run,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let profile = DomainProfile::from_flavor_name(&configuration.ui.flavor)
        .expect("Unknown ui.flavor in configuration.");

    let client = BackendClient::new(
        &configuration.backend.base_url,
        Duration::from_secs(configuration.backend.request_timeout_secs),
        profile,
    )
    .expect("Failed to build backend client.");
    let controller = Controller::new(
        client,
        profile,
        Duration::from_millis(configuration.ui.detail_delay_ms),
    );

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;
    log::info!(
        "Serving {} search UI on {}",
        configuration.ui.flavor,
        listener.local_addr()?
    );

    run(listener, controller)?.await
}
