use menumail::configuration::get_configuration;
use menumail::startup::build;
use menumail::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("menumail".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().expect("Failed to read configuration.");
    let app = build(config)?;
    app.run().await?;

    Ok(())
}
