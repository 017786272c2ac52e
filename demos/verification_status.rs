use std::io;

use smartpings::SmartpingsClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let identifier = std::env::var("SMARTPINGS_IDENTIFIER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMARTPINGS_IDENTIFIER environment variable is required",
        )
    })?;

    let client = SmartpingsClient::from_env()?;
    let status = client.get_contact_verification_status(&identifier).await?;
    println!(
        "{} ({}): {} verified={} verified_at={:?} expires_at={:?}",
        status.identifier,
        status.contact_type,
        status.status.as_str(),
        status.verified,
        status.verified_at,
        status.expires_at
    );

    Ok(())
}
