use std::io;

use smartpings::{SendSms, SmartpingsClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phone = std::env::var("SMARTPINGS_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMARTPINGS_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SMARTPINGS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smartpings demo.".to_owned());

    let client = SmartpingsClient::from_env()?;
    let request = SendSms::new(message, phone)?;

    let response = client.send_sms(request).await?;
    println!("status: {}, body: {}", response.status, response.body);

    Ok(())
}
