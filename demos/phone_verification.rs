use std::io::{self, BufRead, Write};

use smartpings::SmartpingsClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phone_raw = std::env::var("SMARTPINGS_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMARTPINGS_PHONE environment variable is required",
        )
    })?;
    let name = std::env::var("SMARTPINGS_NAME").ok();

    let client = SmartpingsClient::from_env()?;
    let phone = phone_raw.trim();

    client
        .send_phone_verification(phone, name.as_deref(), Some(10), None)
        .await?;
    println!("code sent to {phone}");

    print!("enter the code: ");
    io::stdout().flush()?;
    let mut code = String::new();
    io::stdin().lock().read_line(&mut code)?;

    let response = client
        .verify_phone_with_code(phone, code.trim())
        .await?;
    println!("status: {}, body: {}", response.status, response.body);

    Ok(())
}
