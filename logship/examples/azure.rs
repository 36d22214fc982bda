use anyhow::Result;
use logship::azure::{default_hook, Config};
use logship::{Entry, Hook, Level};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Customer id and shared key are read from
    // AZURE_LOG_ANALYTICS_CUSTOMER_ID and AZURE_LOG_ANALYTICS_SHARED_KEY.
    let hook = default_hook(Config::new().with_log_type("LogshipExample"))?;
    println!("Posting to {}", hook.endpoint());

    let entry = Entry::new(Level::Error, "A walrus appears")
        .with_field("animal", "walrus")
        .with_field("number", 1);

    match hook.fire(&entry).await {
        Ok(()) => println!("Entry delivered"),
        Err(e) => eprintln!("Delivery failed ({}): {e}", e.kind()),
    }

    Ok(())
}
