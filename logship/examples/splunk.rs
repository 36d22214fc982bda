use anyhow::Result;
use logship::splunk::{default_hook, Config};
use logship::{Entry, Hook, Level};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Url and token are read from SPLUNK_HEC_URL and SPLUNK_HEC_TOKEN.
    let hook = default_hook(
        Config::new()
            .with_source("logship-example")
            .with_source_type("_json")
            .with_index("main")
            .with_default_field("env", "dev"),
    )?;
    println!("Sending from host {:?}", hook.hostname());

    let entry = Entry::new(Level::Error, "A walrus appears")
        .with_field("animal", "walrus")
        .with_field("number", 1);

    match hook.fire(&entry).await {
        Ok(()) => println!("Event delivered"),
        // For rejected events the error is the collector response body.
        Err(e) => eprintln!("Delivery failed ({}): {e}", e.kind()),
    }

    Ok(())
}
