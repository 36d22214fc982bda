use anyhow::Result;
use logship::{azure, splunk, Dispatcher, Entry, Level};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut dispatcher = Dispatcher::new();
    match azure::default_hook(azure::Config::new().with_log_type("LogshipExample")) {
        Ok(hook) => dispatcher.add_hook(hook),
        Err(e) => eprintln!("Azure Log Analytics hook disabled: {e}"),
    }
    match splunk::default_hook(splunk::Config::new().with_source("logship-example")) {
        Ok(hook) => dispatcher.add_hook(hook),
        Err(e) => eprintln!("Splunk HEC hook disabled: {e}"),
    }
    println!("{} hooks registered", dispatcher.len());

    // Both hooks only subscribe to error, fatal and panic.
    dispatcher
        .fire(&Entry::new(Level::Info, "Nobody will hear about this walrus"))
        .await?;
    dispatcher
        .fire(
            &Entry::new(Level::Error, "A walrus appears")
                .with_field("animal", "walrus")
                .with_field("number", 1),
        )
        .await?;

    Ok(())
}
