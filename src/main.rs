use anyhow::{Context, Result};
use timefly::{FormatOptions, Origin, TemporalAge};
use tracing_subscriber::filter::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    let arg = std::env::args()
        .nth(1)
        .context("usage: timefly <origin> (YYYY.MM.DD, YYYY/MM/DD, YYYY-MM-DD or json:<value>)")?;

    let origin = match arg.strip_prefix("json:") {
        Some(raw) => Origin::from(
            serde_json::from_str::<serde_json::Value>(raw)
                .context("origin is not valid JSON")?,
        ),
        None => Origin::from(arg),
    };

    let options = match std::env::var("TIMEFLY_OPTIONS") {
        Ok(raw) => serde_json::from_str::<FormatOptions>(&raw)
            .context("TIMEFLY_OPTIONS is not a valid options object")?,
        Err(_) => FormatOptions::default(),
    };

    let origin = TemporalAge::new(origin).context("unable to read origin time")?;

    println!("age: {}", origin.age(&options));
    println!("elapsed: {}", origin.elapsed_time(&options));

    Ok(())
}
