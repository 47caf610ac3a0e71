use std::io;
use std::time::Duration;

use anyhow::Context;
use shopfront_app::{build_storefront, prompt_purchase};
use shopfront_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "shopfront_app=info,shopfront_order=info,shopfront_catalog=info,shopfront_store=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    let storefront = build_storefront(&config).await.context("Failed to start storefront")?;

    let purchase = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        prompt_purchase(&mut input, &mut output)?
    };
    tracing::info!("Checking out {} for {}", purchase.product, purchase.total);

    let report = storefront.run_purchase(&purchase).await;
    println!("{}", report.status_line());

    storefront.shutdown(Duration::from_secs(5));

    Ok(())
}
