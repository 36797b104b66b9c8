use anyhow::Result;
use muniscrape::{extract, fetch, output};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) fetch the page ───────────────────────────────────────────
    let client = Client::new();
    info!(url = fetch::PAGE_URL, "fetching page");
    let html = fetch::fetch_page(&client, fetch::PAGE_URL).await?;
    info!("fetched {} bytes", html.len());

    // ─── 3) locate the table and extract its rows ────────────────────
    let records = extract::extract_municipalities(&html)?;
    info!("extracted {} municipalities", records.len());

    // ─── 4) write the CSV ────────────────────────────────────────────
    output::write_csv(&records, output::OUTPUT_PATH)?;
    info!("wrote {}", output::OUTPUT_PATH);

    Ok(())
}
