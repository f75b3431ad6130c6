//! The `generate` command: fetch the catalog, render the feed, persist it.

use std::path::Path;

use anyhow::Context;

pub(crate) fn build_shopify_client(
    config: &shopfeed_core::AppConfig,
) -> anyhow::Result<shopfeed_shopify::ShopifyClient> {
    shopfeed_shopify::ShopifyClient::new(
        &config.shop_url,
        &config.api_version,
        &config.access_token,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Shopify client: {e}"))
}

/// Runs one full feed generation.
///
/// The catalog is fetched completely before anything is rendered, and the
/// document is written in a single call once fully built. Any failure aborts
/// the run without touching an existing output file.
///
/// # Errors
///
/// Returns an error if the client cannot be built, any page fetch fails,
/// or the output file cannot be written.
pub(crate) async fn run_generate(
    config: &shopfeed_core::AppConfig,
    output: Option<&Path>,
    to_stdout: bool,
) -> anyhow::Result<()> {
    let client = build_shopify_client(config)?;

    let products = client
        .fetch_all_products(config.page_limit)
        .await
        .context("failed to fetch product catalog")?;

    let xml = shopfeed_feed::render_feed(&products, &config.feed);
    let item_count: usize = products.iter().map(|p| p.variants.len()).sum();

    if to_stdout {
        print!("{xml}");
        return Ok(());
    }

    let path = output.unwrap_or(config.output_path.as_path());
    write_feed(path, &xml)?;

    tracing::info!(
        products = products.len(),
        items = item_count,
        path = %path.display(),
        "feed written"
    );
    println!("XML feed created: {}", path.display());

    Ok(())
}

/// Writes the rendered document to `path`, replacing any previous feed.
pub(crate) fn write_feed(path: &Path, xml: &str) -> anyhow::Result<()> {
    std::fs::write(path, xml)
        .with_context(|| format!("failed to write feed to {}", path.display()))
}
