//! Lookup command handler.
//!
//! Filters the SKU, runs the search-and-normalize pipeline against the
//! configured provider, and prints the result. Pipeline failures become
//! user-facing errors here; the library crates stay silent about the
//! terminal.

use anyhow::Context;

use cardstock_core::clean_sku;
use cardstock_search::{SearchError, StockTrackClient};

use crate::card;

pub(crate) async fn run(raw_sku: &str, as_json: bool) -> anyhow::Result<()> {
    let sku = clean_sku(raw_sku);
    if sku.is_empty() {
        anyhow::bail!("SKU \"{raw_sku}\" contains no digits");
    }
    tracing::debug!(raw = raw_sku, filtered = %sku, "looking up SKU");

    let config = cardstock_core::load_app_config()?;
    let client = StockTrackClient::new(
        &config.search_url,
        config.search_timeout_secs,
        &config.search_user_agent,
        config.search_max_retries,
        config.search_retry_backoff_base_secs,
    )?;

    let record = match client.lookup(&sku).await {
        Ok(record) => record,
        Err(SearchError::ProductNotFound { sku }) => {
            anyhow::bail!("no product found for SKU {sku}")
        }
        Err(err) => return Err(err).context("product lookup failed"),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", card::render_preview(&record));
    }
    Ok(())
}
