//! Migrate and seed command handlers.

use anyhow::{Context, Result};
use tracing::info;

use super::open_store;
use crate::search::LanguageProfile;
use crate::seed::sample_articles;
use crate::store::{ArticleStore, StoreLocation};

pub fn handle_migrate(location: &StoreLocation) -> Result<()> {
    let mut store = open_store(location)?;
    let version = store
        .apply_schema()
        .context("failed to apply schema migrations")?;
    println!("Schema at version {version} ({location})");
    Ok(())
}

pub fn handle_seed(location: &StoreLocation, profile: LanguageProfile) -> Result<()> {
    let mut store = open_store(location)?;
    let changes = sample_articles(profile);
    store
        .save(&changes)
        .context("failed to save sample articles")?;

    info!(articles = changes.articles().len(), %profile, "seeded sample articles");
    println!("Seeded {} articles", changes.articles().len());
    for article in changes.articles() {
        println!("  {} {}", article.id().prefix(), article.title());
    }
    Ok(())
}
