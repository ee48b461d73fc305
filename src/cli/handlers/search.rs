//! Search command handler.

use anyhow::{Context, Result};

use super::{open_store, to_json};
use crate::cli::SearchArgs;
use crate::cli::output::{OutputFormat, SearchListing};
use crate::search::LanguageProfile;
use crate::store::{ArticleStore, SearchHit, StoreLocation};

pub fn handle_search(
    args: &SearchArgs,
    location: &StoreLocation,
    profile: LanguageProfile,
) -> Result<()> {
    let store = open_store(location)?;

    // 1. Execute FTS search, best match first
    let mut hits = store
        .search_text(&args.query, profile)
        .with_context(|| format!("search failed for query: {}", args.query))?;

    // 2. Apply limit (if provided)
    if let Some(limit) = args.limit {
        hits.truncate(limit);
    }

    // 3. Format and output
    match args.format {
        OutputFormat::Human => print!("{}", render_search(&hits)),
        OutputFormat::Json => {
            let listings: Vec<SearchListing> = hits.iter().map(SearchListing::from).collect();
            println!("{}", to_json(listings)?);
        }
    }
    Ok(())
}

/// One line per hit with its rank.
pub(crate) fn render_search(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No matching articles found.\n".to_string();
    }
    hits.iter()
        .map(|hit| {
            let article = hit.article();
            format!(
                "{} {} (rank: {:.2})\n",
                article.id().prefix(),
                article.title(),
                hit.rank()
            )
        })
        .collect()
}
