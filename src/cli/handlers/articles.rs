//! Add, show, list and delete command handlers.

use anyhow::{Context, Result, bail};

use super::{open_store, to_json, truncate_str};
use crate::cli::output::{ArticleListing, OutputFormat};
use crate::cli::{AddArgs, DeleteArgs, ListArgs, ShowArgs};
use crate::domain::{Article, ArticleWithTags};
use crate::search::LanguageProfile;
use crate::store::{ArticleStore, ChangeSet, StoreLocation};

const TITLE_WIDTH: usize = 50;

pub fn handle_add(args: &AddArgs, location: &StoreLocation, profile: LanguageProfile) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        bail!("article title cannot be empty");
    }

    let mut store = open_store(location)?;
    let article = Article::new(title, args.body.as_str());
    let id = *article.id();
    let changes = ChangeSet::new().indexed(article, args.tags.as_slice(), profile);
    store
        .save(&changes)
        .with_context(|| format!("failed to save article: {title}"))?;

    println!("{id}");
    Ok(())
}

pub fn handle_show(args: &ShowArgs, location: &StoreLocation) -> Result<()> {
    let store = open_store(location)?;
    let loaded = store
        .load_with_tags(&args.id)
        .with_context(|| format!("failed to load article {}", args.id))?;

    match args.format {
        OutputFormat::Human => print!("{}", render_article(&loaded)),
        OutputFormat::Json => println!("{}", to_json(ArticleListing::from(&loaded))?),
    }
    Ok(())
}

pub fn handle_list(args: &ListArgs, location: &StoreLocation) -> Result<()> {
    let store = open_store(location)?;
    let articles = store.list_with_tags().context("failed to list articles")?;

    match args.format {
        OutputFormat::Human => print!("{}", render_article_list(&articles)),
        OutputFormat::Json => {
            let listings: Vec<ArticleListing> = articles.iter().map(ArticleListing::from).collect();
            println!("{}", to_json(listings)?);
        }
    }
    Ok(())
}

pub fn handle_delete(args: &DeleteArgs, location: &StoreLocation) -> Result<()> {
    let mut store = open_store(location)?;
    let deleted = store
        .delete_article(&args.id)
        .with_context(|| format!("failed to delete article {}", args.id))?;
    if !deleted {
        bail!("article not found: {}", args.id);
    }
    println!("Deleted {}", args.id);
    Ok(())
}

/// Full article view: header lines, then the body.
pub(crate) fn render_article(loaded: &ArticleWithTags) -> String {
    let article = loaded.article();
    let mut out = format!("# {}\n\nID: {}\n", article.title(), article.id());
    let tags = loaded.tag_names();
    if !tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", tags.join(", ")));
    }
    if !article.body().is_empty() {
        out.push('\n');
        out.push_str(article.body());
        out.push('\n');
    }
    out
}

/// One line per article: ID prefix, title and tags.
pub(crate) fn render_article_list(articles: &[ArticleWithTags]) -> String {
    if articles.is_empty() {
        return "No articles found.\n".to_string();
    }
    articles
        .iter()
        .map(|loaded| {
            let article = loaded.article();
            let title = truncate_str(article.title(), TITLE_WIDTH);
            let tags = loaded.tag_names();
            if tags.is_empty() {
                format!("{}  {}\n", article.id().prefix(), title)
            } else {
                format!("{}  {}  [{}]\n", article.id().prefix(), title, tags.join(", "))
            }
        })
        .collect()
}
