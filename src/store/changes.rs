//! Batches of entities written in one transaction.

use crate::domain::{Article, SearchDocument, SearchDocumentId, Tag};
use crate::search::LanguageProfile;

/// A graph of articles, tags and search documents to save atomically.
///
/// Entities are written in dependency order (articles, then tags, then
/// search documents), so a batch may introduce an article together with
/// everything that refers to it.
///
/// # Examples
///
/// ```
/// use folio::domain::Article;
/// use folio::search::LanguageProfile;
/// use folio::store::ChangeSet;
///
/// let changes = ChangeSet::new().indexed(
///     Article::new("Первая статья", ""),
///     &["поиск", "программирование"],
///     LanguageProfile::Russian,
/// );
/// assert_eq!(changes.articles().len(), 1);
/// assert_eq!(changes.tags().len(), 2);
/// assert_eq!(changes.search_documents().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    articles: Vec<Article>,
    tags: Vec<Tag>,
    search_documents: Vec<SearchDocument>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an article to insert or update.
    pub fn article(mut self, article: Article) -> Self {
        self.articles.push(article);
        self
    }

    /// Adds a tag to insert or update.
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Adds several tags.
    pub fn extend_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Adds a search document to insert or update.
    pub fn search_document(mut self, document: SearchDocument) -> Self {
        self.search_documents.push(document);
        self
    }

    /// Adds an article, one tag per name, and the search document derived
    /// from all of them under `profile`.
    pub fn indexed<S: AsRef<str>>(
        self,
        article: Article,
        tag_names: &[S],
        profile: LanguageProfile,
    ) -> Self {
        let document = SearchDocument::for_article(&article, tag_names, profile);
        let tags: Vec<Tag> = tag_names
            .iter()
            .map(|name| Tag::new(*article.id(), name.as_ref()))
            .collect();
        self.article(article).extend_tags(tags).search_document(document)
    }

    /// Adds an edited article and its re-derived search document.
    ///
    /// The document keeps `document_id`, the id of the one already stored for
    /// this article, so saving rewrites its vector in place. Tags are only read
    /// for the vector; add new ones separately.
    pub fn reindexed<S: AsRef<str>>(
        self,
        article: Article,
        tag_names: &[S],
        profile: LanguageProfile,
        document_id: SearchDocumentId,
    ) -> Self {
        let document =
            SearchDocument::for_article(&article, tag_names, profile).with_id(document_id);
        self.article(article).search_document(document)
    }

    /// Appends every entity of `other`.
    pub fn merge(mut self, other: ChangeSet) -> Self {
        self.articles.extend(other.articles);
        self.tags.extend(other.tags);
        self.search_documents.extend(other.search_documents);
        self
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn search_documents(&self) -> &[SearchDocument] {
        &self.search_documents
    }

    /// Total number of entities in the batch.
    pub fn len(&self) -> usize {
        self.articles.len() + self.tags.len() + self.search_documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
