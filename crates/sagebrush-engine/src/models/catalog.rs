use std::collections::HashSet;

use super::post::Post;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate post slug: {0}")]
    DuplicateSlug(String),
}

/// Read-only, ordered collection of posts backing the insights pages.
#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    posts: Vec<Post>,
}

impl PostCatalog {
    /// Builds a catalog, keeping the given order. Slugs must be unique.
    pub fn new(posts: Vec<Post>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(post.slug.clone()));
            }
        }
        Ok(Self { posts })
    }

    pub fn get_post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    pub fn list_posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts to suggest after reading `slug`.
    ///
    /// Posts in the same category come first, then the rest, both in catalog
    /// order; the current post is never included. An unknown slug yields the
    /// first `limit` posts.
    pub fn related_posts(&self, slug: &str, limit: usize) -> Vec<&Post> {
        let Some(current) = self.get_post(slug) else {
            return self.posts.iter().take(limit).collect();
        };

        let others = || self.posts.iter().filter(move |post| post.slug != slug);
        let same_category = others().filter(|post| post.category == current.category);
        let other_category = others().filter(|post| post.category != current.category);

        same_category.chain(other_category).take(limit).collect()
    }

    /// Case-insensitive substring search over title, excerpt, body and tags.
    ///
    /// Results keep catalog order; an empty query matches every post.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let needle = query.to_lowercase();
        self.posts
            .iter()
            .filter(|post| post.matches_lowercase(&needle))
            .collect()
    }

    pub fn posts_by_category(&self, category: &str) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.category == category)
            .collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.posts
            .iter()
            .map(|post| post.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}
