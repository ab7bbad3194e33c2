use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::parsing::{ParsedDocument, parse_document};

/// Line that opens and closes the TOML header of a post file.
pub const FRONT_MATTER_DELIMITER: &str = "+++";

#[derive(Debug, thiserror::Error)]
pub enum PostParseError {
    #[error("Post must start with a `+++` front matter line")]
    MissingFrontMatter,
    #[error("Front matter is not closed by a `+++` line")]
    UnterminatedFrontMatter,
    #[error("Invalid front matter: {0}")]
    Toml(#[from] toml::de::Error),
}

/// One insights article: metadata from the front matter plus its body text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    #[serde(default)]
    pub author_role: String,
    pub date: NaiveDate,
    /// Display label such as "8 min read".
    #[serde(default)]
    pub read_time: String,
    pub category: String,
    /// Hero image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub primary_keyword: Option<String>,
    #[serde(default)]
    pub supporting_keywords: Vec<String>,
    /// Short bullet summary shown beside the article.
    #[serde(default)]
    pub takeaways: Vec<String>,
    /// Body document in the lightweight heading/list markup.
    #[serde(default)]
    pub body: String,
}

impl Post {
    /// Parse a post file: `+++` TOML front matter followed by the body.
    pub fn parse(source: &str) -> Result<Self, PostParseError> {
        let (front_matter, body) = split_front_matter(source)?;
        let mut post: Post = toml::from_str(front_matter)?;
        post.body = body.to_string();
        Ok(post)
    }

    /// Table of contents and display blocks of the body.
    pub fn parsed_body(&self) -> ParsedDocument {
        parse_document(&self.body)
    }

    /// First letter of each word of the author name, e.g. "SR".
    pub fn author_initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Case-insensitive substring match over title, excerpt, body and tags.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.body.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Split a post file into its front matter and body.
pub fn split_front_matter(source: &str) -> Result<(&str, &str), PostParseError> {
    let rest = source
        .strip_prefix(FRONT_MATTER_DELIMITER)
        .ok_or(PostParseError::MissingFrontMatter)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .ok_or(PostParseError::MissingFrontMatter)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Ok((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(PostParseError::UnterminatedFrontMatter)
}
