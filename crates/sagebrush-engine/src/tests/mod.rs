use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::models::Post;

/// Create a temporary content directory for post files
pub fn create_test_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(content_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = content_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Minimal post with the given identity and category
pub fn sample_post(id: &str, slug: &str, category: &str) -> Post {
    Post {
        id: id.into(),
        slug: slug.into(),
        title: format!("Post {id}"),
        excerpt: String::new(),
        author: "Sagebrush Research".into(),
        author_role: "Research Team".into(),
        date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        read_time: "5 min read".into(),
        category: category.into(),
        image: String::new(),
        tags: vec![],
        meta_description: None,
        primary_keyword: None,
        supporting_keywords: vec![],
        takeaways: vec![],
        body: String::new(),
    }
}

/// Post file source (front matter + body) for IO tests
pub fn post_source(id: &str, slug: &str, category: &str) -> String {
    format!(
        "+++\nid = \"{id}\"\nslug = \"{slug}\"\ntitle = \"Post {id}\"\nexcerpt = \"\"\n\
         author = \"Sagebrush Research\"\ndate = \"2025-02-01\"\ncategory = \"{category}\"\n+++\n\
         ## Overview\nBody of post {id}.\n"
    )
}
