use crate::models::{CatalogError, Post, PostCatalog, PostParseError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Invalid post file {path}: {source}")]
    InvalidPost {
        path: PathBuf,
        source: PostParseError,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Read and parse a single post file
pub fn read_post(path: &Path) -> Result<Post, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let source = fs::read_to_string(path).map_err(IoError::Io)?;
    Post::parse(&source).map_err(|source| IoError::InvalidPost {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan for post files in the content directory
pub fn scan_post_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Build a catalog from every post file in the content directory, in path order
pub fn load_catalog(content_root: &Path) -> Result<PostCatalog, IoError> {
    let files = scan_post_files(content_root)?;
    let posts = files
        .iter()
        .map(|path| read_post(path))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "Loaded {} posts from {}",
        posts.len(),
        content_root.display()
    );
    Ok(PostCatalog::new(posts)?)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}
