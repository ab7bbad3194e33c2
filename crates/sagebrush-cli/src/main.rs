mod render;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use sagebrush_config::Config;
use sagebrush_engine::leads::{ApiResponse, SqliteLeadStore, request_consultation, subscribe};
use sagebrush_engine::{PostCatalog, io};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "sagebrush")]
#[command(about = "Browse insights posts and record leads for the Sagebrush site")]
struct Cli {
    /// Directory of post files (overrides the config file)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// SQLite lead database (overrides the config file)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List posts in catalog order
    Posts {
        #[arg(long)]
        category: Option<String>,
    },
    /// List the distinct post categories
    Categories,
    /// Show one post with its table of contents
    Show {
        slug: String,
        /// Number of related posts to list after the article
        #[arg(long, default_value_t = 3)]
        related: usize,
    },
    /// Case-insensitive search over titles, excerpts, bodies and tags
    Search { query: String },
    /// Add an email to the newsletter
    Subscribe { email: String },
    /// Submit a consultation request
    Consult {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// private, professional or institutional
        #[arg(long)]
        client_type: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Write the resolved content and database paths to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };
    let content_path = cli.content.unwrap_or(config.content_path);
    let database_path = cli.database.unwrap_or(config.database_path);

    match cli.command {
        Command::Posts { category } => {
            let catalog = open_catalog(&content_path)?;
            let posts = match category {
                Some(category) => catalog.posts_by_category(&category),
                None => catalog.list_posts().iter().collect(),
            };
            for post in posts {
                println!("{}", render::post_summary(post));
            }
        }
        Command::Categories => {
            let catalog = open_catalog(&content_path)?;
            for category in catalog.categories() {
                println!("{category}");
            }
        }
        Command::Show { slug, related } => {
            let catalog = open_catalog(&content_path)?;
            let Some(post) = catalog.get_post(&slug) else {
                eprintln!("Error: No post with slug '{slug}'");
                process::exit(1);
            };
            for line in render::post_lines(post) {
                println!("{line}");
            }
            let related_posts = catalog.related_posts(&slug, related);
            if !related_posts.is_empty() {
                println!();
                println!("Related");
                for other in related_posts {
                    println!("  {}", render::post_summary(other));
                }
            }
        }
        Command::Search { query } => {
            let catalog = open_catalog(&content_path)?;
            for post in catalog.search(&query) {
                println!("{}", render::post_summary(post));
            }
        }
        Command::Subscribe { email } => {
            let mut store = open_store(&database_path)?;
            let body = serde_json::json!({ "email": email }).to_string();
            report(subscribe(&mut store, &body, Utc::now()));
        }
        Command::Consult {
            first_name,
            last_name,
            email,
            client_type,
            phone,
            company,
            message,
        } => {
            let mut store = open_store(&database_path)?;
            let body = serde_json::json!({
                "firstName": first_name,
                "lastName": last_name,
                "email": email,
                "clientType": client_type,
                "phone": phone,
                "company": company,
                "message": message,
            })
            .to_string();
            report(request_consultation(&mut store, &body, Utc::now()));
        }
        Command::Init { force } => {
            let config = Config {
                content_path,
                database_path,
            };
            let config_path = Config::config_path();
            if !write_config(&config, &config_path, force)? {
                eprintln!(
                    "Error: {} already exists, pass --force to overwrite it",
                    config_path.display()
                );
                process::exit(1);
            }
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}

fn open_catalog(content_path: &Path) -> Result<PostCatalog> {
    io::validate_content_dir(content_path).with_context(|| {
        format!("Content path '{}' is invalid", content_path.display())
    })?;
    io::load_catalog(content_path)
        .with_context(|| format!("Failed to load posts from '{}'", content_path.display()))
}

fn open_store(database_path: &Path) -> Result<SqliteLeadStore> {
    SqliteLeadStore::open(database_path)
        .with_context(|| format!("Failed to open lead database '{}'", database_path.display()))
}

/// Saves `config` to `config_path`. Returns false, leaving the file alone,
/// when it already exists and `force` is off.
fn write_config(config: &Config, config_path: &Path, force: bool) -> Result<bool> {
    if config_path.exists() && !force {
        return Ok(false);
    }
    config
        .save_to_path(config_path)
        .with_context(|| format!("Failed to write config file '{}'", config_path.display()))?;
    Ok(true)
}

fn report(response: ApiResponse) {
    println!("{}", response.status.as_u16());
    println!("{}", response.to_json());
    if !response.status.is_success() {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site_config() -> Config {
        Config {
            content_path: PathBuf::from("/srv/site/posts"),
            database_path: PathBuf::from("/srv/site/sagebrush.db"),
        }
    }

    #[test]
    fn init_writes_a_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sagebrush").join("config.toml");

        assert!(write_config(&site_config(), &config_path, false).unwrap());

        let loaded = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(loaded, site_config());
    }

    #[test]
    fn init_keeps_existing_config_unless_forced() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "content_path = \"/old/posts\"\n").unwrap();

        assert!(!write_config(&site_config(), &config_path, false).unwrap());
        let kept = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(kept.content_path, PathBuf::from("/old/posts"));

        assert!(write_config(&site_config(), &config_path, true).unwrap());
        let replaced = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(replaced, site_config());
    }
}
