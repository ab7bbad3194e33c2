use sagebrush_engine::{ContentBlock, Post};

/// One-line listing entry: date, category, slug and title.
pub fn post_summary(post: &Post) -> String {
    format!(
        "{}  [{}]  {}  {}",
        post.date, post.category, post.slug, post.title
    )
}

/// Full plain-text view of a post: header, table of contents, then blocks.
pub fn post_lines(post: &Post) -> Vec<String> {
    let parsed = post.parsed_body();
    let mut lines = vec![
        post.title.clone(),
        format!(
            "{} ({}) · {} · {}",
            post.author, post.author_role, post.date, post.read_time
        ),
        String::new(),
        post.excerpt.clone(),
        String::new(),
    ];

    if !parsed.sections.is_empty() {
        lines.push("Contents".to_string());
        for (index, title) in parsed.sections.iter().enumerate() {
            lines.push(format!("  {}. {title}", index + 1));
        }
        lines.push(String::new());
    }

    for block in &parsed.blocks {
        lines.extend(block_lines(block));
        lines.push(String::new());
    }

    if !post.takeaways.is_empty() {
        lines.push("Key takeaways".to_string());
        lines.extend(post.takeaways.iter().map(|item| format!("  * {item}")));
    }

    // Drop the trailing spacer
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

fn block_lines(block: &ContentBlock) -> Vec<String> {
    match block {
        ContentBlock::Section { title, body } => {
            let mut lines = vec![format!("== {title} ==")];
            if !body.is_empty() {
                lines.extend(body.lines().map(str::to_string));
            }
            lines
        }
        ContentBlock::Subheading { title } => vec![format!("-- {title}")],
        ContentBlock::Paragraph { body } => body.lines().map(str::to_string).collect(),
        ContentBlock::List { items } => items.iter().map(|item| format!("  • {item}")).collect(),
    }
}
