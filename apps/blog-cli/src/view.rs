//! Plain-text rendering of the list, detail and not-found views.

use std::fmt::Write as _;

use blog_client::BlogResponse;
use chrono::{DateTime, Local, Utc};

const TITLE_WIDTH: usize = 24;
const CONTENT_WIDTH: usize = 40;

/// Long calendar date in the local time zone, e.g. `6 February 2026`.
pub fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-d %B %Y").to_string()
}

/// Long date plus time of day, e.g. `6 February 2026, 14:05`.
pub fn format_datetime(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%-d %B %Y, %H:%M")
        .to_string()
}

/// First line of `text`, cut to `max` characters with an ellipsis.
pub fn excerpt(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or_default();
    let multiline = line.len() < text.trim_end().len();

    if line.chars().count() > max {
        let cut: String = line.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    } else if multiline {
        format!("{line}…")
    } else {
        line.to_string()
    }
}

pub fn render_list(posts: &[BlogResponse]) -> String {
    if posts.is_empty() {
        return "No blogs yet. Create a new one to get started.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<TITLE_WIDTH$}  {:<CONTENT_WIDTH$}  DATE",
        "ID", "TITLE", "CONTENT"
    );
    for post in posts {
        let _ = writeln!(
            out,
            "{:>5}  {:<TITLE_WIDTH$}  {:<CONTENT_WIDTH$}  {}",
            post.id,
            excerpt(&post.title, TITLE_WIDTH),
            excerpt(&post.content, CONTENT_WIDTH),
            format_date(post.created_at),
        );
    }
    out
}

/// Footer under the list: how many posts and when the newest change happened.
pub fn render_summary(count: usize, updated_at: Option<DateTime<Utc>>) -> String {
    match updated_at {
        Some(at) => format!("{count} blog(s), last updated {}\n", format_datetime(at)),
        None => format!("{count} blog(s)\n"),
    }
}

pub fn render_detail(blog: &BlogResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", blog.title);
    let _ = writeln!(out, "{}", "=".repeat(blog.title.chars().count().max(3)));
    let _ = writeln!(out, "Published on {}", format_datetime(blog.created_at));
    if blog.updated_at != blog.created_at {
        let _ = writeln!(out, "Updated on {}", format_datetime(blog.updated_at));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", blog.content);
    out
}

pub fn render_not_found(id: i32) -> String {
    format!("Blog not found\n\nSorry, the blog with ID {id} could not be found.\n")
}
