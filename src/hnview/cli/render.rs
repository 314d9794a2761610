//! Text rendering of the view state and command messages.
//!
//! Everything returns a `String` so it can be tested; callers print it.

use chrono::{DateTime, Utc};
use colored::Colorize;
use hnview::commands::{CmdMessage, MessageLevel};
use hnview::model::Story;
use hnview::state::SearchState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 6;
const POINTS_WIDTH: usize = 12;

pub const ERROR_BANNER: &str = "Something went wrong while loading...";
pub const LOADING: &str = "Loading ...";
pub const EMPTY: &str = "No stories.";

/// The whole view: error banner when errored, then either the loading line or the list.
pub fn render_view(state: &SearchState) -> String {
    let mut out = String::new();
    if state.is_error() {
        out.push_str(&format!("{}\n", ERROR_BANNER.red()));
    }
    if state.is_loading() {
        out.push_str(&format!("{}\n", LOADING.dimmed()));
    } else {
        out.push_str(&render_stories(state.stories()));
    }
    out
}

pub fn render_stories(stories: &[Story]) -> String {
    if stories.is_empty() {
        return format!("{}\n", EMPTY.dimmed());
    }

    let mut out = String::new();
    for (i, story) in stories.iter().enumerate() {
        let index = format!("{:>width$}. ", i + 1, width = INDEX_WIDTH - 2);
        let points = story
            .points
            .map(|p| format!("{} points", p))
            .unwrap_or_default();

        let available = LINE_WIDTH.saturating_sub(INDEX_WIDTH + POINTS_WIDTH);
        let title = if story.title.is_empty() {
            "(untitled)".to_string()
        } else {
            truncate_to_width(&story.title, available)
        };
        let padding = available.saturating_sub(title.width());

        let points = format!("{:>width$}", points, width = POINTS_WIDTH);

        out.push_str(&format!(
            "{}{}{}{}\n",
            index.yellow(),
            title.bold(),
            " ".repeat(padding),
            points.dimmed()
        ));

        let meta = story_meta(story);
        if !meta.is_empty() {
            out.push_str(&format!("{}{}\n", " ".repeat(INDEX_WIDTH), meta.dimmed()));
        }
    }
    out
}

fn story_meta(story: &Story) -> String {
    let mut parts = Vec::new();
    if !story.url.is_empty() {
        parts.push(story.url.clone());
    }
    if !story.author.is_empty() {
        parts.push(format!("by {}", story.author));
    }
    if let Some(n) = story.num_comments {
        parts.push(format!("{} comments", n));
    }
    if let Some(created_at) = story.created_at {
        parts.push(format_time_ago(created_at));
    }
    truncate_to_width(&parts.join(" · "), LINE_WIDTH.saturating_sub(INDEX_WIDTH))
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
