use std::sync::LazyLock;

use moim_model::Comment;
use regex::Regex;
use serde::Serialize;

static WEB_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("valid regex"));

/// A run of comment text, either plain or a tappable link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum CommentSegment {
    Text(String),
    Link(String),
}

/// A comment prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentUiModel {
    pub comment: Comment,
    pub segments: Vec<CommentSegment>,
}

impl CommentUiModel {
    pub fn new(comment: Comment) -> Self {
        let segments = split_links(&comment.content);
        Self { comment, segments }
    }

    pub fn id(&self) -> &str {
        &self.comment.comment_id
    }

    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            CommentSegment::Link(url) => Some(url.as_str()),
            CommentSegment::Text(_) => None,
        })
    }
}

fn split_links(content: &str) -> Vec<CommentSegment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for found in WEB_LINK_RE.find_iter(content) {
        if found.start() > last {
            segments.push(CommentSegment::Text(content[last..found.start()].to_string()));
        }
        segments.push(CommentSegment::Link(found.as_str().to_string()));
        last = found.end();
    }
    if last < content.len() {
        segments.push(CommentSegment::Text(content[last..].to_string()));
    }
    segments
}
