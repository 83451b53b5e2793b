//! Structured data embedded in object comments.
//!
//! A comment may carry a JSON payload between `[relgraph]` and `[/relgraph]`
//! tags. The payload is opaque to this crate and is forwarded to relations.

use crate::error::{Error, Result};
use std::borrow::Cow;

const OPEN_TAG: &str = "[relgraph]";
const CLOSE_TAG: &str = "[/relgraph]";

/// Extract the JSON payload from a comment, if any.
///
/// Returns `Ok(None)` when the comment has no opening tag.
pub fn comment_data_from_comment(comment: &str) -> Result<Option<serde_json::Value>> {
    let Some(start) = comment.find(OPEN_TAG) else {
        return Ok(None);
    };
    let body = &comment[start + OPEN_TAG.len()..];
    let end = body
        .find(CLOSE_TAG)
        .ok_or_else(|| Error::CommentData(format!("missing closing {CLOSE_TAG} tag")))?;

    serde_json::from_str(body[..end].trim())
        .map(Some)
        .map_err(|e| Error::CommentData(e.to_string()))
}

/// Comment text with any data payload removed.
///
/// Text on both sides of the payload is kept, joined by a single space. An
/// unterminated payload drops everything from the opening tag on.
pub fn comment_text(comment: &str) -> Cow<'_, str> {
    let Some(start) = comment.find(OPEN_TAG) else {
        return Cow::Borrowed(comment);
    };
    let before = comment[..start].trim_end();
    let after = comment[start + OPEN_TAG.len()..]
        .find(CLOSE_TAG)
        .map(|end| comment[start + OPEN_TAG.len() + end + CLOSE_TAG.len()..].trim_start())
        .unwrap_or_default();

    match (before.is_empty(), after.is_empty()) {
        (_, true) => Cow::Borrowed(before),
        (true, false) => Cow::Borrowed(after),
        (false, false) => Cow::Owned(format!("{before} {after}")),
    }
}
