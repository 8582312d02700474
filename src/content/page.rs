use serde::{Deserialize, Serialize};

use crate::resolver::PageId;

/// One unit of textbook content, as served by the backend.
///
/// Field names on the wire follow the backend entity (`pageId`, `chapter`,
/// `pageNumber`, ...); the same serialized form is what the offline cache
/// persists. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPage {
    #[serde(rename = "pageId")]
    pub id: PageId,

    /// chapter title shown above the content
    #[serde(rename = "chapter")]
    pub title: String,

    /// position of the page within its textbook, starting at 1
    #[serde(rename = "pageNumber")]
    pub ordinal: u32,

    /// full page body text
    #[serde(rename = "content")]
    pub body: String,

    /// AI-generated summary, if one was produced
    pub summary: Option<String>,

    /// AI-generated detailed explanation, if one was produced
    pub explanation: Option<String>,
}
