//! Offline-aware content delivery and quiz sessions for EduPatch.
//!
//! Three pieces, composed as a pipeline from a scanned QR payload to a
//! rendered or scored result:
//!
//! - [`resolver`] turns an arbitrary pasted/scanned string into a [`PageId`].
//! - [`content`] serves a [`ContentPage`] for that id, cache-first with a
//!   remote fallback that warms the cache, so pages stay reachable offline.
//! - [`quiz`] runs a page's quiz as a deterministic session state machine:
//!   one question at a time, answer-gated navigation, scoring and review.

pub mod content;
pub mod quiz;
pub mod resolver;

pub use content::{ContentLoader, ContentPage, FileStore, HttpFetcher, LoadedPage, MemoryStore};
pub use quiz::{ChoiceLabel, QuizItem, QuizSession};
pub use resolver::{resolve, PageId, ResolutionError};
