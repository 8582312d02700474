mod fetch;
mod loader;
mod page;
mod store;

pub use fetch::{decode_page, decode_quiz, FetchError, HttpFetcher, PageFetcher, QuizFetcher};
pub use loader::{ContentLoader, LoadError, LoadedPage};
pub use page::ContentPage;
pub use store::{FileStore, MemoryStore, PageStore, StoreError};
