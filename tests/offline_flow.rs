use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use edupatch::content::{
    decode_quiz, ContentLoader, ContentPage, FetchError, MemoryStore, PageFetcher, PageStore,
};
use edupatch::quiz::{ChoiceLabel, Phase, QuizSession};
use edupatch::resolver::{resolve, PageId};

/// Stands in for the backend: serves a fixed page and counts fetches.
struct FixedBackend {
    page: ContentPage,
    fetches: Arc<AtomicUsize>,
}

impl FixedBackend {
    fn new(page: ContentPage) -> (Self, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        (
            Self {
                page,
                fetches: fetches.clone(),
            },
            fetches,
        )
    }
}

#[async_trait]
impl PageFetcher for FixedBackend {
    async fn fetch_page(&self, _id: &PageId) -> Result<ContentPage, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.page.clone())
    }
}

const QUIZ_BODY: &str = r#"[
    {
        "quizId": "quiz-1",
        "question": "What does photosynthesis produce?",
        "options": ["A. Sugar", "B. Salt", "C. Iron", "D. Sand"],
        "answer": "A"
    },
    {
        "quizId": "quiz-2",
        "question": "Where does photosynthesis happen?",
        "options": ["A. Roots", "B. Chloroplasts", "C. Bark", "D. Soil"],
        "answer": "B"
    }
]"#;

fn backend_page(id: &PageId) -> ContentPage {
    ContentPage {
        id: id.clone(),
        title: "Photosynthesis".to_string(),
        ordinal: 12,
        body: "Plants convert light energy into chemical energy.".to_string(),
        summary: Some("Light becomes sugar.".to_string()),
        explanation: None,
    }
}

#[tokio::test]
async fn scanned_url_to_scored_quiz() {
    // A student scans a QR code and the payload resolves to a page id.
    let id = resolve("http://localhost:8080/pages/68b41a71a1c67d931884d637").unwrap();

    let (backend, fetches) = FixedBackend::new(backend_page(&id));
    let loader = ContentLoader::new(MemoryStore::new(), backend);

    // First visit fetches from the backend and warms the cache.
    let first = loader.load(&id).await.unwrap();
    assert!(!first.from_cache);
    assert_eq!(first.page.title, "Photosynthesis");

    // Revisiting the page (e.g. offline) is a pure cache hit.
    let second = loader.load(&id).await.unwrap();
    assert!(second.from_cache);
    assert_eq!(second.page, first.page);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);

    // The quiz items arrive as the backend sends them.
    let items = decode_quiz(QUIZ_BODY).unwrap();
    let mut session = QuizSession::new(items).unwrap();

    assert_eq!(session.progress(), (1, 2));
    assert_eq!(
        session.current_item().question,
        "What does photosynthesis produce?"
    );

    session.answer(ChoiceLabel::A).unwrap();
    session.next().unwrap();
    session.answer(ChoiceLabel::B).unwrap();
    session.next().unwrap();

    assert_eq!(session.phase(), Phase::Completed);
    let score = session.score();
    assert_eq!(score.correct, 2);
    assert_eq!(score.total, 2);
    assert_eq!(score.percentage, 100);

    let review = session.review();
    assert!(review.iter().all(|entry| entry.is_correct));
}

#[tokio::test]
async fn cache_warms_exactly_once_per_page() {
    let id = resolve("/pages/abc123").unwrap();
    let (backend, fetches) = FixedBackend::new(backend_page(&id));
    let loader = ContentLoader::new(MemoryStore::new(), backend);

    for _ in 0..3 {
        loader.load(&id).await.unwrap();
    }

    // loads after the first never touch the network
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn distinct_pages_cache_independently() {
    let first_id = resolve("/pages/first1").unwrap();
    let second_id = resolve("/pages/second2").unwrap();

    let store = MemoryStore::new();
    store.put(&first_id, &backend_page(&first_id)).unwrap();

    let (backend, fetches) = FixedBackend::new(backend_page(&second_id));
    let loader = ContentLoader::new(store, backend);

    assert!(loader.load(&first_id).await.unwrap().from_cache);
    assert!(!loader.load(&second_id).await.unwrap().from_cache);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}
