//! Import-to-storage behavior against an in-memory store.

use std::collections::HashSet;
use std::sync::Mutex;

use folio_media::{ImageStore, ImportError, StorageError, StoredImage, import_to_storage, try_import};
use pretty_assertions::assert_eq;

/// Accepts uploads only for URLs in `accept`; records every attempt.
#[derive(Default)]
struct MemoryStore {
    accept: HashSet<String>,
    attempts: Mutex<Vec<(String, String)>>,
}

impl MemoryStore {
    fn accepting(urls: &[&str]) -> Self {
        Self {
            accept: urls.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    fn attempted(&self) -> Vec<String> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }
}

impl ImageStore for MemoryStore {
    fn is_hosted(&self, url: &str) -> bool {
        url.starts_with("https://cdn.test/")
    }

    async fn upload(&self, source_url: &str, folder: &str) -> Result<StoredImage, StorageError> {
        self.attempts
            .lock()
            .unwrap()
            .push((source_url.to_string(), folder.to_string()));

        if self.accept.contains(source_url) {
            Ok(StoredImage {
                secure_url: format!("https://cdn.test/{folder}/stored.png"),
                public_id: Some(format!("{folder}/stored")),
            })
        } else {
            Err(StorageError::Api {
                status: 400,
                message: format!("cannot fetch {source_url}"),
            })
        }
    }
}

const DRIVE_LINK: &str = "https://drive.google.com/file/d/ABC123/view?usp=sharing";

#[tokio::test]
async fn stores_first_successful_candidate() {
    let store = MemoryStore::accepting(&["https://drive.google.com/uc?export=view&id=ABC123"]);

    let url = import_to_storage(&store, DRIVE_LINK, "portfolio/gallery").await;

    assert_eq!(url, "https://cdn.test/portfolio/gallery/stored.png");
    assert_eq!(
        store.attempted(),
        vec![
            "https://drive.google.com/thumbnail?id=ABC123&sz=w2000".to_string(),
            "https://drive.google.com/uc?export=view&id=ABC123".to_string(),
        ]
    );
}

#[tokio::test]
async fn all_failures_fall_back_to_normalized_url() {
    let store = MemoryStore::default();

    let url = import_to_storage(&store, DRIVE_LINK, "portfolio/posts").await;

    assert_eq!(url, "https://drive.google.com/thumbnail?id=ABC123&sz=w2000");
    assert_eq!(store.attempted().len(), 3);
}

#[tokio::test]
async fn exhausted_error_reports_each_attempt() {
    let store = MemoryStore::default();

    let err = try_import(&store, DRIVE_LINK, "portfolio/posts").await.unwrap_err();

    let attempts = match err {
        ImportError::Exhausted { attempts } => attempts,
        other => panic!("expected Exhausted, got {other:?}"),
    };
    let sources: Vec<&str> = attempts.iter().map(|a| a.source_url.as_str()).collect();
    assert_eq!(
        sources,
        vec![
            "https://drive.google.com/thumbnail?id=ABC123&sz=w2000",
            "https://drive.google.com/uc?export=view&id=ABC123",
            "https://drive.google.com/uc?export=download&id=ABC123",
        ]
    );
    assert!(matches!(attempts[0].error, StorageError::Api { status: 400, .. }));
}

#[tokio::test]
async fn generic_url_is_tried_once() {
    let store = MemoryStore::default();

    let url = import_to_storage(&store, "https://example.com/a b.png", "misc").await;

    assert_eq!(url, "https://example.com/a%20b.png");
    assert_eq!(store.attempted(), vec!["https://example.com/a%20b.png".to_string()]);
}

#[tokio::test]
async fn local_references_are_never_uploaded() {
    let store = MemoryStore::default();

    for raw in ["/uploads/a.png", "data:image/png;base64,AAAA", "blob:https://x.com/1"] {
        let err = try_import(&store, raw, "misc").await.unwrap_err();
        assert!(matches!(err, ImportError::NotRemote(_)), "raw: {raw}");
    }
    assert_eq!(
        import_to_storage(&store, "/uploads/my a.png", "misc").await,
        "/uploads/my%20a.png"
    );
    assert!(store.attempted().is_empty());
}

#[tokio::test]
async fn already_hosted_urls_are_not_reimported() {
    let store = MemoryStore::accepting(&["https://cdn.test/misc/a.png"]);

    let err = try_import(&store, "https://cdn.test/misc/a.png", "misc").await.unwrap_err();

    assert!(matches!(err, ImportError::AlreadyHosted(_)));
    assert!(store.attempted().is_empty());
}

#[tokio::test]
async fn empty_and_non_http_inputs() {
    let store = MemoryStore::default();

    assert!(matches!(try_import(&store, "  ", "misc").await, Err(ImportError::Empty)));
    assert_eq!(import_to_storage(&store, "", "misc").await, "");
    assert!(matches!(
        try_import(&store, "ftp://files.example.com/a.png", "misc").await,
        Err(ImportError::NotRemote(_))
    ));
    assert!(matches!(
        try_import(&store, "not a url", "misc").await,
        Err(ImportError::NotRemote(_))
    ));
}

#[tokio::test]
async fn folder_is_passed_to_store() {
    let store = MemoryStore::accepting(&["https://example.com/a.png"]);

    import_to_storage(&store, "https://example.com/a.png", "portfolio/services").await;

    let attempts = store.attempts.lock().unwrap().clone();
    assert_eq!(
        attempts,
        vec![("https://example.com/a.png".to_string(), "portfolio/services".to_string())]
    );
}
