//! Shared test helpers: an in-memory document store that records every call

#![allow(dead_code)]

use async_trait::async_trait;
use jrnl_api::store::{DocumentStore, SearchParams};
use jrnl_common::models::{Document, DocumentPayload, SearchPage};
use jrnl_common::{Error, Result};
use std::sync::Mutex;

/// One call received by [`RecordingStore`]
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Search(SearchParams),
    Get(u64),
    Create(DocumentPayload),
    Update(u64, DocumentPayload),
}

/// Canned-response store for orchestrator and router tests
///
/// `search` always returns the configured page (or error); writes echo the
/// payload back as a document.
#[derive(Default)]
pub struct RecordingStore {
    search_result: Mutex<Option<Result<SearchPage>>>,
    write_error: Mutex<Option<Error>>,
    documents: Mutex<Vec<Document>>,
    calls: Mutex<Vec<StoreCall>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose searches return `docs` with a matching total count
    pub fn with_documents(docs: Vec<Document>) -> Self {
        let store = Self::new();
        store.set_search_page(SearchPage {
            total_count: docs.len() as u64,
            items: docs.clone(),
        });
        *store.documents.lock().unwrap() = docs;
        store
    }

    pub fn set_search_page(&self, page: SearchPage) {
        *self.search_result.lock().unwrap() = Some(Ok(page));
    }

    pub fn fail_search(&self, err: Error) {
        *self.search_result.lock().unwrap() = Some(Err(err));
    }

    pub fn fail_writes(&self, err: Error) {
        *self.write_error.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<SearchParams> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Search(params) => Some(params),
                _ => None,
            })
            .collect()
    }

    pub fn creates(&self) -> Vec<DocumentPayload> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Create(payload) => Some(payload),
                _ => None,
            })
            .collect()
    }

    pub fn updates(&self) -> Vec<(u64, DocumentPayload)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Update(id, payload) => Some((id, payload)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn take_write_error(&self) -> Option<Error> {
        self.write_error.lock().unwrap().take()
    }
}

/// Clone an error by re-building it from its parts
fn replay(err: &Error) -> Error {
    match err {
        Error::InvalidArgument(m) => Error::InvalidArgument(m.clone()),
        Error::NotFound(m) => Error::NotFound(m.clone()),
        Error::MultipleEntries { category, count } => Error::MultipleEntries {
            category: category.clone(),
            count: *count,
        },
        Error::RemoteApi { error, message } => Error::RemoteApi {
            error: error.clone(),
            message: message.clone(),
        },
        Error::Transport(m) => Error::Transport(m.clone()),
        Error::Parse(m) => Error::Parse(m.clone()),
        Error::Config(m) => Error::Config(m.clone()),
        Error::Io(e) => Error::Io(std::io::Error::new(e.kind(), e.to_string())),
    }
}

fn document_from(id: u64, payload: &DocumentPayload) -> Document {
    Document {
        id,
        category: payload.category.clone(),
        title: payload.title.clone(),
        body_md: payload.body.clone(),
        body_html: String::new(),
        tags: payload.tags.clone(),
        created_at: None,
        updated_at: None,
        url: Some(format!("https://store.example.com/documents/{}", id)),
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn search(&self, params: &SearchParams) -> Result<SearchPage> {
        self.record(StoreCall::Search(params.clone()));
        match &*self.search_result.lock().unwrap() {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(err)) => Err(replay(err)),
            None => Ok(SearchPage::default()),
        }
    }

    async fn get(&self, id: u64) -> Result<Document> {
        self.record(StoreCall::Get(id));
        self.documents
            .lock()
            .unwrap()
            .iter()
            .find(|doc| doc.id == id)
            .cloned()
            .ok_or_else(|| Error::RemoteApi {
                error: "not_found".to_string(),
                message: "Not found".to_string(),
            })
    }

    async fn create(&self, payload: &DocumentPayload) -> Result<Document> {
        self.record(StoreCall::Create(payload.clone()));
        if let Some(err) = self.take_write_error() {
            return Err(err);
        }
        Ok(document_from(1000, payload))
    }

    async fn update(&self, id: u64, payload: &DocumentPayload) -> Result<Document> {
        self.record(StoreCall::Update(id, payload.clone()));
        if let Some(err) = self.take_write_error() {
            return Err(err);
        }
        Ok(document_from(id, payload))
    }
}

/// Document fixture for a day entry
pub fn journal_doc(id: u64, category: &str, title: &str, tags: &[&str], body: &str) -> Document {
    Document {
        id,
        category: category.to_string(),
        title: title.to_string(),
        body_md: body.to_string(),
        body_html: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: None,
        updated_at: None,
        url: None,
    }
}
