// Adapters layer: concrete implementations of the domain ports (http, document, storage).

pub mod document;
pub mod http;
pub mod storage;

pub use document::{InMemoryHead, MetaTag, RecordingViewport};
pub use http::GithubProfileClient;
pub use storage::LocalStorage;
