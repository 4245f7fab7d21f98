//! Leadcard engine: storage, dataset loading and byte decoding.
mod decode;
mod fetch;
mod loader;
mod storage;
mod types;
mod view_store;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use loader::{DatasetLoader, DatasetSource};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use types::{FailureKind, FetchError, FetchOutput, LoadEvent};
pub use view_store::{
    clear_stored_view, read_stored_view, write_stored_view, StoredView, INDEX_KEY, INDUSTRY_KEY,
};
