//! Adoul CMS Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック

pub mod types;
pub mod messages;
pub mod error;
pub mod storage;
pub mod catalog;
pub mod creator;
pub mod request;
pub mod auth;

pub use types::{Fabric, Work, Record, RecordId};
pub use error::{CmsError, ValidationError, Result};
pub use storage::{KeyValueStore, MemoryStore, RecordStore};
pub use catalog::{Card, CardField, CatalogView, Cardable, SelectOption, catalog_view, fabric_options};
pub use creator::{Clock, Draft, FabricDraft, ImageSource, PendingRecord, WorkDraft, prepare};
pub use request::QuoteRequest;
pub use auth::{AdminGate, Authenticator, GateState, SharedPassword, DEFAULT_ADMIN_PASSWORD};
