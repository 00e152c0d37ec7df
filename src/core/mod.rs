//! Translation store core.
//!
//! ## Module Structure
//!
//! - `entry`: translation entries and locale collections
//! - `document`: typed origin-file tree and dotted-key flattening
//! - `merge`: deterministic precedence merge
//! - `harvest`: default translations from vendor/app origins
//! - `store`: object store capability and its implementations
//! - `manager`: per-locale CRUD and reconciliation
//! - `interchange`: CSV import/export
//! - `lookup`: lookup facade for host translation chains

pub mod document;
pub mod entry;
pub mod harvest;
pub mod interchange;
pub mod locale;
pub mod lookup;
pub mod manager;
pub mod merge;
pub mod store;

pub use document::OriginDocument;
pub use entry::{
    LocaleCollection, NAMESPACE_SEPARATOR, Source, TranslationEntry, parse_full_key, split_full_key,
    validate_namespace,
};
pub use harvest::{FileLoader, Harvester, TranslationLoader, VendorNamespace};
pub use interchange::{read_csv, write_csv};
pub use lookup::Translator;
pub use manager::{DEFAULT_COLLECTION_DIR, Manager, SyncReport};
pub use merge::{Merger, merge};
pub use store::{LocalStore, MemoryStore, ObjectStore, StoreError};
