// Adapters layer: concrete implementations for external systems.

pub mod http_store;

pub use http_store::HttpDocumentStore;
