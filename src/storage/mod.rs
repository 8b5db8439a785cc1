//! Durable storage seams
//!
//! Two independent concerns: a key-value store holding the serialized note
//! list, and a blob store holding one audio file per note.

pub mod blobs;
pub mod kv;

pub use blobs::{BlobStore, FsBlobStore, NullBlobStore};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
