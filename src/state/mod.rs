/// State management module
///
/// This module handles all persisted and shared application state:
/// - Shared data structures and the upstream record mapper (data.rs)
/// - The SQLite-backed key-value slot (storage.rs)
/// - The favorites list kept in that slot (favorites.rs)

pub mod data;
pub mod favorites;
pub mod storage;
