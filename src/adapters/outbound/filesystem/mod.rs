/// Filesystem adapters for project persistence
mod json_store;

pub use json_store::JsonProjectStore;
