//! Browser-facing adapters: console logging, clock, storage, document, downloads, canvas.

pub mod document;
pub mod download;
pub mod rendering;
pub mod services;
pub mod storage;
