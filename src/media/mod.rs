/// Image retrieval and decoding module
///
/// This module handles:
/// - Fetching raw image bytes, from disk or from the record's embedded
///   base64 payload (loader.rs)
/// - Decoding and resizing those bytes into grid thumbnails (thumbnail.rs)

pub mod loader;
pub mod thumbnail;
