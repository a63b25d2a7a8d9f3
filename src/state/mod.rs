/// State management module
///
/// This module handles all application state, including:
/// - The tag index loaded from a source file (record.rs, index.rs)
/// - The user's transient selection: source, tags, caption mode, page
///   (selection.rs)

pub mod index;
pub mod record;
pub mod selection;
