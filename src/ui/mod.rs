/// Widget composition for the browser
///
/// - Sidebar controls: source, tags, caption mode, page (sidebar.rs)
/// - The paginated thumbnail grid (grid.rs)

pub mod grid;
pub mod sidebar;
