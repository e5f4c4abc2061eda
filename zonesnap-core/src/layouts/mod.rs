mod layout_manager;
pub mod persist;

pub use layout_manager::LayoutManager;

pub const COLUMNS: &str = "columns";
pub const ROWS: &str = "rows";
pub const GRID: &str = "grid";
pub const PRIORITY_GRID: &str = "priority-grid";
