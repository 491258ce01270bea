//! Calendar display adapter.
//!
//! - `grid` - 6x7 month layout
//! - `annotations` - date-linked event text and tags
//! - `cells` - per-cell text and style tag
//!
//! Drawing lives in `ui::calendar_view`; this module has no terminal types.

pub mod annotations;
pub mod cells;
pub mod grid;

pub use annotations::Annotations;
pub use cells::{resolve_month, CellView};
pub use grid::{GridOptions, MonthGrid};
