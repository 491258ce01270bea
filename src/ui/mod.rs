//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Main screen and dialog drawing
//! - `theme.rs` - Color themes and cell styles
//! - `layout.rs` - Grid and dialog geometry
//! - `calendar_view.rs` - Month calendar widget

mod draw;
pub mod calendar_view;
pub mod layout;
pub mod theme;

// Re-export main draw function
pub use draw::draw;
