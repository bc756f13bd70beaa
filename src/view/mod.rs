/// View subsystem - terminal presentation of registry content
///
/// The view model flattens page blocks and the grouped sidebar into styled
/// lines; the renderer owns the terminal and diffs frames. Neither layer
/// knows about controller state beyond what it is handed per frame.

pub mod renderer;
pub mod view_model;

// Re-export public interface
pub use renderer::{RenderParams, View};
pub use view_model::{Line, Span, Style, build_content, build_sidebar, visible_ids};
