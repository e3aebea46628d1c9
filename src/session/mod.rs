//! Editing session state and the operations the input layer calls

/// Editor session driving the tile store
pub mod editor;
/// Edit modes and operation outcomes
pub mod mode;

pub use editor::EditorSession;
pub use mode::{DeleteOutcome, EditMode, EditOutcome, LoadStatus};
