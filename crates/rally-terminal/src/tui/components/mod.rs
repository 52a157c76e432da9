//! Reusable UI widgets shared by the screens.

mod empty_state;
mod key_hints;
mod tab_row;

pub use empty_state::EmptyState;
pub use key_hints::KeyHintsBar;
pub use tab_row::RallyTabRow;
