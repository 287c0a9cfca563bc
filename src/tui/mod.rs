//! Interactive prompt picker
mod app;
mod events;
mod layout;
mod rendering;
mod selection;
mod terminal;
mod width;

pub use app::run_interactive;
pub use events::Action;
pub use layout::Viewport;
pub use selection::{ListRow, MAX_FILTER_CHARS, Mode, Selection};
