pub mod colors;
pub mod list;
pub mod selection;
pub mod track;

pub use list::{ListEntry, filter_tracks, filtered_entries, list_entries};
pub use selection::{FlyTo, Selection, SelectionChange, SelectionError, SelectionSource};
pub use track::*;
