//! Core types: Note, Tag, Category

mod category;
mod note;
mod tag;

pub use category::Category;
pub use note::{Note, NoteBuilder, ParseNoteError};
pub use tag::{ParseTagError, Tag};
