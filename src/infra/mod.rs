//! File I/O, frontmatter parsing, and external processes

mod editor;
mod frontmatter;
mod fs;
mod pager;

pub use editor::{EditorError, EditorLauncher, ProcessEditor};
pub use frontmatter::{ParseError, ParsedNote, parse};
pub use fs::{FsError, collect_categories, load_note};
pub use pager::{PagerError, Sink, run_pager};
