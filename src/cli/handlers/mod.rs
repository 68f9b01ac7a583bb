//! Command handlers for the CLI.

mod completions;
mod find;


pub use completions::handle_completions;
pub use find::handle_find;

#[cfg(test)]
pub(crate) use find::handle_find_impl;
