//! Markdown rendering.
//!
//! Pure string builders; callers decide where the output goes.

pub mod index;
pub mod readme;

pub use index::render_examples_doc;
pub use readme::render_example_readme;
