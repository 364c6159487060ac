//! Block dispatch and render-tree production.
//!
//! A single synchronous pass over read-only input: no I/O, no shared state,
//! no failure channel. Every malformed input degrades to a local placeholder
//! or empty output (see [`placeholders`]), and output order mirrors input
//! order at every level.

mod dispatch;
mod kinds;
pub(crate) mod placeholders;
mod tree;

pub use dispatch::{MAX_NESTING_DEPTH, render_block, render_blocks};
pub use tree::{Element, RenderNode, RenderTree};

pub(crate) use dispatch::render_block_at;
