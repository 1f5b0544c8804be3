//! Stateless helpers for the Faderdeck mixer front-end widgets.

pub mod color;
pub mod tree;

pub use color::Color;
pub use tree::{find_descendant, UiNode};
