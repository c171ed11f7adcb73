//! Vellum Core Types
//!
//! This crate provides the building blocks for programmatic SVG output:
//!
//! - **Attributes**: Typed attribute values and a deterministically ordered
//!   container ([`attributes`] module)
//! - **Tree**: An arena of elements with cycle-checked grafting ([`tree`] module)
//! - **Elements**: Factory methods for SVG elements ([`elements`] module)
//! - **Search**: Depth-first lookups by id and tag ([`search`] module)
//! - **Write**: Markup serialization ([`write`] module)
//! - **Colors**: CSS color validation, the named-color table and color
//!   sources ([`color`], [`palette`] modules)

pub mod attributes;
pub mod color;
pub mod elements;
pub mod error;
pub mod palette;
pub mod search;
pub mod tree;
pub mod write;

pub use attributes::{AttrValue, Attributes, MergeMode};
pub use error::TreeError;
pub use palette::{ColorCycle, ColorSource};
pub use tree::{Element, NodeId, Tree};
