//! # graphdoc protocol
//!
//! Wire types for code-property graph documents and the lenient envelope
//! decoder that turns raw JSON into a [`Graph`].
//!
//! ## Accepted shapes
//!
//! ```text
//! { "result": { "graph": { "nodes": [...], "relationships": [...] } } }   API response
//! { "graph": { "nodes": [...], "relationships": [...] } }                 bare result
//! { "nodes": [...], "relationships": [...] }                              bare graph
//! ```
//!
//! The decoder tries the shapes in that order and keeps the first one that
//! yields at least one node.

mod envelope;
mod error;
mod properties;
mod types;

pub use envelope::{decode_graph, DecodedGraph, EnvelopeShape, GraphStats};
pub use error::{ProtocolError, Result};
pub use properties::PropertyBag;
pub use types::{Graph, Node, Relationship};
