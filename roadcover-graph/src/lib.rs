//! Road network graph model for full-coverage route planning.

pub use self::digraph::{DiGraph, Edge, NodeId};
pub use self::errors::{GraphError, Result};

pub mod connect;

mod digraph;
mod errors;
