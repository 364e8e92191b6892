pub mod traits;
pub mod adjacency;
pub mod generators;

pub use traits::{EdgeVisitor, TraversalSource};
pub use adjacency::{AdjacencyList, GraphFile};
