pub mod error;
pub mod quadtree;

pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, NodeRef, QuadTree, QuadTreeObject};
