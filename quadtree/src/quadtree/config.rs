#[derive(Debug, Clone)]
pub struct Config {
    /// Initial arena reservation, in nodes.
    pub pool_size: usize,
    /// Object slots per node before it subdivides.
    pub node_capacity: usize,
    /// Nodes at this depth stop subdividing and absorb overflow directly.
    pub max_depth: usize,
    /// Nodes whose quadrants would be narrower or shorter than this stop
    /// subdividing and absorb overflow directly.
    pub min_size: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            // With a max depth of 8 a fully split tree holds far more nodes
            // than any realistic population needs; reserve a modest slice.
            pool_size: 4000,
            node_capacity: 4,
            max_depth: 8,
            min_size: 1.0,
        }
    }
}
