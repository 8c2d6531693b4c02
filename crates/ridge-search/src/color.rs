//! Per-vertex traversal state.

/// Where a vertex stands in a breadth-first traversal.
///
/// Every vertex starts `Unvisited`. Discovery moves it to `Frontier` (it
/// has a distance and sits in the work queue); dequeuing moves it to
/// `Finished`. There are no other transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Not yet discovered.
    #[default]
    Unvisited,
    /// Discovered and queued.
    Frontier,
    /// Dequeued and expanded.
    Finished,
}

impl Color {
    /// `true` once the vertex has been discovered.
    pub fn is_reached(self) -> bool {
        self != Self::Unvisited
    }
}
