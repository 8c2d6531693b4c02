//! Dense distance storage.

/// Unit-weight distances indexed by dense vertex index.
///
/// Unreached vertices hold a sentinel equal to the vertex count, which
/// exceeds any simple-path length in the graph. The sentinel never leaks:
/// [`get`](Self::get) reports it as `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMap {
    raw: Vec<usize>,
}

impl DistanceMap {
    /// A map of `len` vertices, all unreached.
    pub fn new(len: usize) -> Self {
        Self { raw: vec![len; len] }
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// `true` if the map covers no vertices.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The sentinel marking an unreached vertex.
    pub fn unreached(&self) -> usize {
        self.raw.len()
    }

    /// Distance of the vertex with dense index `index`, if reached.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.raw
            .get(index)
            .copied()
            .filter(|&d| d != self.unreached())
    }

    pub(crate) fn set(&mut self, index: usize, distance: usize) {
        debug_assert!(distance < self.raw.len(), "distance {distance} is not a path length");
        self.raw[index] = distance;
    }

    /// Distances in vertex-index order, `None` for unreached vertices.
    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        let unreached = self.unreached();
        self.raw.iter().map(move |&d| (d != unreached).then_some(d))
    }

    /// Number of reached vertices.
    pub fn reached_count(&self) -> usize {
        self.iter().flatten().count()
    }

    /// Largest finite distance, or `None` if nothing was reached.
    pub fn max(&self) -> Option<usize> {
        self.iter().flatten().max()
    }
}
