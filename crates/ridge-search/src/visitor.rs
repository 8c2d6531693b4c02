//! Traversal callbacks.

/// Observer of a breadth-first traversal.
///
/// All methods default to no-ops, so implementors override only the
/// events they care about. Events for one vertex arrive in the order
/// `discover_vertex`, then (once dequeued) one `examine_edge` per
/// out-neighbour, then `finish_vertex`.
pub trait BfsVisitor<V> {
    /// `v` was discovered and queued. Called exactly once per reached
    /// vertex, sources included.
    fn discover_vertex(&mut self, _v: V) {}

    /// The edge `src -> dst` is being looked at, whether or not `dst` was
    /// already discovered.
    fn examine_edge(&mut self, _src: V, _dst: V) {}

    /// Every out-edge of `v` has been examined.
    fn finish_vertex(&mut self, _v: V) {}
}

/// A visitor that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullVisitor;

impl<V> BfsVisitor<V> for NullVisitor {}

impl<V, T: BfsVisitor<V> + ?Sized> BfsVisitor<V> for &mut T {
    fn discover_vertex(&mut self, v: V) {
        (**self).discover_vertex(v);
    }

    fn examine_edge(&mut self, src: V, dst: V) {
        (**self).examine_edge(src, dst);
    }

    fn finish_vertex(&mut self, v: V) {
        (**self).finish_vertex(v);
    }
}
