use crate::dijkstra::ShortestPaths;
use routeplan_core::Leg;
use tracing::warn;

/// Walks predecessor links back from `destination` and returns the legs in
/// travel order.
///
/// Each leg reports the weight recorded when its edge was relaxed, which is
/// the weight that produced the minimal distance even when several edges with
/// different costs join the same pair. Returns no legs when the destination is
/// the source itself, unreached, or unknown.
pub fn reconstruct(paths: &ShortestPaths, destination: &str) -> Vec<Leg> {
    if !paths.is_reached(destination) {
        return Vec::new();
    }

    let mut legs = Vec::new();
    let mut current = destination;

    while let Some(hop) = paths.get(current).and_then(|r| r.predecessor.as_ref()) {
        // A chain longer than the node count can only be a cycle.
        if legs.len() >= paths.len() {
            warn!(
                "Predecessor chain from '{}' to '{}' does not terminate",
                paths.source(),
                destination
            );
            return Vec::new();
        }
        legs.push(Leg::new(hop.node.as_str(), current, hop.weight));
        current = &hop.node;
    }

    legs.reverse();
    legs
}

impl ShortestPaths {
    /// Convenience wrapper around [`reconstruct`].
    pub fn route_to(&self, destination: &str) -> Vec<Leg> {
        reconstruct(self, destination)
    }
}
