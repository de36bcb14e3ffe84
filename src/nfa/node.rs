use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Identity of a node within its owning graph.
///
/// Ids are minted by a [`Builder`](super::Builder) and stay valid for the
/// lifetime of the owning graph, however often the graph itself moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single automaton state and its outgoing edges.
///
/// The transition table maps a label to the *set* of destinations reachable
/// under it; the `None` label is epsilon. Destinations are ids, never owned
/// nodes.
#[derive(Debug, Clone)]
pub struct Node<T> {
    id: NodeId,
    connections: HashMap<Option<T>, HashSet<NodeId>>,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            connections: HashMap::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl<T: Eq + Hash> Node<T> {
    /// Record `destination` under `label`. Parallel edges accumulate.
    pub(crate) fn add_connection(&mut self, label: Option<T>, destination: NodeId) {
        self.connections.entry(label).or_default().insert(destination);
    }

    /// The destinations reachable from this node under `label`; empty if none.
    pub fn next(&self, label: &Option<T>) -> impl Iterator<Item = NodeId> {
        self.connections.get(label).into_iter().flatten().copied()
    }

    /// The concrete (non-epsilon) labels with at least one outgoing edge.
    pub fn labels(&self) -> impl Iterator<Item = &T> {
        self.connections.keys().flatten()
    }

    /// Every edge as a `(label, destination)` pair.
    pub fn connections(&self) -> impl Iterator<Item = (Option<&T>, NodeId)> {
        self.connections
            .iter()
            .flat_map(|(label, set)| set.iter().map(move |&id| (label.as_ref(), id)))
    }
}
