use crate::nfa::NodeId;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;

/// Identity of a deterministic node within its owning graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DfaId(pub(crate) u32);

impl fmt::Display for DfaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A deterministic state: at most one destination per symbol, no epsilon.
///
/// Keeps the exact set of NFA nodes it stands for; within one graph no two
/// nodes carry the same set.
#[derive(Debug, Clone)]
pub struct Node<T> {
    id: DfaId,
    states: BTreeSet<NodeId>,
    connections: HashMap<T, DfaId>,
}

impl<T> Node<T> {
    pub(crate) fn new(id: DfaId, states: BTreeSet<NodeId>) -> Self {
        Self {
            id,
            states,
            connections: HashMap::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> DfaId {
        self.id
    }

    /// The NFA nodes this deterministic node stands for.
    #[must_use]
    pub fn states(&self) -> &BTreeSet<NodeId> {
        &self.states
    }

    /// Whether `state` is among the represented NFA nodes.
    #[must_use]
    pub fn contains(&self, state: NodeId) -> bool {
        self.states.contains(&state)
    }
}

impl<T: Eq + Hash> Node<T> {
    /// Record the single `destination` under `label`.
    ///
    /// Determinism is a structural invariant: a second edge under the same
    /// label is a defect in construction, so it panics rather than
    /// overwriting.
    pub(crate) fn add_connection(&mut self, label: T, destination: DfaId) {
        match self.connections.entry(label) {
            Entry::Vacant(entry) => {
                entry.insert(destination);
            }
            Entry::Occupied(_) => {
                panic!("node {} already has a transition under this label", self.id)
            }
        }
    }

    /// The destination under `label`, if the node has one.
    #[must_use]
    pub fn next(&self, label: &T) -> Option<DfaId> {
        self.connections.get(label).copied()
    }

    /// Every edge as a `(label, destination)` pair.
    pub fn connections(&self) -> impl Iterator<Item = (&T, DfaId)> {
        self.connections.iter().map(|(label, &id)| (label, id))
    }
}
