mod node;
#[cfg(test)]
mod test;

pub use node::{DfaId, Node};

use crate::nfa::{Nfa, NodeId};
use crate::scan::Automaton;
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};
use std::fmt::{self, Write as _};
use std::hash::Hash;

/// A deterministic finite automaton accepting the same language as the NFA
/// it was built from.
///
/// Immutable once constructed, and holds no link back to the source graph.
/// A node accepts iff the subset it stands for contains the source `end`.
#[derive(Debug, Clone)]
pub struct Dfa<T> {
    nodes: HashMap<DfaId, Node<T>>,
    start: DfaId,
    /// The source NFA's accepting identity.
    end: NodeId,
}

impl<T> Dfa<T> {
    #[must_use]
    pub fn start(&self) -> DfaId {
        self.start
    }

    /// Number of discovered states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: DfaId) -> &Node<T> {
        self.nodes
            .get(&id)
            .expect("edges only name nodes owned by this graph")
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.values()
    }
}

/// Subset construction.
///
/// Discovered subsets are interned in a table keyed by the subset itself, so
/// revisiting one reuses its node instead of re-exploring: at most
/// `2^nfa.len()` subsets exist and each is explored once. Labels are walked
/// in sorted order, which pins down the discovery order (and so the ids) for
/// a given source graph.
impl<T: Eq + Hash + Clone + Ord> From<&Nfa<T>> for Dfa<T> {
    fn from(nfa: &Nfa<T>) -> Self {
        let mut next = 0u32;
        let mut allot = |subset: BTreeSet<NodeId>,
                         nodes: &mut HashMap<DfaId, Node<T>>,
                         pending: &mut Vec<DfaId>| {
            let id = DfaId(next);
            next += 1;
            nodes.insert(id, Node::new(id, subset));
            pending.push(id);
            id
        };

        let mut nodes = HashMap::new();
        let mut pending = Vec::new();
        let mut discovered: HashMap<BTreeSet<NodeId>, DfaId> = HashMap::new();

        let start_subset: BTreeSet<_> = nfa.epsilon_closure(nfa.start()).into_iter().collect();
        let start = allot(start_subset.clone(), &mut nodes, &mut pending);
        discovered.insert(start_subset, start);

        while let Some(current) = pending.pop() {
            let labels: Vec<T> = nodes[&current]
                .states()
                .iter()
                .flat_map(|&state| nfa.node(state).labels())
                .unique()
                .sorted()
                .cloned()
                .collect();

            for label in labels {
                let some_label = Some(label.clone());
                let moved = nodes[&current]
                    .states()
                    .iter()
                    .flat_map(|&state| nfa.node(state).next(&some_label));
                let subset: BTreeSet<_> = nfa.close(moved).into_iter().collect();

                let destination = match discovered.get(&subset) {
                    Some(&existing) => existing,
                    None => {
                        let id = allot(subset.clone(), &mut nodes, &mut pending);
                        discovered.insert(subset, id);
                        id
                    }
                };
                nodes
                    .get_mut(&current)
                    .expect("worklist ids were interned at discovery")
                    .add_connection(label, destination);
            }
        }

        Self {
            nodes,
            start,
            end: nfa.end(),
        }
    }
}

impl<T: Eq + Hash> Automaton for Dfa<T> {
    type Symbol = T;
    type Config = DfaId;

    fn start_config(&self) -> Self::Config {
        self.start
    }

    fn step(&self, config: &Self::Config, symbol: &T) -> Option<Self::Config> {
        self.node(*config).next(symbol)
    }

    fn accepts(&self, config: &Self::Config) -> bool {
        self.node(*config).contains(self.end)
    }
}

impl<T: Eq + Hash + fmt::Display> Dfa<T> {
    /// Graphviz rendering of the graph, stable across runs.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph {\n  rankdir=LR;\n  node [shape=circle];\n");
        let _ = writeln!(out, "  start [shape=none label=\"\"];");
        let _ = writeln!(out, "  start -> d{};", self.start);
        for node in self.nodes.values().sorted_by_key(|node| node.id()) {
            if node.contains(self.end) {
                let _ = writeln!(out, "  d{} [shape=doublecircle];", node.id());
            }
            for (label, destination) in node
                .connections()
                .map(|(label, destination)| (label.to_string(), destination))
                .sorted()
            {
                let _ = writeln!(
                    out,
                    "  d{} -> d{destination} [label=\"{label}\"];",
                    node.id()
                );
            }
        }
        out.push_str("}\n");
        out
    }
}
