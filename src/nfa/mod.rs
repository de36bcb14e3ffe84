mod node;

pub use node::{Node, NodeId};

use crate::scan::Automaton;
use itertools::Itertools;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Write as _};
use std::hash::Hash;

/// Mints [`NodeId`]s for the graphs built through it.
///
/// Graphs may only be combined when their nodes came from the same builder;
/// separate builders hand out overlapping ids. Every builder starts from the
/// same state, so independent constructions are deterministic.
#[derive(Debug, Default)]
pub struct Builder {
    next: u32,
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn node<T>(&mut self) -> Node<T> {
        let id = NodeId(self.next);
        self.next += 1;
        Node::new(id)
    }

    /// The automaton accepting exactly the empty prefix.
    pub fn epsilon<T: Eq + Hash>(&mut self) -> Nfa<T> {
        Nfa::single(self.node())
    }

    /// The automaton accepting exactly one `accept` symbol.
    pub fn symbol<T: Eq + Hash>(&mut self, accept: T) -> Nfa<T> {
        let mut start = self.node();
        let end = self.node();
        start.add_connection(Some(accept), end.id());
        Nfa::pair(start, end)
    }

    /// The automaton accepting any single symbol out of `accept`.
    pub fn one_of<T: Eq + Hash>(&mut self, accept: impl IntoIterator<Item = T>) -> Nfa<T> {
        let mut start = self.node();
        let end = self.node();
        for symbol in accept {
            start.add_connection(Some(symbol), end.id());
        }
        Nfa::pair(start, end)
    }
}

/// A non-deterministic finite automaton over symbols `T`.
///
/// Owns every one of its nodes; `start` and `end` are members, and every
/// edge names a member. Combinators consume their operands, so a graph that
/// has been composed into a larger one is gone for good.
#[derive(Debug, Clone)]
pub struct Nfa<T> {
    nodes: HashMap<NodeId, Node<T>>,
    start: NodeId,
    end: NodeId,
}

impl<T> Nfa<T> {
    fn single(node: Node<T>) -> Self {
        let id = node.id();
        Self {
            nodes: HashMap::from([(id, node)]),
            start: id,
            end: id,
        }
    }

    fn pair(start: Node<T>, end: Node<T>) -> Self {
        let (s, e) = (start.id(), end.id());
        Self {
            nodes: HashMap::from([(s, start), (e, end)]),
            start: s,
            end: e,
        }
    }

    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// The single accepting node.
    #[must_use]
    pub fn end(&self) -> NodeId {
        self.end
    }

    /// Number of nodes owned by this graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes
            .get(&id)
            .expect("edges only name nodes owned by this graph")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes
            .get_mut(&id)
            .expect("edges only name nodes owned by this graph")
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.values()
    }

    /// Take ownership of every node of `other`.
    fn absorb(&mut self, other: Self) {
        debug_assert!(
            other.nodes.keys().all(|id| !self.nodes.contains_key(id)),
            "combined graphs must come from the same builder"
        );
        self.nodes.extend(other.nodes);
    }
}

impl<T: Eq + Hash> Nfa<T> {
    /// `self` followed by `other`.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        let (other_start, other_end) = (other.start, other.end);
        let end = self.end;
        self.absorb(other);
        self.node_mut(end).add_connection(None, other_start);
        self.end = other_end;
        self
    }

    /// Either `self` or `other` (alternation).
    #[must_use]
    pub fn either(mut self, other: Self) -> Self {
        let (other_start, other_end) = (other.start, other.end);
        let (start, end) = (self.start, self.end);
        self.absorb(other);
        self.node_mut(start).add_connection(None, other_start);
        self.node_mut(other_end).add_connection(None, end);
        self
    }

    /// Zero or more repetitions of `self`.
    #[must_use]
    pub fn zero_or_more(mut self) -> Self {
        let (start, end) = (self.start, self.end);
        self.node_mut(start).add_connection(None, end);
        self.node_mut(end).add_connection(None, start);
        self
    }

    /// Every node reachable from `of` through epsilon edges alone, `of`
    /// included. Cycle-safe: each node is visited at most once.
    #[must_use]
    pub fn epsilon_closure(&self, of: NodeId) -> HashSet<NodeId> {
        self.close([of])
    }

    /// Epsilon-close a whole frontier at once.
    pub(crate) fn close(&self, seeds: impl IntoIterator<Item = NodeId>) -> HashSet<NodeId> {
        let mut visited = HashSet::new();
        let mut stack: SmallVec<[NodeId; 16]> = seeds.into_iter().collect();
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            stack.extend(self.node(id).next(&None));
        }
        visited
    }
}

impl<T: Eq + Hash + Clone> Automaton for Nfa<T> {
    type Symbol = T;
    type Config = HashSet<NodeId>;

    fn start_config(&self) -> Self::Config {
        self.epsilon_closure(self.start)
    }

    fn step(&self, config: &Self::Config, symbol: &T) -> Option<Self::Config> {
        let label = Some(symbol.clone());
        let moved = config.iter().flat_map(|&id| self.node(id).next(&label));
        let next = self.close(moved);
        (!next.is_empty()).then_some(next)
    }

    fn accepts(&self, config: &Self::Config) -> bool {
        config.contains(&self.end)
    }
}

impl<T: Eq + Hash + fmt::Display> Nfa<T> {
    /// Graphviz rendering of the graph, stable across runs.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph {\n  rankdir=LR;\n  node [shape=circle];\n");
        let _ = writeln!(out, "  start [shape=none label=\"\"];");
        let _ = writeln!(out, "  start -> n{};", self.start);
        let _ = writeln!(out, "  n{} [shape=doublecircle];", self.end);
        for node in self.nodes.values().sorted_by_key(|node| node.id()) {
            for (label, destination) in node
                .connections()
                .map(|(label, destination)| (label.map(ToString::to_string), destination))
                .sorted()
            {
                let _ = match label {
                    Some(label) => writeln!(
                        out,
                        "  n{} -> n{destination} [label=\"{label}\"];",
                        node.id()
                    ),
                    None => writeln!(out, "  n{} -> n{destination} [style=dashed];", node.id()),
                };
            }
        }
        out.push_str("}\n");
        out
    }
}
