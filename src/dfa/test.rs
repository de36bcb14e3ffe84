use super::*;
use crate::nfa::Builder;
use std::collections::HashSet;

fn ab_star() -> Nfa<char> {
    let mut builder = Builder::new();
    builder
        .symbol('a')
        .concat(builder.symbol('b'))
        .zero_or_more()
}

#[test]
fn accepting_nodes_contain_the_nfa_end() {
    let mut builder = Builder::new();
    let nfa = builder.symbol('a');
    let dfa = Dfa::from(&nfa);

    assert!(!dfa.node(dfa.start()).contains(nfa.end()));
    let after_a = dfa
        .node(dfa.start())
        .next(&'a')
        .expect("the start node reads 'a'");
    assert!(dfa.node(after_a).contains(nfa.end()));
}

#[test]
fn nodes_are_deterministic() {
    let mut builder = Builder::new();
    // Two 'a' edges out of one start node collapse into a single transition.
    let nfa = builder.symbol('a').either(builder.symbol('a'));
    let dfa = Dfa::from(&nfa);

    for node in dfa.nodes() {
        let labels: Vec<_> = node.connections().map(|(label, _)| label).collect();
        assert_eq!(labels.len(), labels.iter().unique().count());
    }
    assert_eq!(dfa.longest_match("a".chars()), Some(1));
}

#[test]
fn revisited_subsets_are_reused() {
    // (ab)* folds back into its own start subset on 'b'.
    let dfa = Dfa::from(&ab_star());
    assert_eq!(dfa.len(), 2);

    let start = dfa.node(dfa.start());
    let middle = start.next(&'a').expect("start reads 'a'");
    assert_eq!(dfa.node(middle).next(&'b'), Some(dfa.start()));
}

#[test]
fn no_two_nodes_share_a_subset() {
    let mut builder = Builder::new();
    let nfa = builder
        .symbol('a')
        .either(builder.symbol('b'))
        .zero_or_more()
        .concat(builder.symbol('c'));
    let dfa = Dfa::from(&nfa);

    let subsets: HashSet<_> = dfa.nodes().map(|node| node.states().clone()).collect();
    assert_eq!(subsets.len(), dfa.len());
}

#[test]
fn epsilon_graph_converts_to_a_single_accepting_node() {
    let mut builder = Builder::new();
    let nfa = builder.epsilon::<char>();
    let dfa = Dfa::from(&nfa);

    assert_eq!(dfa.len(), 1);
    assert_eq!(dfa.longest_match("anything".chars()), Some(0));
    assert_eq!(dfa.longest_match("".chars()), Some(0));
}

#[test]
fn equivalent_to_the_source_nfa() {
    let inputs = [
        "", "a", "b", "c", "ab", "ba", "abc", "aab", "abab", "ababc", "abba", "cab",
    ];
    let mut builder = Builder::new();
    let graphs = [
        ab_star(),
        builder.symbol('a').concat(builder.symbol('b')),
        builder.symbol('a').either(builder.symbol('b')),
        builder.one_of(['a', 'b', 'c']).zero_or_more(),
    ];

    for nfa in &graphs {
        let dfa = Dfa::from(nfa);
        for input in inputs {
            assert_eq!(
                nfa.longest_match(input.chars()),
                dfa.longest_match(input.chars()),
                "representations disagree on {input:?}"
            );
        }
    }
}

#[test]
fn construction_is_deterministic() {
    let first = Dfa::from(&ab_star());
    let second = Dfa::from(&ab_star());
    assert_eq!(first.to_dot(), second.to_dot());
}

#[test]
#[should_panic(expected = "already has a transition")]
fn duplicate_transitions_are_a_defect() {
    let mut node = Node::new(DfaId(0), BTreeSet::new());
    node.add_connection('a', DfaId(1));
    node.add_connection('a', DfaId(2));
}
