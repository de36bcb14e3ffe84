
/// The scanning contract shared by both automaton kinds.
///
/// A [`Config`](Automaton::Config) is everything the machine can be "in" at
/// once mid-scan: a single node for a deterministic graph, an epsilon-closed
/// node set for a non-deterministic one. Scanning is read-only, so one graph
/// can serve any number of concurrent scans.
pub trait Automaton {
    type Symbol;
    type Config;

    /// The configuration before any symbol is consumed.
    fn start_config(&self) -> Self::Config;

    /// Advance by one symbol, or `None` when the scan dies.
    fn step(&self, config: &Self::Config, symbol: &Self::Symbol) -> Option<Self::Config>;

    /// Whether `config` is accepting.
    fn accepts(&self, config: &Self::Config) -> bool;

    /// The number of symbols in the longest prefix of `input` this automaton
    /// accepts, or `None` when no prefix matches, the empty one included.
    ///
    /// Greedy: a later accepting prefix always replaces an earlier one.
    /// Single pass; the first dead step stops the scan and leaves the rest
    /// of `input` unconsumed.
    fn longest_match<I>(&self, input: I) -> Option<usize>
    where
        I: IntoIterator<Item = Self::Symbol>,
    {
        let mut config = self.start_config();
        let mut last_match = self.accepts(&config).then_some(0);
        for (consumed, symbol) in input.into_iter().enumerate() {
            let Some(next) = self.step(&config, &symbol) else {
                break;
            };
            config = next;
            if self.accepts(&config) {
                last_match = Some(consumed + 1);
            }
        }
        last_match
    }
}
