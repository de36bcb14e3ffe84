use clap::{Args, Parser, Subcommand, ValueEnum};
use indoc::indoc;
use munchr::{Builder, Nfa};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = indoc! {"
    Assemble one of the built-in sample automata and scan inputs for the
    longest accepted prefix (maximal munch). Each scan prints the number of
    symbols matched, or `no match` when not even the empty prefix is
    accepted."})]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Scan inputs for their longest accepted prefix.
    Scan(OptsScan),
    /// List the built-in sample automata.
    Samples,
    /// Emit a Graphviz rendering of a sample automaton.
    Dot(OptsDot),
}

#[derive(Debug, Args)]
pub struct OptsScan {
    /// Sample automaton to scan with.
    #[arg(value_enum)]
    pub sample: Sample,

    /// Inputs to scan.
    pub inputs: Vec<String>,

    /// Read additional inputs from a file, one per line.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Convert to a deterministic automaton first and scan with that.
    #[arg(short, long)]
    pub dfa: bool,
}

#[derive(Debug, Args)]
pub struct OptsDot {
    /// Sample automaton to render.
    #[arg(value_enum)]
    pub sample: Sample,

    /// Render the subset-constructed DFA instead of the NFA.
    #[arg(short, long)]
    pub dfa: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// The word `ab`.
    Ab,
    /// A single `a` or `b`.
    AOrB,
    /// Zero or more repetitions of `ab`.
    AbStar,
    /// An identifier: a lowercase letter, then letters or digits.
    Ident,
    /// A run of digits.
    Number,
}

impl Sample {
    pub fn build(self) -> Nfa<char> {
        let mut builder = Builder::new();
        match self {
            Self::Ab => builder.symbol('a').concat(builder.symbol('b')),
            Self::AOrB => builder.symbol('a').either(builder.symbol('b')),
            Self::AbStar => builder
                .symbol('a')
                .concat(builder.symbol('b'))
                .zero_or_more(),
            Self::Ident => {
                let tail = builder.one_of(('a'..='z').chain('0'..='9')).zero_or_more();
                builder.one_of('a'..='z').concat(tail)
            }
            Self::Number => {
                let tail = builder.one_of('0'..='9').zero_or_more();
                builder.one_of('0'..='9').concat(tail)
            }
        }
    }
}
