use std::fs;

use clap::{Parser, ValueEnum};
use munchr::{Automaton, Dfa};
use thiserror::Error;

mod cli;
use cli::{Cli, Cmd, OptsDot, OptsScan, Sample};

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to read the input file: {0}")]
    Input(#[from] std::io::Error),
    #[error("Nothing to scan; pass inputs as arguments or via --file")]
    NoInputs,
}

fn main() {
    if let Err(err) = entry() {
        eprintln!("{err}");
        std::process::exit(1)
    }
}

fn entry() -> Result<(), Error> {
    match Cli::parse().cmd {
        Cmd::Scan(opts) => scan(opts),
        Cmd::Samples => {
            samples();
            Ok(())
        }
        Cmd::Dot(opts) => {
            dot(opts);
            Ok(())
        }
    }
}

fn scan(opts: OptsScan) -> Result<(), Error> {
    let mut inputs = opts.inputs;
    if let Some(filename) = &opts.file {
        inputs.extend(fs::read_to_string(filename)?.lines().map(str::to_owned));
    }
    if inputs.is_empty() {
        return Err(Error::NoInputs);
    }

    let nfa = opts.sample.build();
    if opts.dfa {
        report(&Dfa::from(&nfa), &inputs);
    } else {
        report(&nfa, &inputs);
    }
    Ok(())
}

fn report<A: Automaton<Symbol = char>>(automaton: &A, inputs: &[String]) {
    let mut f = std::io::stdout().lock();
    for input in inputs {
        use std::io::Write;
        let _ = match automaton.longest_match(input.chars()) {
            Some(length) => writeln!(f, "{input:?}: {length}"),
            None => writeln!(f, "{input:?}: no match"),
        };
    }
}

fn samples() {
    for sample in Sample::value_variants() {
        let value = sample
            .to_possible_value()
            .expect("samples are never skipped");
        let help = value.get_help().map(ToString::to_string).unwrap_or_default();
        println!("{:8} {help}", value.get_name());
    }
}

fn dot(opts: OptsDot) {
    let nfa = opts.sample.build();
    if opts.dfa {
        print!("{}", Dfa::from(&nfa).to_dot());
    } else {
        print!("{}", nfa.to_dot());
    }
}
