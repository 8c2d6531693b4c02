//! Command-line arguments, run configuration, and the solve loop.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use ridge_puzzles::{solve, Part, Puzzle};
use std::fmt;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

/// Puzzle names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PuzzleArg {
    /// fewest steps up a letter heightmap
    #[value(alias("day12"))]
    HillClimbing,
    /// surface area of a droplet of unit cubes
    #[value(alias("day18"))]
    LavaDroplet,
}

impl From<PuzzleArg> for Puzzle {
    fn from(arg: PuzzleArg) -> Self {
        match arg {
            PuzzleArg::HillClimbing => Puzzle::HillClimbing,
            PuzzleArg::LavaDroplet => Puzzle::LavaDroplet,
        }
    }
}

/// Part selectors accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PartArg {
    /// the first question
    #[value(alias("1"))]
    One,
    /// the second question
    #[value(alias("2"))]
    Two,
}

impl From<PartArg> for Part {
    fn from(arg: PartArg) -> Self {
        match arg {
            PartArg::One => Part::One,
            PartArg::Two => Part::Two,
        }
    }
}

/// Raw command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "ridge", version, long_about = None)]
#[command(about = "Answer grid puzzles with breadth-first search")]
pub struct Args {
    /// Puzzle input file; reads stdin if unset or set to '-'
    pub input: Option<PathBuf>,
    /// Which puzzle the input belongs to
    #[arg(short = 'P', long, value_enum, default_value_t = PuzzleArg::HillClimbing)]
    pub puzzle: PuzzleArg,
    /// Which part of the puzzle to answer
    #[arg(short, long, value_enum, default_value_t = PartArg::One)]
    pub part: PartArg,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where puzzle input is read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    #[default]
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Interpret an optional path argument; absent or `-` means stdin.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }

    /// Read the whole input as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read standard input")?;
                Ok(text)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Validated settings for one run.
///
/// Defaults: hill climbing, part one, standard input, warnings only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Puzzle to solve.
    pub puzzle: Puzzle,
    /// Part to answer.
    pub part: Part,
    /// Input location.
    pub input: InputSource,
    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            puzzle: Puzzle::HillClimbing,
            part: Part::One,
            input: InputSource::Stdin,
            verbosity: 0,
        }
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            puzzle: args.puzzle.into(),
            part: args.part.into(),
            input: InputSource::from_arg(args.input),
            verbosity: args.verbose,
        }
    }
}

/// Answer the configured puzzle for already-read input text.
///
/// The puzzle error stays in the chain beneath a context naming the run.
pub fn answer(config: &RunConfig, text: &str) -> Result<usize> {
    solve(config.puzzle, config.part, text).with_context(|| {
        format!(
            "{} part {} failed for {}",
            config.puzzle, config.part, config.input
        )
    })
}

/// Read the configured input, solve it, and write the answer line to `out`.
///
/// Nothing is written unless an answer was found.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<usize> {
    let text = config.input.read_to_string()?;
    info!(
        puzzle = %config.puzzle,
        part = %config.part,
        input = %config.input,
        bytes = text.len(),
        "solving"
    );
    let answer = answer(config, &text)?;
    writeln!(out, "{answer}").context("failed to write answer")?;
    Ok(answer)
}
