//! Squaredle Solver CLI
//!
//! Loads a word list, reads a grid from the command line or an interactive
//! prompt, and prints every word found, shortest first.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use squaredle_solver::{
    load_word_list, sorted_by_length, Grid, SearchConfig, Solver, Trie, MIN_WORD_LENGTH,
};

const GRID_PROMPT: &str = "Enter squaredle grid:

    -> Separate rows by \"-\"
    -> Denote greyed out cells with a space \" \"
    -> e.g. a p n-ml so-rsioi-od zt-n e a

Grid: ";

#[derive(Debug, Parser)]
#[command(name = "squaredle", version, about = "Find every word in a Squaredle grid")]
struct Args {
    /// Word list, one word per line or a quoted comma-separated list
    #[arg(short, long, value_name = "FILE")]
    words: PathBuf,

    /// Grid with rows separated by "-"; prompts for one if omitted
    #[arg(short, long, value_name = "ROWS")]
    grid: Option<String>,

    /// Shortest word to report
    #[arg(short = 'm', long, default_value_t = MIN_WORD_LENGTH)]
    min_length: usize,

    /// Search from every start cell in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Give up after this many cell visits
    #[arg(long, value_name = "N", conflicts_with = "parallel")]
    max_visits: Option<u64>,

    /// Log load and search statistics
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Prompt until the user confirms a grid
fn read_grid() -> Result<Grid> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", GRID_PROMPT);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("no grid entered");
        }

        let grid = match Grid::parse(&line) {
            Ok(grid) => grid,
            Err(e) => {
                println!("\n{}\n", e);
                continue;
            }
        };

        println!("\nInput Squaredle:\n");
        for row in grid.to_string().lines() {
            println!("    {}", row);
        }

        print!("\nENTER to continue, anything else to retry: ");
        stdout.flush()?;

        let mut answer = String::new();
        stdin.lock().read_line(&mut answer)?;
        if answer.trim_end_matches(['\r', '\n']).is_empty() {
            println!();
            return Ok(grid);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = SearchConfig::new(args.min_length)?;
    let words = load_word_list(&args.words)
        .with_context(|| format!("failed to load {}", args.words.display()))?;
    let trie = Trie::build(words);

    let grid = match &args.grid {
        Some(text) => Grid::parse(text).context("invalid --grid")?,
        None => read_grid()?,
    };

    let solver = Solver::new(&trie, grid, config);
    let start = Instant::now();
    let found = match args.max_visits {
        Some(limit) => solver.solve_within(limit)?,
        None if args.parallel => solver.solve_parallel(),
        None => solver.solve(),
    };
    log::info!("search took {:.2?}", start.elapsed());

    for word in sorted_by_length(&found) {
        println!("{}", word);
    }
    println!();
    println!("Found {} words.", found.len());

    Ok(())
}
