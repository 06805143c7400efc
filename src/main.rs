use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use containers::BinarySearchTree;

/// Opens a file and builds a binary search tree, optionally from the integers it contains.
#[derive(Parser)]
#[command(name = "containers", version)]
struct Cli {
    /// File to open.
    #[arg(default_value = ".txt")]
    path: PathBuf,

    /// Insert every whitespace separated integer in the file and print the traversals.
    #[arg(long)]
    load: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let file = File::open(&cli.path)
        .with_context(|| format!("could not open {}", cli.path.display()))?;

    let mut tree = BinarySearchTree::new();
    log::info!("opened {}", cli.path.display());
    if !cli.load {
        return Ok(());
    }

    let contents = io::read_to_string(file)
        .with_context(|| format!("could not read {}", cli.path.display()))?;
    for word in contents.split_whitespace() {
        let value: i64 = word
            .parse()
            .with_context(|| format!("{:?} in {} is not an integer", word, cli.path.display()))?;
        tree.insert(value);
    }

    println!("in-order:   {}", join(tree.in_order()));
    println!("pre-order:  {}", join(tree.pre_order()));
    println!("post-order: {}", join(tree.post_order()));
    Ok(())
}

fn join<'a>(values: impl Iterator<Item = &'a i64>) -> String {
    values
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
