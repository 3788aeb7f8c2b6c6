//! Command dispatch

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::loader::{self, TaxonTable};

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Outline { file }) => _outline(file),
        Some(Commands::Names { file }) => _names(file),
        Some(Commands::Tree { file }) => _tree(file),
        Some(Commands::Stats { file }) => _stats(file),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

#[instrument]
fn _outline(file: &Path) -> Result<()> {
    debug!("file: {:?}", file);
    let tree = loader::load_tree(file)?;
    for line in tree.outline() {
        output::info(&line);
    }
    Ok(())
}

#[instrument]
fn _names(file: &Path) -> Result<()> {
    debug!("file: {:?}", file);
    let tree = loader::load_tree(file)?;
    for name in tree.scientific_names() {
        output::info(&name);
    }
    Ok(())
}

#[instrument]
fn _tree(file: &Path) -> Result<()> {
    debug!("file: {:?}", file);
    let tree = loader::load_tree(file)?;

    let label = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    let leaves: Vec<_> = tree
        .root()
        .children
        .iter()
        .map(output::to_display_tree)
        .collect();
    output::info(&Tree::new(label).with_leaves(leaves));
    Ok(())
}

#[instrument]
fn _stats(file: &Path) -> Result<()> {
    debug!("file: {:?}", file);
    let table = TaxonTable::load(file)?;
    let tree = table.build_tree()?;

    output::header(&file.display());
    output::stat("rows", table.rows().len());
    output::stat("categories", table.categories().join(", "));
    output::stat("depth", tree.depth());
    output::stat("nodes", tree.node_count());
    output::stat("leaves", tree.leaf_count());
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    io::Write::flush(&mut io::stdout()).context("flushing completions")?;
    Ok(())
}
