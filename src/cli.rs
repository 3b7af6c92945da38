use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::core::WalkOptions;

#[derive(Parser, Debug)]
#[command(name = "gft")]
#[command(about = "Generate an annotated file tree of a directory", long_about = None)]
pub struct Cli {
    /// Root path of the tree
    #[arg(short = 'n', long = "name", default_value = ".")]
    pub name: PathBuf,

    /// Maximum depth to descend (positive)
    #[arg(short = 'd', long = "depth")]
    pub depth: Option<usize>,

    /// Only show directories
    #[arg(short = 'o', long = "only_dir")]
    pub only_dir: bool,

    /// Regex excluding entries whose name it matches from the start (repeatable)
    #[arg(short = 'e', long = "exclude")]
    pub exclude: Vec<String>,

    /// Save the tree to this file as a fenced code block
    #[arg(short = 's', long = "save")]
    pub save: Option<PathBuf>,

    /// Do not print the tree (passing the flag turns printing off)
    #[arg(short = 'p', long = "print", action = ArgAction::SetFalse)]
    pub print: bool,

    /// Sort entries by name for deterministic output
    #[arg(long = "sort")]
    pub sort: bool,
}

impl Cli {
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            max_depth: self.depth,
            dirs_only: self.only_dir,
            exclude: self.exclude.clone(),
            sort_entries: self.sort,
        }
    }
}
