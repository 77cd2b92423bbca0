//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

/// Extract first-level privacy data-type categories from ontology.json
///
/// Without arguments, reads ontology.json next to the executable and writes
/// extracted_children.json and children_names.txt beside it.
#[derive(Parser, Debug)]
#[command(name = "privtax")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Directory holding ontology.json and the outputs (default: executable dir)
    #[arg(short = 'C', long, value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
