use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use gen_file_tree::cli::Cli;
use gen_file_tree::fs::RealFileSystem;
use gen_file_tree::save::{SaveOutcome, fence, save};
use gen_file_tree::{logging, render_tree, walk_dir};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gft: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    debug!(?cli, "starting");
    let mut tree = walk_dir(&RealFileSystem, &cli.name, &cli.walk_options())
        .await
        .with_context(|| format!("cannot build tree for {}", cli.name.display()))?;
    let text = fence(&render_tree(&mut tree)?);

    if cli.print {
        println!("{text}");
    }

    if let Some(path) = &cli.save {
        let stdin = io::stdin();
        let outcome = save(path, &text, &mut stdin.lock(), &mut io::stdout())?;
        if outcome == SaveOutcome::Declined {
            return Ok(());
        }
    }

    println!("Complete!");
    Ok(())
}
