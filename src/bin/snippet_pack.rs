//! Packages a directory tree of snippet sources into a VS Code snippets
//! file, one autocompletion entry per source file.

use anyhow::{Context, Result};
use clap::Parser;

use quiver::snippets::{scan::scan_directory, RustDialect};

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Directory tree holding the snippet sources.
    input_dir: PathBuf,
    /// Directory the snippets file is written into; created if missing.
    output_dir: PathBuf,
    /// File name of the generated snippets file.
    #[clap(long, default_value = "vscode.rust.json")]
    out_name: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let set = scan_directory(&args.input_dir, &RustDialect)
        .with_context(|| format!("failed to scan {}", args.input_dir.display()))?;

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;

    let out_path = args.output_dir.join(&args.out_name);
    let json = set.to_vscode_json().context("failed to render the snippets JSON")?;
    fs::write(&out_path, json).with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("+ {}@{}", out_path.display(), set.len());
    Ok(())
}
