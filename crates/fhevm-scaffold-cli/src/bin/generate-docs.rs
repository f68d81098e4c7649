use std::path::PathBuf;
use std::process;

use clap::Parser;
use fhevm_scaffold::docs;

/// Argument parser for `generate-docs`.
#[derive(Parser)]
#[command(
    name = "generate-docs",
    about = "Generate markdown documentation from contract and test sources",
    version
)]
struct Cli {
    /// Document every example in the registry
    #[arg(long)]
    all: bool,

    /// Root of the example source tree
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output directory for the generated documentation
    #[arg(long, default_value = "docs")]
    out: PathBuf,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let report = if cli.all {
        docs::generate_docs_all(&cli.root, &cli.out)?
    } else {
        let target = docs::default_target().ok_or("default docs target missing from registry")?;
        docs::generate_docs(&target, &cli.root, &cli.out)?
    };

    for w in &report.warnings {
        eprintln!("{w}");
    }

    println!(
        "Generated {} files in {}:",
        report.files.len(),
        report.out_dir.display()
    );
    for f in &report.files {
        println!("  {} ({} bytes)", f.relative_path.display(), f.bytes);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
