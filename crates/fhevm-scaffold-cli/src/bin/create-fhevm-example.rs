use std::path::PathBuf;
use std::process;

use clap::Parser;
use fhevm_scaffold::project::generate_project;
use fhevm_scaffold::registry;

/// Argument parser for `create-fhevm-example`.
#[derive(Parser)]
#[command(
    name = "create-fhevm-example",
    about = "Scaffold a standalone FHEVM example project",
    version
)]
struct Cli {
    /// Example to scaffold; omit to list available examples
    key: Option<String>,

    /// Output directory (default: ./output/fhevm-<KEY>)
    output: Option<PathBuf>,

    /// Root of the example source tree
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

/// Print the example registry listing.
fn list_examples() {
    println!("Available examples:");
    for e in registry::examples() {
        println!("  {:<18} {}  [{}]", e.key, e.description, e.category);
    }
    println!();
    println!("Usage: create-fhevm-example <EXAMPLE> [OUTPUT]");
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(key) = cli.key else {
        list_examples();
        return Ok(());
    };

    let dest = cli
        .output
        .unwrap_or_else(|| PathBuf::from("output").join(registry::package_name(&key)));

    let report = generate_project(&key, &cli.root, &dest)?;

    println!(
        "Scaffolded {} ({} files) in {}",
        report.contract_name,
        report.files.len(),
        report.destination.display()
    );
    println!();
    println!("Next steps:");
    println!("  cd {}", report.destination.display());
    println!("  npm install");
    println!("  npx hardhat test");

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
