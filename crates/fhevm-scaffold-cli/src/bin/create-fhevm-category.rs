use std::path::PathBuf;
use std::process;

use clap::Parser;
use fhevm_scaffold::category::generate_category;
use fhevm_scaffold::registry;

/// Argument parser for `create-fhevm-category`.
#[derive(Parser)]
#[command(
    name = "create-fhevm-category",
    about = "Scaffold a project bundling every example of a category",
    version
)]
struct Cli {
    /// Category to scaffold; omit to list available categories
    key: Option<String>,

    /// Output directory (default: ./output/fhevm-<KEY>-examples)
    output: Option<PathBuf>,

    /// Root of the example source tree
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

/// Print the category registry listing.
fn list_categories() {
    println!("Available categories:");
    for c in registry::categories() {
        println!("  {:<10} {}", c.key, c.description);
        println!("  {:<10} members: {}", "", c.members.join(", "));
    }
    println!();
    println!("Usage: create-fhevm-category <CATEGORY> [OUTPUT]");
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(key) = cli.key else {
        list_categories();
        return Ok(());
    };

    let dest = cli
        .output
        .unwrap_or_else(|| PathBuf::from("output").join(registry::category_package_name(&key)));

    let report = generate_category(&key, &cli.root, &dest)?;

    for w in &report.warnings {
        eprintln!("{w}");
    }

    println!(
        "Scaffolded {} example(s) ({} files) in {}",
        report.generated.len(),
        report.files.len(),
        report.destination.display()
    );
    for member in &report.generated {
        println!("  examples/{member}");
    }
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
