use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use shoestock::cli::run_menu;
use shoestock::config::InventoryPaths;
use shoestock::error::InventoryError;
use shoestock::storage::Storage;

#[derive(Parser)]
#[command(
    name = "shoestock",
    version,
    about = "Terminal-based shoe inventory management",
    long_about = "shoestock is a terminal-based inventory manager for a shoe \
                  store. It keeps the stock list in a flat delimited text file \
                  and drives everything through an interactive numbered menu."
)]
struct Cli {
    /// Directory holding inventory.txt and the audit log
    /// (defaults to the current directory)
    #[arg(long, env = "SHOESTOCK_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => InventoryPaths::with_base_dir(dir),
        None => InventoryPaths::new(),
    };

    let storage = Storage::new(paths)?;

    // One-time startup load; a missing or unreadable file is reported and
    // the menu starts over whatever state was loaded.
    match storage.load_all() {
        Ok(()) => {}
        Err(InventoryError::FileNotFound(_)) => {
            println!("The inventory file was not found.");
        }
        Err(e) => {
            println!("An error occurred while reading the inventory file: {}", e);
        }
    }

    run_menu(&storage)?;
    Ok(())
}
