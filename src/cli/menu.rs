//! Interactive main menu
//!
//! The numbered menu loop and the prompt-driven flow behind each option.
//! Each option runs to completion before the menu is shown again.

use std::io::{self, Write};

use crate::display::{format_shoe_table, format_value_report};
use crate::error::{InventoryError, InventoryResult};
use crate::services::InventoryService;
use crate::storage::Storage;

/// Run the interactive menu loop until the user chooses to exit
///
/// Lookup misses and empty-inventory conditions are reported and the loop
/// continues; malformed numeric input at a prompt propagates and terminates
/// the program.
pub fn run_menu(storage: &Storage) -> InventoryResult<()> {
    loop {
        print_menu();
        let choice = prompt_string("Enter your choice: ")?;

        match choice.as_str() {
            "1" => view_all(storage)?,
            "2" => capture(storage)?,
            "3" => restock(storage)?,
            "4" => search(storage)?,
            "5" => value_per_item(storage)?,
            "6" => highest_qty(storage)?,
            "7" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn print_menu() {
    println!("===== Shoe Inventory Management =====");
    println!("1. View all shoes");
    println!("2. Add new shoe");
    println!("3. Re-stock shoes");
    println!("4. Search for a shoe");
    println!("5. Show value per item");
    println!("6. Show product with the highest quantity");
    println!("7. Exit");
}

/// Option 1: render every shoe as a table row, in store order
fn view_all(storage: &Storage) -> InventoryResult<()> {
    let service = InventoryService::new(storage);
    let shoes = service.list()?;
    println!("{}", format_shoe_table(&shoes));
    Ok(())
}

/// Option 2: capture a new shoe from five prompts
fn capture(storage: &Storage) -> InventoryResult<()> {
    let service = InventoryService::new(storage);

    let country = prompt_string("Enter country of origin: ")?;
    let code = prompt_string("Enter code of the shoe: ")?;
    let product = prompt_string("Enter name of the shoe: ")?;
    let cost = prompt_f64("Enter cost of the shoe: ")?;
    let quantity = prompt_u32("Enter quantity of the shoe: ")?;

    service.add(&country, &code, &product, cost, quantity)?;
    println!("Shoe added successfully!");
    Ok(())
}

/// Option 3: offer to re-stock the lowest-quantity shoe
fn restock(storage: &Storage) -> InventoryResult<()> {
    let service = InventoryService::new(storage);

    let lowest = match service.lowest_stock() {
        Ok(shoe) => shoe,
        Err(InventoryError::EmptyInventory) => {
            println!("The inventory is empty; there is nothing to re-stock.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("The shoe with the lowest quantity is {}", lowest);
    println!();

    let answer = prompt_string("Do you want to add this quantity of shoes? (y/n): ")?;
    if answer.eq_ignore_ascii_case("y") {
        let additional = prompt_u32(&format!(
            "How many {}s do you want to add?: ",
            lowest.product
        ))?;
        let updated = service.restock_lowest(additional)?;
        println!("{} {}s added to the inventory.", additional, updated.product);
    } else {
        println!("No changes have been made to the inventory.");
    }

    Ok(())
}

/// Option 4: look up a shoe by its code
fn search(storage: &Storage) -> InventoryResult<()> {
    let service = InventoryService::new(storage);

    let code = prompt_string("Enter the code of the shoe to search for: ")?;
    match service.search(&code) {
        Ok(shoe) => println!("{}", shoe),
        Err(e) if e.is_not_found() => {
            println!("The shoe with the specified code was not found.");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Option 5: report cost times quantity for every shoe
fn value_per_item(storage: &Storage) -> InventoryResult<()> {
    let service = InventoryService::new(storage);
    println!("{}", format_value_report(&service.value_report()?));
    Ok(())
}

/// Option 6: report the shoe with the highest quantity as for sale
fn highest_qty(storage: &Storage) -> InventoryResult<()> {
    let service = InventoryService::new(storage);

    match service.highest_stock() {
        Ok(shoe) => println!(
            "{} ({}) is for sale with the highest quantity of {} pieces",
            shoe.product,
            shoe.code,
            shoe.quantity()
        ),
        Err(InventoryError::EmptyInventory) => {
            println!("The inventory is empty; there is nothing for sale.");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

fn prompt_string(prompt: &str) -> InventoryResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| InventoryError::Io(e.to_string()))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| InventoryError::Io(e.to_string()))?;
    if bytes == 0 {
        return Err(InventoryError::Io("unexpected end of input".into()));
    }

    Ok(input.trim().to_string())
}

fn prompt_f64(prompt: &str) -> InventoryResult<f64> {
    let raw = prompt_string(prompt)?;
    raw.parse()
        .map_err(|_| InventoryError::Parse(format!("'{}' is not a valid cost", raw)))
}

fn prompt_u32(prompt: &str) -> InventoryResult<u32> {
    let raw = prompt_string(prompt)?;
    raw.parse()
        .map_err(|_| InventoryError::Parse(format!("'{}' is not a valid quantity", raw)))
}
