//! End-to-end tests driving the interactive menu over stdin

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn shoestock(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shoestock").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

#[test]
fn capture_then_view_lists_the_new_shoe() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.txt"),
        "Country,Code,Product,Cost,Quantity\n",
    )
    .unwrap();

    // 2 = add (five fields), 1 = view all, 7 = exit
    shoestock(&dir)
        .write_stdin("2\nUSA\nSH1\nRunner\n25\n4\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shoe added successfully!"))
        .stdout(predicate::str::contains("SH1"))
        .stdout(predicate::str::contains("Runner"))
        .stdout(predicate::str::contains("Goodbye!"));

    let contents = fs::read_to_string(dir.path().join("inventory.txt")).unwrap();
    assert_eq!(
        contents,
        "Country,Code,Product,Cost,Quantity\nUSA,SH1,Runner,25,4\n"
    );
}

#[test]
fn missing_inventory_file_reports_and_continues() {
    let dir = TempDir::new().unwrap();

    shoestock(&dir)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The inventory file was not found."))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn invalid_menu_choice_reports_and_reprompts() {
    let dir = TempDir::new().unwrap();

    shoestock(&dir)
        .write_stdin("9\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn view_all_on_empty_inventory_prints_placeholder() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.txt"),
        "Country,Code,Product,Cost,Quantity\n",
    )
    .unwrap();

    shoestock(&dir)
        .write_stdin("1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No shoes in the inventory."));
}

#[test]
fn restock_updates_the_lowest_quantity_shoe() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.txt"),
        "Country,Code,Product,Cost,Quantity\n\
         USA,SH1,Runner,25,5\n\
         China,SH2,Jordan 1,32,2\n\
         Italy,SH3,Loafer,89.5,9\n",
    )
    .unwrap();

    // 3 = re-stock, confirm, add 10, 7 = exit
    shoestock(&dir)
        .write_stdin("3\ny\n10\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The shoe with the lowest quantity is Jordan 1 (SH2)"))
        .stdout(predicate::str::contains("10 Jordan 1s added to the inventory."));

    let contents = fs::read_to_string(dir.path().join("inventory.txt")).unwrap();
    assert!(contents.contains("China,SH2,Jordan 1,32,12\n"));
    assert!(contents.contains("USA,SH1,Runner,25,5\n"));
}

#[test]
fn declining_restock_leaves_the_file_untouched() {
    let dir = TempDir::new().unwrap();
    let original = "Country,Code,Product,Cost,Quantity\nUSA,SH1,Runner,25,5\n";
    fs::write(dir.path().join("inventory.txt"), original).unwrap();

    shoestock(&dir)
        .write_stdin("3\nn\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No changes have been made to the inventory.",
        ));

    let contents = fs::read_to_string(dir.path().join("inventory.txt")).unwrap();
    assert_eq!(contents, original);
}

#[test]
fn search_hits_and_misses() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.txt"),
        "Country,Code,Product,Cost,Quantity\nUSA,SH1,Runner,25,4\n",
    )
    .unwrap();

    shoestock(&dir)
        .write_stdin("4\nSH1\n4\nSH404\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Runner (SH1): 4 units available at $25 each from USA.",
        ))
        .stdout(predicate::str::contains(
            "The shoe with the specified code was not found.",
        ));
}

#[test]
fn value_per_item_formats_two_decimals() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.txt"),
        "Country,Code,Product,Cost,Quantity\nUSA,SH1,Runner,10,3\n",
    )
    .unwrap();

    shoestock(&dir)
        .write_stdin("5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Runner (SH1): $30.00"));
}

#[test]
fn highest_quantity_reports_the_right_shoe() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.txt"),
        "Country,Code,Product,Cost,Quantity\n\
         USA,SH1,Runner,25,5\n\
         Italy,SH3,Loafer,89.5,9\n",
    )
    .unwrap();

    shoestock(&dir)
        .write_stdin("6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Loafer (SH3) is for sale with the highest quantity of 9 pieces",
        ));
}

#[test]
fn restock_on_empty_inventory_reports_and_continues() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.txt"),
        "Country,Code,Product,Cost,Quantity\n",
    )
    .unwrap();

    shoestock(&dir)
        .write_stdin("3\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The inventory is empty; there is nothing to re-stock.",
        ))
        .stdout(predicate::str::contains(
            "The inventory is empty; there is nothing for sale.",
        ));
}

#[test]
fn malformed_cost_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.txt"),
        "Country,Code,Product,Cost,Quantity\n",
    )
    .unwrap();

    shoestock(&dir)
        .write_stdin("2\nUSA\nSH1\nRunner\nnot-a-number\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid cost"));
}

#[test]
fn capture_writes_an_audit_entry() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.txt"),
        "Country,Code,Product,Cost,Quantity\n",
    )
    .unwrap();

    shoestock(&dir)
        .write_stdin("2\nUSA\nSH1\nRunner\n25\n4\n7\n")
        .assert()
        .success();

    let audit = fs::read_to_string(dir.path().join("audit.log")).unwrap();
    assert!(audit.contains("\"operation\":\"create\""));
    assert!(audit.contains("\"code\":\"SH1\""));
}
