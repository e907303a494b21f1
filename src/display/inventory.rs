//! Inventory display formatting
//!
//! Formats shoes for terminal output in table and report views.

use crate::models::Shoe;
use crate::services::ItemValue;

/// Format the full inventory as a table
///
/// Columns: Code, Product, Country, Cost, Quantity. Rows appear in store
/// order.
pub fn format_shoe_table(shoes: &[Shoe]) -> String {
    if shoes.is_empty() {
        return "No shoes in the inventory.".to_string();
    }

    // Calculate column widths
    let code_width = shoes
        .iter()
        .map(|s| s.code.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let product_width = shoes
        .iter()
        .map(|s| s.product.len())
        .max()
        .unwrap_or(7)
        .max(7);

    let country_width = shoes
        .iter()
        .map(|s| s.country.len())
        .max()
        .unwrap_or(7)
        .max(7);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<code_width$}  {:<product_width$}  {:<country_width$}  {:>8}  {:>8}\n",
        "Code",
        "Product",
        "Country",
        "Cost",
        "Quantity",
        code_width = code_width,
        product_width = product_width,
        country_width = country_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<code_width$}  {:-<product_width$}  {:-<country_width$}  {:->8}  {:->8}\n",
        "",
        "",
        "",
        "",
        "",
        code_width = code_width,
        product_width = product_width,
        country_width = country_width,
    ));

    // Shoe rows
    for shoe in shoes {
        output.push_str(&format!(
            "{:<code_width$}  {:<product_width$}  {:<country_width$}  {:>8}  {:>8}\n",
            shoe.code,
            shoe.product,
            shoe.country,
            shoe.cost,
            shoe.quantity,
            code_width = code_width,
            product_width = product_width,
            country_width = country_width,
        ));
    }

    output
}

/// Format the value-per-item report
///
/// One line per record: `product (code): $value`, value to two decimals.
pub fn format_value_report(items: &[ItemValue]) -> String {
    let mut output = String::new();
    output.push_str("Shoe value per item:\n");
    output.push_str("---------------------\n");

    for item in items {
        output.push_str(&format!(
            "{} ({}): ${:.2}\n",
            item.product, item.code, item.value
        ));
    }

    output
}
