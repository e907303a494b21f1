//! Shoe repository backed by the inventory text file
//!
//! Holds the ordered in-memory shoe list for the process lifetime and
//! translates mutations into appends or rewrites of the backing file.
//! Store order is file order, with new records appended at the end.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{InventoryError, InventoryResult};
use crate::models::Shoe;

use super::file_io::{append_line, read_lines, write_lines};

/// Header written to a fresh inventory file and skipped on every load
pub const FILE_HEADER: &str = "Country,Code,Product,Cost,Quantity";

/// Index of the code field within a file line
const CODE_FIELD: usize = 1;
/// Index of the quantity field within a file line
const QUANTITY_FIELD: usize = 4;
/// Number of comma-separated fields per data line
const FIELD_COUNT: usize = 5;

/// Repository for shoe persistence
pub struct ShoeRepository {
    path: PathBuf,
    data: RwLock<Vec<Shoe>>,
}

impl ShoeRepository {
    /// Create a new shoe repository over the given inventory file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load shoes from disk, replacing the in-memory list
    ///
    /// The first line of the file is a header and is skipped. A missing
    /// file surfaces as [`InventoryError::FileNotFound`] with the store
    /// left empty; a malformed line stops the load and leaves whatever
    /// was parsed so far in the store.
    pub fn load(&self) -> InventoryResult<()> {
        let mut data = self.data.write().map_err(|e| {
            InventoryError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.clear();

        let lines = read_lines(&self.path)?;
        for line in lines.iter().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            data.push(parse_line(line)?);
        }

        Ok(())
    }

    /// Append a shoe to the store and to the inventory file
    ///
    /// Writes the header first when the file does not exist yet.
    pub fn append(&self, shoe: Shoe) -> InventoryResult<()> {
        if !self.path.exists() {
            append_line(&self.path, FILE_HEADER)?;
        }
        append_line(&self.path, &format_line(&shoe))?;

        let mut data = self.data.write().map_err(|e| {
            InventoryError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.push(shoe);

        Ok(())
    }

    /// Replace the persisted quantity of every line matching `code`
    ///
    /// Reads all lines into memory, substitutes the quantity field of each
    /// data line whose code field equals `code`, and rewrites the whole
    /// file from the start, truncating trailing content. Codes are not
    /// assumed unique, so every matching line is updated; the other fields
    /// of a rewritten line are preserved as written.
    pub fn rewrite_quantity(&self, code: &str, new_quantity: u32) -> InventoryResult<()> {
        let mut lines = read_lines(&self.path)?;

        for line in lines.iter_mut().skip(1) {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() == FIELD_COUNT && fields[CODE_FIELD].trim() == code {
                let mut fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
                fields[QUANTITY_FIELD] = new_quantity.to_string();
                *line = fields.join(",");
            }
        }

        write_lines(&self.path, &lines)
    }

    /// Get all shoes in store order
    pub fn get_all(&self) -> InventoryResult<Vec<Shoe>> {
        let data = self.data.read().map_err(|e| {
            InventoryError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Get the first shoe whose code equals `code`
    pub fn find_by_code(&self, code: &str) -> InventoryResult<Option<Shoe>> {
        let data = self.data.read().map_err(|e| {
            InventoryError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|s| s.code == code).cloned())
    }

    /// Increase the in-memory quantity of the shoe at `index` (store order)
    ///
    /// Returns the updated record. The caller is responsible for persisting
    /// the new total via [`ShoeRepository::rewrite_quantity`]. Selecting by
    /// position rather than by code keeps the update on the exact record
    /// chosen, even when several records share a code.
    pub fn add_quantity_at(&self, index: usize, additional: u32) -> InventoryResult<Shoe> {
        let mut data = self.data.write().map_err(|e| {
            InventoryError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let shoe = data.get_mut(index).ok_or_else(|| {
            InventoryError::Storage(format!("No shoe at store position {}", index))
        })?;

        shoe.quantity += additional;
        Ok(shoe.clone())
    }

    /// Number of shoes in the store
    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.len()).unwrap_or(0)
    }

    /// Whether the store holds no shoes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse one data line of the inventory file
///
/// Fields are split on commas and trimmed; cost and quantity must coerce
/// to their numeric types. There is no quoting or escaping support.
fn parse_line(line: &str) -> InventoryResult<Shoe> {
    let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();

    if fields.len() != FIELD_COUNT {
        return Err(InventoryError::Parse(format!(
            "expected {} fields, got {}: '{}'",
            FIELD_COUNT,
            fields.len(),
            line
        )));
    }

    let cost: f64 = fields[3]
        .parse()
        .map_err(|_| InventoryError::Parse(format!("invalid cost '{}' in line '{}'", fields[3], line)))?;
    let quantity: u32 = fields[4].parse().map_err(|_| {
        InventoryError::Parse(format!("invalid quantity '{}' in line '{}'", fields[4], line))
    })?;

    Ok(Shoe::new(fields[0], fields[1], fields[2], cost, quantity))
}

/// Render a shoe as one comma-joined file line
fn format_line(shoe: &Shoe) -> String {
    format!(
        "{},{},{},{},{}",
        shoe.country, shoe.code, shoe.product, shoe.cost, shoe.quantity
    )
}
