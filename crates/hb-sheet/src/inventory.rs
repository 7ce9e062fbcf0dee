//! A slot-bounded item inventory.
//!
//! Every unit of an item takes one slot. Additions and removals are
//! all-or-nothing: a failed call leaves the inventory untouched.

use crate::error::{SheetError, SheetResult};

/// Slots in an inventory when no size is given.
pub const DEFAULT_INVENTORY_SIZE: usize = 10;

/// Items carried by a character, one slot per unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<String>,
    max_size: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_SIZE)
    }
}

impl Inventory {
    /// An empty inventory with `max_size` slots.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: Vec::new(),
            max_size,
        }
    }

    /// Add `quantity` units of `item`.
    pub fn add_item(&mut self, item: impl Into<String>, quantity: u32) -> SheetResult<()> {
        let item = item.into();
        if quantity == 0 {
            return Err(SheetError::InvalidArgument(
                "quantity to add must be positive".to_string(),
            ));
        }
        let available = self.free_slots();
        if available < quantity as usize {
            return Err(SheetError::CapacityExceeded {
                item,
                requested: quantity,
                available,
            });
        }
        self.items.extend(std::iter::repeat_n(item, quantity as usize));
        Ok(())
    }

    /// Remove `quantity` units of `item`, earliest first.
    pub fn remove_item(&mut self, item: &str, quantity: u32) -> SheetResult<()> {
        if quantity == 0 {
            return Err(SheetError::InvalidArgument(
                "quantity to remove must be positive".to_string(),
            ));
        }
        let present = self.count(item);
        if present < quantity as usize {
            return Err(SheetError::NotFound {
                item: item.to_string(),
                requested: quantity,
                present,
            });
        }
        let mut remaining = quantity as usize;
        self.items.retain(|held| {
            if remaining > 0 && held == item {
                remaining -= 1;
                false
            } else {
                true
            }
        });
        Ok(())
    }

    /// How many units of `item` are held.
    pub fn count(&self, item: &str) -> usize {
        self.items.iter().filter(|held| *held == item).count()
    }

    /// Every held unit, in the order added.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of slots.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of unoccupied slots.
    pub fn free_slots(&self) -> usize {
        self.max_size.saturating_sub(self.items.len())
    }

    /// Returns true if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.items.is_empty() {
            f.write_str("Inventory is empty.")
        } else {
            f.write_str(&self.items.join(", "))
        }
    }
}
