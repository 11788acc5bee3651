use std::collections::{BTreeMap, BTreeSet};

use chrono::Local;

use stockroom_core::{DomainError, DomainResult};

use crate::quantity::Quantity;

/// Threshold used by the low-stock listing when the caller has no opinion.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// What a call to [`Inventory::remove`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Stock was reduced and the entry is still present.
    Decremented { remaining: Quantity },
    /// Stock reached zero or below; the entry was deleted.
    Depleted,
    /// The item was not stocked. Nothing changed.
    NotFound,
}

impl Removal {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Removal::NotFound)
    }
}

/// In-memory inventory: item name → strictly positive quantity.
///
/// Construct one per process and pass it by reference. Entries never hold a
/// zero or negative quantity; anything that would reach that is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub(crate) stock: BTreeMap<String, Quantity>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    /// Entries in item-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.stock.iter().map(|(item, qty)| (item.as_str(), qty.get()))
    }

    /// Add `qty` units of `item`, creating the entry if needed.
    ///
    /// When `audit` is supplied, a timestamped line is appended to it.
    pub fn add(&mut self, item: &str, qty: i64, audit: Option<&mut Vec<String>>) -> DomainResult<Quantity> {
        let qty = Quantity::new(qty)?;

        let total = match self.stock.get(item) {
            Some(current) => current
                .checked_add(qty)
                .ok_or_else(|| DomainError::invariant(format!("quantity overflow for '{item}'")))?,
            None => qty,
        };
        self.stock.insert(item.to_string(), total);

        tracing::debug!(item, added = qty.get(), total = total.get(), "stock added");

        if let Some(lines) = audit {
            lines.push(format!("{}: Added {qty} of {item}", Local::now()));
        }

        Ok(total)
    }

    /// Remove `qty` units of `item`.
    ///
    /// An unknown item is not an error: it is logged at debug level and
    /// reported as [`Removal::NotFound`].
    pub fn remove(&mut self, item: &str, qty: i64) -> DomainResult<Removal> {
        let qty = Quantity::new(qty)?;

        let Some(current) = self.stock.get(item).copied() else {
            tracing::debug!(item, "item not found; nothing removed");
            return Ok(Removal::NotFound);
        };

        match current.checked_sub(qty) {
            Some(remaining) => {
                self.stock.insert(item.to_string(), remaining);
                tracing::debug!(item, removed = qty.get(), remaining = remaining.get(), "stock removed");
                Ok(Removal::Decremented { remaining })
            }
            None => {
                self.stock.remove(item);
                tracing::debug!(item, removed = qty.get(), "stock depleted; entry deleted");
                Ok(Removal::Depleted)
            }
        }
    }

    /// Stocked quantity, or 0 when the item is absent.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.stock.get(item).map_or(0, |q| q.get())
    }

    /// Items whose quantity is strictly below `threshold`.
    pub fn list_low_stock(&self, threshold: i64) -> DomainResult<BTreeSet<String>> {
        if threshold < 0 {
            return Err(DomainError::invalid_argument("threshold must be a non-negative integer"));
        }

        Ok(self
            .stock
            .iter()
            .filter(|(_, qty)| qty.get() < threshold)
            .map(|(item, _)| item.clone())
            .collect())
    }
}

impl FromIterator<(String, Quantity)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (String, Quantity)>>(iter: I) -> Self {
        Self {
            stock: iter.into_iter().collect(),
        }
    }
}
