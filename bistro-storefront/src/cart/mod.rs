//! Cart engine
//!
//! Ordered list of cart lines, merged by item id. No operation fails:
//! inputs that match nothing are treated as "not found".

pub mod money;

use rust_decimal::Decimal;
use shared::{CartLine, QuantityOp};

/// In-memory shopping cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    pub fn get(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item.id == item_id)
    }

    fn find_mut(&mut self, item_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.item.id == item_id)
    }

    /// Add a line, merging with an existing line for the same item.
    ///
    /// A merge bumps the existing quantity by exactly 1 whatever the
    /// candidate carries; the candidate's exclusions are dropped. A new
    /// line keeps the candidate's quantity, or 1 when it is 0.
    pub fn add_to_cart(&mut self, candidate: CartLine) {
        if let Some(existing) = self.find_mut(candidate.item_id()) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(item_id = %existing.item.id, quantity = existing.quantity, "cart line merged");
            return;
        }

        let mut line = candidate;
        if line.quantity == 0 {
            line.quantity = 1;
        }
        tracing::debug!(item_id = %line.item.id, quantity = line.quantity, "cart line added");
        self.lines.push(line);
    }

    /// Remove the line for `item_id`; absent ids are ignored
    pub fn remove_from_cart(&mut self, item_id: &str) {
        let before = self.lines.len();
        self.lines.retain(|l| l.item.id != item_id);
        if self.lines.len() != before {
            tracing::debug!(%item_id, "cart line removed");
        }
    }

    /// Step a line's quantity up or down.
    ///
    /// An unknown line is appended with quantity 1 for either operation.
    /// `Minus` never takes a line below 1 and never removes it.
    pub fn update_quantity(&mut self, line: &CartLine, op: QuantityOp) {
        match self.find_mut(line.item_id()) {
            Some(existing) => {
                existing.quantity = match op {
                    QuantityOp::Plus => existing.quantity.saturating_add(1),
                    QuantityOp::Minus => existing.quantity.saturating_sub(1).max(1),
                };
                tracing::debug!(item_id = %existing.item.id, ?op, quantity = existing.quantity, "cart quantity updated");
            }
            None => {
                let mut fresh = line.clone();
                fresh.quantity = 1;
                tracing::debug!(item_id = %fresh.item.id, ?op, "cart line inserted by quantity update");
                self.lines.push(fresh);
            }
        }
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
        tracing::debug!("cart cleared");
    }

    /// Sum of effective unit price times quantity, rounded to cents
    pub fn total(&self) -> Decimal {
        money::cart_total(&self.lines)
    }

    /// Amount for a single line, rounded to cents
    pub fn line_total(line: &CartLine) -> Decimal {
        money::round_money(money::line_amount(&line.item, line.quantity))
    }
}
