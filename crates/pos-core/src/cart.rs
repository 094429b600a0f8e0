// ============================================================================
// POS Core - Cart Aggregator
// File: crates/pos-core/src/cart.rs
// Description: Order-in-progress lines, totals and order-create serialization
// ============================================================================

use pos_shared::utils::normalize_optional;
use pos_shared::{ComboPricing, Money};
use rust_decimal::Decimal;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{Combo, NewOrderItem, Product};
use crate::error::DomainError;
use crate::selection::{ComboSelection, FrozenSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(Uuid);

impl LineId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// What a cart line sells. Decided once when the line is created.
#[derive(Debug, Clone, PartialEq)]
pub enum LineItem {
    /// Plain product with optional free-text notes.
    Product { product: Product, notes: Option<String> },
    /// Combo with its frozen customization.
    Combo { combo: Combo, selection: FrozenSelection },
}

impl LineItem {
    pub fn product(product: Product) -> Self {
        LineItem::Product { product, notes: None }
    }

    pub fn product_with_notes(product: Product, notes: impl Into<String>) -> Self {
        LineItem::Product { product, notes: Some(notes.into()) }
    }

    /// Freezes `selection`; fails while the selection is invalid.
    pub fn combo(selection: &ComboSelection) -> Result<Self, DomainError> {
        Ok(LineItem::Combo {
            combo: selection.combo().clone(),
            selection: selection.freeze()?,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            LineItem::Product { product, .. } => &product.name,
            LineItem::Combo { combo, .. } => &combo.name,
        }
    }

    pub fn is_combo(&self) -> bool {
        matches!(self, LineItem::Combo { .. })
    }

    fn is_available(&self) -> bool {
        match self {
            LineItem::Product { product, .. } => product.is_available,
            LineItem::Combo { combo, .. } => combo.is_available,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: LineId,
    pub item: LineItem,
    pub quantity: u32,
    /// Locked when the line was built; never re-fetched.
    pub unit_price: Money,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Free text for products, the JSON selection snapshot for combos.
    pub fn notes(&self) -> Result<Option<String>, DomainError> {
        match &self.item {
            LineItem::Product { notes, .. } => Ok(notes.clone()),
            LineItem::Combo { selection, .. } => selection.to_notes().map(Some),
        }
    }

    fn is_plain_product(&self, product_id: &str) -> bool {
        matches!(&self.item, LineItem::Product { product, notes: None } if product.id == product_id)
    }

    fn to_order_item(&self) -> Result<NewOrderItem, DomainError> {
        Ok(match &self.item {
            LineItem::Product { product, notes } => NewOrderItem::for_product(
                product.id.clone(),
                product.name.clone(),
                self.unit_price,
                self.quantity,
                notes.clone(),
            ),
            LineItem::Combo { combo, selection } => NewOrderItem::for_combo(
                combo.id.clone(),
                combo.name.clone(),
                self.unit_price,
                self.quantity,
                selection.to_notes()?,
            ),
        })
    }
}

/// Order-in-progress
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    pricing: ComboPricing,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pricing(pricing: ComboPricing) -> Self {
        Self { lines: Vec::new(), pricing }
    }

    pub fn pricing(&self) -> ComboPricing {
        self.pricing
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).fold(0, u32::saturating_add)
    }

    /// Adds `quantity` units of `item`.
    ///
    /// A plain product without notes merges into an existing plain line for
    /// the same product. Combos always get a line of their own: two
    /// identically configured combos are still two meals to prepare.
    pub fn add_line(&mut self, item: LineItem, quantity: u32) -> Result<LineId, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity);
        }
        if !item.is_available() {
            return Err(DomainError::ItemUnavailable(item.name().to_string()));
        }

        let item = match item {
            LineItem::Product { product, notes } => {
                let notes = normalize_optional(notes);
                if notes.is_none() {
                    if let Some(line) = self.lines.iter_mut().find(|l| l.is_plain_product(&product.id)) {
                        line.quantity = line
                            .quantity
                            .checked_add(quantity)
                            .ok_or(DomainError::InvalidQuantity)?;
                        debug!("Merged {} x{} into line {}", product.name, quantity, line.id);
                        return Ok(line.id);
                    }
                }
                LineItem::Product { product, notes }
            }
            LineItem::Combo { combo, selection } => {
                selection.check_against(&combo)?;
                LineItem::Combo { combo, selection }
            }
        };

        let line = CartLine {
            id: LineId::new(),
            unit_price: self.unit_price(&item),
            item,
            quantity,
        };
        debug!("Added cart line {} ({} x{})", line.id, line.item.name(), quantity);
        let id = line.id;
        self.lines.push(line);
        Ok(id)
    }

    pub fn add_product(&mut self, product: Product, quantity: u32) -> Result<LineId, DomainError> {
        self.add_line(LineItem::product(product), quantity)
    }

    /// Freezes and adds a customized combo. Rejected while the selection is invalid.
    pub fn add_combo(&mut self, selection: &ComboSelection, quantity: u32) -> Result<LineId, DomainError> {
        self.add_line(LineItem::combo(selection)?, quantity)
    }

    /// Sets a line's quantity; 0 removes the line.
    pub fn update_quantity(&mut self, id: LineId, quantity: u32) -> Result<(), DomainError> {
        if quantity == 0 {
            return self.remove_line(id).map(|_| ());
        }
        let line = self.line_mut(id)?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn remove_line(&mut self, id: LineId) -> Result<CartLine, DomainError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| DomainError::LineNotFound(id.to_string()))?;
        Ok(self.lines.remove(index))
    }

    /// Applies a modified configuration to an existing combo line.
    pub fn replace_selection(&mut self, id: LineId, selection: FrozenSelection) -> Result<(), DomainError> {
        let pricing = self.pricing;
        let line = self.line_mut(id)?;
        let combo = match &line.item {
            LineItem::Combo { combo, .. } => combo.clone(),
            LineItem::Product { .. } => return Err(DomainError::NotAComboLine(id.to_string())),
        };
        selection.check_against(&combo)?;
        line.unit_price = combo_unit_price(pricing, &combo, &selection);
        line.item = LineItem::Combo { combo, selection };
        Ok(())
    }

    /// Sum of locked unit price times quantity over every line.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Wire-format order items, one per line, in cart order.
    pub fn serialize(&self) -> Result<Vec<NewOrderItem>, DomainError> {
        self.lines.iter().map(CartLine::to_order_item).collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut CartLine, DomainError> {
        self.lines
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| DomainError::LineNotFound(id.to_string()))
    }

    fn unit_price(&self, item: &LineItem) -> Money {
        match item {
            LineItem::Product { product, .. } => product.price,
            LineItem::Combo { combo, selection } => combo_unit_price(self.pricing, combo, selection),
        }
    }
}

fn combo_unit_price(pricing: ComboPricing, combo: &Combo, selection: &FrozenSelection) -> Money {
    match pricing {
        ComboPricing::FlatBase => combo.base_price,
        ComboPricing::BasePlusSurcharges => combo.base_price + selection.surcharge(combo),
    }
}
