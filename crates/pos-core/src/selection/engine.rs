// ============================================================================
// POS Core - Combo Selection Engine
// File: crates/pos-core/src/selection/engine.rs
// Description: Per-instance combo customization state and validity rules
// ============================================================================

use pos_shared::constants::MIN_SAUCES_PER_COMBO;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use super::snapshot::{ComponentPick, FrozenSelection, SaucePick, Utensils};
use crate::domain::{Combo, ComponentType, Sauce};
use crate::error::DomainError;

/// Result of a toggle. `AtCapacity` is the soft cap: nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Added,
    Removed,
    AtCapacity,
}

/// Unmet condition keeping a selection from being added to the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionIssue {
    NoComponentsConfigured,
    MissingRequired { component_type: ComponentType, name: String },
    MissingSauce,
}

impl fmt::Display for SelectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionIssue::NoComponentsConfigured => write!(f, "combo has no components configured"),
            SelectionIssue::MissingRequired { component_type, name } => {
                write!(f, "pick at least one '{}' ({} is required)", component_type, name)
            }
            SelectionIssue::MissingSauce => write!(f, "pick at least one sauce"),
        }
    }
}

/// Customization state for one combo instance.
///
/// Invariant: for every component type, the summed quantity of picks never
/// exceeds the combo's `max_selections`.
#[derive(Debug, Clone)]
pub struct ComboSelection {
    combo: Combo,
    picks: BTreeMap<ComponentType, Vec<ComponentPick>>,
    sauces: Vec<SaucePick>,
    utensils: Utensils,
}

impl ComboSelection {
    pub fn new(combo: Combo) -> Self {
        Self {
            combo,
            picks: BTreeMap::new(),
            sauces: Vec::new(),
            utensils: Utensils::default(),
        }
    }

    /// Reopens a frozen selection for modification. Picks that no longer
    /// exist in `combo` are dropped and quantities are clamped to its cap.
    pub fn from_frozen(combo: Combo, frozen: &FrozenSelection) -> Self {
        let mut selection = Self::new(combo);
        for (ty, picks) in &frozen.components {
            for pick in picks {
                if let Err(e) = selection.set_component_quantity(ty, &pick.name, pick.quantity) {
                    debug!("Dropping stale pick while reopening selection: {}", e);
                }
            }
        }
        for pick in &frozen.sauces {
            selection.set_sauce_quantity(pick.sauce, pick.quantity);
        }
        selection.utensils = frozen.utensils;
        selection
    }

    pub fn combo(&self) -> &Combo {
        &self.combo
    }

    pub fn max_selections(&self) -> u32 {
        self.combo.max_selections
    }

    pub fn quantity_for(&self, component_type: &ComponentType) -> u32 {
        self.picks
            .get(component_type)
            .map(|picks| picks.iter().map(|p| p.quantity).fold(0, u32::saturating_add))
            .unwrap_or(0)
    }

    pub fn remaining_for(&self, component_type: &ComponentType) -> u32 {
        self.max_selections().saturating_sub(self.quantity_for(component_type))
    }

    pub fn quantity_of(&self, component_type: &ComponentType, name: &str) -> u32 {
        self.picks
            .get(component_type)
            .and_then(|picks| picks.iter().find(|p| p.name == name))
            .map(|p| p.quantity)
            .unwrap_or(0)
    }

    pub fn is_selected(&self, component_type: &ComponentType, name: &str) -> bool {
        self.quantity_of(component_type, name) > 0
    }

    /// Selects the component with quantity 1, or deselects it if already
    /// picked. At the type's cap this is a no-op reported as `AtCapacity`.
    pub fn toggle_component(
        &mut self,
        component_type: &ComponentType,
        name: &str,
    ) -> Result<PickOutcome, DomainError> {
        self.ensure_component(component_type, name)?;

        if self.is_selected(component_type, name) {
            self.remove_pick(component_type, name);
            return Ok(PickOutcome::Removed);
        }
        if self.quantity_for(component_type) >= self.max_selections() {
            return Ok(PickOutcome::AtCapacity);
        }
        self.picks
            .entry(component_type.clone())
            .or_default()
            .push(ComponentPick { name: name.to_string(), quantity: 1 });
        Ok(PickOutcome::Added)
    }

    /// Sets a component's quantity, clamped to what the rest of its type
    /// leaves free. Returns the quantity actually stored; 0 removes the pick.
    pub fn set_component_quantity(
        &mut self,
        component_type: &ComponentType,
        name: &str,
        quantity: u32,
    ) -> Result<u32, DomainError> {
        self.ensure_component(component_type, name)?;

        let others = self.quantity_for(component_type) - self.quantity_of(component_type, name);
        let clamped = quantity.min(self.max_selections().saturating_sub(others));
        if clamped == 0 {
            self.remove_pick(component_type, name);
            return Ok(0);
        }

        let picks = self.picks.entry(component_type.clone()).or_default();
        match picks.iter_mut().find(|p| p.name == name) {
            Some(pick) => pick.quantity = clamped,
            None => picks.push(ComponentPick { name: name.to_string(), quantity: clamped }),
        }
        Ok(clamped)
    }

    pub fn toggle_sauce(&mut self, sauce: Sauce) -> PickOutcome {
        if self.sauce_quantity(sauce) > 0 {
            self.set_sauce_quantity(sauce, 0);
            PickOutcome::Removed
        } else {
            self.set_sauce_quantity(sauce, 1);
            PickOutcome::Added
        }
    }

    /// Sauces have no upper bound; 0 removes.
    pub fn set_sauce_quantity(&mut self, sauce: Sauce, quantity: u32) {
        if quantity == 0 {
            self.sauces.retain(|s| s.sauce != sauce);
            return;
        }
        match self.sauces.iter_mut().find(|s| s.sauce == sauce) {
            Some(pick) => pick.quantity = quantity,
            None => self.sauces.push(SaucePick { sauce, quantity }),
        }
    }

    pub fn sauce_quantity(&self, sauce: Sauce) -> u32 {
        self.sauces
            .iter()
            .find(|s| s.sauce == sauce)
            .map(|s| s.quantity)
            .unwrap_or(0)
    }

    pub fn sauce_total(&self) -> u32 {
        self.sauces.iter().map(|s| s.quantity).fold(0, u32::saturating_add)
    }

    pub fn set_utensils(&mut self, normal: u32, assisted: u32) {
        self.utensils = Utensils { normal, assisted };
    }

    pub fn utensils(&self) -> Utensils {
        self.utensils
    }

    pub fn issues(&self) -> Vec<SelectionIssue> {
        let mut issues = Vec::new();
        if !self.combo.has_components() {
            issues.push(SelectionIssue::NoComponentsConfigured);
        }
        for component in self.combo.required_components() {
            if self.quantity_for(&component.component_type) == 0 {
                issues.push(SelectionIssue::MissingRequired {
                    component_type: component.component_type.clone(),
                    name: component.name.clone(),
                });
            }
        }
        if self.sauce_total() < MIN_SAUCES_PER_COMBO {
            issues.push(SelectionIssue::MissingSauce);
        }
        issues
    }

    pub fn is_valid(&self) -> bool {
        self.issues().is_empty()
    }

    pub fn freeze(&self) -> Result<FrozenSelection, DomainError> {
        let issues = self.issues();
        if !issues.is_empty() {
            let message = issues.iter().map(|i| i.to_string()).collect::<Vec<_>>().join("; ");
            return Err(DomainError::InvalidSelection(message));
        }
        Ok(FrozenSelection {
            components: self.picks.clone(),
            sauces: self.sauces.clone(),
            utensils: self.utensils,
        })
    }

    /// Clears every pick, keeping the combo.
    pub fn reset(&mut self) {
        self.picks.clear();
        self.sauces.clear();
        self.utensils = Utensils::default();
    }

    fn ensure_component(&self, component_type: &ComponentType, name: &str) -> Result<(), DomainError> {
        match self.combo.find_component(component_type, name) {
            Some(_) => Ok(()),
            None => Err(DomainError::UnknownComponent {
                component_type: component_type.to_string(),
                name: name.to_string(),
            }),
        }
    }

    fn remove_pick(&mut self, component_type: &ComponentType, name: &str) {
        if let Some(picks) = self.picks.get_mut(component_type) {
            picks.retain(|p| p.name != name);
            if picks.is_empty() {
                self.picks.remove(component_type);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComboComponent;
    use rust_decimal::Decimal;

    fn component(id: &str, name: &str, ty: &str, required: bool) -> ComboComponent {
        ComboComponent {
            id: id.into(),
            name: name.into(),
            component_type: ty.into(),
            price: Decimal::ZERO,
            is_required: required,
            max_selections: 1,
            ord: 0,
        }
    }

    fn bento() -> Combo {
        Combo {
            id: "combo-1".into(),
            name: "Bento 1".into(),
            base_price: Decimal::new(5990, 2),
            category_id: None,
            max_selections: 2,
            components: vec![
                component("1", "Causa Acevichada", "flavor", false),
                component("2", "California", "flavor", false),
            ],
            is_available: true,
        }
    }

    fn flavor() -> ComponentType {
        ComponentType::from("flavor")
    }

    #[test]
    fn test_bento_needs_a_sauce() {
        let mut selection = ComboSelection::new(bento());
        assert_eq!(selection.toggle_component(&flavor(), "Causa Acevichada").unwrap(), PickOutcome::Added);
        assert_eq!(selection.toggle_component(&flavor(), "California").unwrap(), PickOutcome::Added);
        assert!(!selection.is_valid());
        assert_eq!(selection.issues(), vec![SelectionIssue::MissingSauce]);

        selection.toggle_sauce(Sauce::Acevichada);
        assert!(selection.is_valid());

        selection.toggle_sauce(Sauce::Acevichada);
        assert!(!selection.is_valid());
    }

    #[test]
    fn test_toggle_at_cap_is_noop() {
        let mut combo = bento();
        combo.max_selections = 1;
        let mut selection = ComboSelection::new(combo);

        selection.toggle_component(&flavor(), "California").unwrap();
        let outcome = selection.toggle_component(&flavor(), "Causa Acevichada").unwrap();
        assert_eq!(outcome, PickOutcome::AtCapacity);
        assert!(!selection.is_selected(&flavor(), "Causa Acevichada"));
        assert_eq!(selection.quantity_for(&flavor()), 1);

        assert_eq!(selection.toggle_component(&flavor(), "California").unwrap(), PickOutcome::Removed);
        assert_eq!(selection.quantity_for(&flavor()), 0);
    }

    #[test]
    fn test_set_quantity_clamps_to_what_others_leave() {
        let mut selection = ComboSelection::new(bento());
        assert_eq!(selection.set_component_quantity(&flavor(), "California", 5).unwrap(), 2);
        assert_eq!(selection.set_component_quantity(&flavor(), "Causa Acevichada", 1).unwrap(), 0);

        selection.set_component_quantity(&flavor(), "California", 1).unwrap();
        assert_eq!(selection.set_component_quantity(&flavor(), "Causa Acevichada", 3).unwrap(), 1);
        assert_eq!(selection.remaining_for(&flavor()), 0);

        assert_eq!(selection.set_component_quantity(&flavor(), "California", 0).unwrap(), 0);
        assert!(!selection.is_selected(&flavor(), "California"));
    }

    #[test]
    fn test_cap_holds_under_mixed_operations() {
        let mut selection = ComboSelection::new(bento());
        let names = ["Causa Acevichada", "California"];
        let mut seed: u32 = 17;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let name = names[(seed >> 8) as usize % 2];
            if seed % 3 == 0 {
                selection.toggle_component(&flavor(), name).unwrap();
            } else {
                selection.set_component_quantity(&flavor(), name, (seed >> 4) % 5).unwrap();
            }
            assert!(selection.quantity_for(&flavor()) <= selection.max_selections());
        }
    }

    #[test]
    fn test_sauces_are_unbounded() {
        let mut selection = ComboSelection::new(bento());
        selection.set_sauce_quantity(Sauce::Teriyaki, 12);
        selection.set_sauce_quantity(Sauce::Olivo, 3);
        assert_eq!(selection.sauce_total(), 15);
        selection.set_sauce_quantity(Sauce::Teriyaki, 0);
        assert_eq!(selection.sauce_quantity(Sauce::Teriyaki), 0);
        assert_eq!(selection.sauce_total(), 3);
    }

    #[test]
    fn test_required_component_and_empty_combo() {
        let mut combo = bento();
        combo.components.push(component("3", "Gyozas", "side", true));
        let mut selection = ComboSelection::new(combo);
        selection.toggle_sauce(Sauce::Tare);
        assert!(matches!(
            selection.issues().as_slice(),
            [SelectionIssue::MissingRequired { .. }]
        ));
        selection.toggle_component(&"side".into(), "Gyozas").unwrap();
        assert!(selection.is_valid());

        let mut empty = bento();
        empty.components.clear();
        let mut selection = ComboSelection::new(empty);
        selection.toggle_sauce(Sauce::Tare);
        assert!(!selection.is_valid());
        assert!(selection.freeze().is_err());
    }

    #[test]
    fn test_unknown_component_is_an_error() {
        let mut selection = ComboSelection::new(bento());
        let err = selection.toggle_component(&"side".into(), "California").unwrap_err();
        assert!(matches!(err, DomainError::UnknownComponent { .. }));
    }

    #[test]
    fn test_freeze_and_reopen() {
        let mut selection = ComboSelection::new(bento());
        selection.toggle_component(&flavor(), "California").unwrap();
        selection.set_sauce_quantity(Sauce::Anguila, 2);
        selection.set_utensils(2, 1);
        let frozen = selection.freeze().unwrap();

        let reopened = ComboSelection::from_frozen(bento(), &frozen);
        assert_eq!(reopened.freeze().unwrap(), frozen);

        let mut tighter = bento();
        tighter.components.retain(|c| c.name != "California");
        let reopened = ComboSelection::from_frozen(tighter, &frozen);
        assert_eq!(reopened.quantity_for(&flavor()), 0);
        assert_eq!(reopened.sauce_quantity(Sauce::Anguila), 2);
    }

    #[test]
    fn test_reopen_clamps_to_smaller_cap() {
        let mut selection = ComboSelection::new(bento());
        selection.set_component_quantity(&flavor(), "California", 2).unwrap();
        selection.set_sauce_quantity(Sauce::Tare, 1);
        let frozen = selection.freeze().unwrap();
        assert_eq!(frozen.quantity_for(&flavor()), 2);

        let mut smaller = bento();
        smaller.max_selections = 1;
        let reopened = ComboSelection::from_frozen(smaller, &frozen);
        assert_eq!(reopened.quantity_for(&flavor()), 1);
        assert_eq!(reopened.quantity_of(&flavor(), "California"), 1);
        assert!(reopened.is_valid());
    }

    #[test]
    fn test_huge_sauce_counts_saturate() {
        let mut selection = ComboSelection::new(bento());
        selection.toggle_component(&flavor(), "California").unwrap();
        selection.set_sauce_quantity(Sauce::Tare, u32::MAX);
        selection.set_sauce_quantity(Sauce::Olivo, 1);

        assert_eq!(selection.sauce_total(), u32::MAX);
        assert!(selection.is_valid());
        assert_eq!(selection.freeze().unwrap().sauce_total(), u32::MAX);
    }
}
