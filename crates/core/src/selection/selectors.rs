//! Pure read-side views over a [`SelectionStore`] snapshot.

use crate::domain::product::{AutoSelection, MotoSelection, MultirisqueSelection};
use crate::selection::SelectionStore;

/// Normalized view of the first populated product slot, in priority order
/// Auto, Moto, Multirisque. The order is a deliberate tie-break: at most one
/// slot is meaningfully populated in normal use, but stale slots must still
/// resolve deterministically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurrentProduct<'a> {
    Auto(&'a AutoSelection),
    Moto(&'a MotoSelection),
    Multirisque(&'a MultirisqueSelection),
}

impl CurrentProduct<'_> {
    pub fn base_price(&self) -> u64 {
        match self {
            Self::Auto(auto) => auto.price,
            Self::Moto(moto) => moto.price,
            Self::Multirisque(multirisque) => multirisque.price,
        }
    }
}

pub fn current_product_details(store: &SelectionStore) -> Option<CurrentProduct<'_>> {
    if let Some(auto) = store.auto_selection() {
        return Some(CurrentProduct::Auto(auto));
    }
    if let Some(moto) = store.moto_selection() {
        return Some(CurrentProduct::Moto(moto));
    }
    store.multirisque_selection().map(CurrentProduct::Multirisque)
}

/// Base price of the active selection plus the IAC premium when the add-on
/// is selected. 0 when nothing is selected.
pub fn total_price(store: &SelectionStore) -> u64 {
    let base = current_product_details(store).map(|product| product.base_price()).unwrap_or(0);
    let iac = store
        .iac_add_on()
        .filter(|add_on| add_on.selected)
        .map(|add_on| add_on.price)
        .unwrap_or(0);
    base + iac
}

/// True iff any of the three product slots is populated. An IAC add-on
/// alone does not count; the standalone IAC flow marks itself active via
/// [`SelectionStore::set_product_type`] instead.
pub fn has_product_selection(store: &SelectionStore) -> bool {
    store.auto_selection().is_some()
        || store.moto_selection().is_some()
        || store.multirisque_selection().is_some()
}

#[cfg(test)]
mod tests {
    use super::{current_product_details, has_product_selection, total_price, CurrentProduct};
    use crate::selection::fixtures::{
        auto_selection, iac_add_on, moto_selection, multirisque_selection,
    };
    use crate::selection::SelectionStore;

    #[test]
    fn total_price_is_zero_with_no_selection() {
        assert_eq!(total_price(&SelectionStore::new()), 0);
    }

    #[test]
    fn total_price_is_base_price_of_active_selection() {
        let mut store = SelectionStore::new();
        store.set_auto_selection(auto_selection(50_000));
        assert_eq!(total_price(&store), 50_000);
    }

    #[test]
    fn total_price_adds_iac_only_when_selected() {
        let mut store = SelectionStore::new();
        store.set_auto_selection(auto_selection(50_000));

        store.set_iac_add_on(iac_add_on(true, 5_000));
        assert_eq!(total_price(&store), 55_000);

        store.set_iac_add_on(iac_add_on(false, 5_000));
        assert_eq!(total_price(&store), 50_000);
    }

    #[test]
    fn iac_alone_prices_without_counting_as_product_selection() {
        let mut store = SelectionStore::new();
        store.set_iac_add_on(iac_add_on(true, 5_000));

        assert_eq!(total_price(&store), 5_000);
        assert!(!has_product_selection(&store));
    }

    #[test]
    fn has_product_selection_sees_any_populated_slot() {
        let mut store = SelectionStore::new();
        assert!(!has_product_selection(&store));

        store.set_multirisque_selection(multirisque_selection(120_000));
        assert!(has_product_selection(&store));
    }

    #[test]
    fn stale_auto_slot_wins_priority_after_switch_to_moto() {
        let mut store = SelectionStore::new();
        store.set_auto_selection(auto_selection(50_000));
        store.set_moto_selection(moto_selection(30_000));

        let current = current_product_details(&store).expect("two slots populated");
        assert!(matches!(current, CurrentProduct::Auto(auto) if auto.price == 50_000));
        assert_eq!(total_price(&store), 50_000);
    }

    #[test]
    fn priority_falls_through_to_moto_then_multirisque() {
        let mut store = SelectionStore::new();
        store.set_multirisque_selection(multirisque_selection(120_000));
        store.set_moto_selection(moto_selection(30_000));

        let current = current_product_details(&store).expect("slots populated");
        assert!(matches!(current, CurrentProduct::Moto(_)));

        store.clear_moto_selection();
        let current = current_product_details(&store).expect("multirisque remains");
        assert!(matches!(current, CurrentProduct::Multirisque(_)));
        assert_eq!(current.base_price(), 120_000);
    }
}
