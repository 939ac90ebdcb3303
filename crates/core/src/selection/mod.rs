//! Single authoritative in-memory record of what the user is buying.
//!
//! The store is an explicitly constructed value, injected wherever it is
//! read, never a process-wide singleton. Mutations are synchronous and go
//! through the named operations below; there is no other write path.
//!
//! Setting one product slot does not clear its siblings. Prior selections
//! stay in memory as stale state and the selectors resolve the active one
//! deterministically (Auto, then Moto, then Multirisque).

pub mod selectors;

use serde::{Deserialize, Serialize};

use crate::domain::product::{
    AutoSelection, IacAddOn, MotoSelection, MultirisqueSelection, ProductType,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionStore {
    auto_selection: Option<AutoSelection>,
    moto_selection: Option<MotoSelection>,
    multirisque_selection: Option<MultirisqueSelection>,
    iac_add_on: Option<IacAddOn>,
    selected_product_type: Option<ProductType>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_selection(&self) -> Option<&AutoSelection> {
        self.auto_selection.as_ref()
    }

    pub fn moto_selection(&self) -> Option<&MotoSelection> {
        self.moto_selection.as_ref()
    }

    pub fn multirisque_selection(&self) -> Option<&MultirisqueSelection> {
        self.multirisque_selection.as_ref()
    }

    pub fn iac_add_on(&self) -> Option<&IacAddOn> {
        self.iac_add_on.as_ref()
    }

    pub fn selected_product_type(&self) -> Option<ProductType> {
        self.selected_product_type
    }

    /// Replaces the auto slot and makes AUTO the active product type.
    /// Payload shape is trusted as-is; validation belongs to the form
    /// schema, not the store.
    pub fn set_auto_selection(&mut self, selection: AutoSelection) {
        self.auto_selection = Some(selection);
        self.selected_product_type = Some(ProductType::Auto);
    }

    pub fn set_moto_selection(&mut self, selection: MotoSelection) {
        self.moto_selection = Some(selection);
        self.selected_product_type = Some(ProductType::Moto);
    }

    pub fn set_multirisque_selection(&mut self, selection: MultirisqueSelection) {
        self.multirisque_selection = Some(selection);
        self.selected_product_type = Some(ProductType::MultiriskPro);
    }

    /// Used by the standalone IAC flow, which has no base product slot.
    pub fn set_product_type(&mut self, product_type: ProductType) {
        self.selected_product_type = Some(product_type);
    }

    /// Silent no-op when no auto selection exists.
    pub fn toggle_auto_iac(&mut self, add_iac: bool) {
        if let Some(auto) = self.auto_selection.as_mut() {
            auto.add_iac = Some(add_iac);
        }
    }

    /// Replaces the IAC slot wholesale, independent of the active product.
    pub fn set_iac_add_on(&mut self, add_on: IacAddOn) {
        self.iac_add_on = Some(add_on);
    }

    /// Flips `iac_add_on.selected`; silent no-op when no record exists yet.
    pub fn toggle_iac_add_on(&mut self) {
        if let Some(add_on) = self.iac_add_on.as_mut() {
            add_on.selected = !add_on.selected;
        }
    }

    /// Resets all four slots and the active product type together. The only
    /// operation that wipes the three product slots at once.
    pub fn clear_product_selection(&mut self) {
        *self = Self::default();
    }

    /// Nulls the auto slot. The active product type is cleared only when it
    /// still points at AUTO; otherwise it already points elsewhere and is
    /// left untouched.
    pub fn clear_auto_selection(&mut self) {
        self.auto_selection = None;
        if self.selected_product_type == Some(ProductType::Auto) {
            self.selected_product_type = None;
        }
    }

    pub fn clear_moto_selection(&mut self) {
        self.moto_selection = None;
        if self.selected_product_type == Some(ProductType::Moto) {
            self.selected_product_type = None;
        }
    }

    pub fn clear_multirisque_selection(&mut self) {
        self.multirisque_selection = None;
        if self.selected_product_type == Some(ProductType::MultiriskPro) {
            self.selected_product_type = None;
        }
    }
}
