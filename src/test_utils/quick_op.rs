use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::{
    dom::{FocusTarget, FormField, FormRow, WalletField},
    operation::CategoryOption,
    quick_op::{BalanceHints, QuickOpSurface},
};

/// An in-memory page for the quick-operation controller.
///
/// The category select starts with only the placeholder option, as rendered
/// by the host page.
#[derive(Debug)]
pub(crate) struct FakeSurface {
    pub dropdown_visible: bool,
    pub modal_visible: bool,
    pub modal_visibility_calls: usize,
    pub title: String,
    pub focused: Option<FocusTarget>,
    rows: HashMap<FormRow, bool>,
    values: HashMap<FormField, String>,
    category_options: Vec<(String, String)>,
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self {
            dropdown_visible: false,
            modal_visible: false,
            modal_visibility_calls: 0,
            title: String::new(),
            focused: None,
            rows: HashMap::new(),
            values: HashMap::new(),
            category_options: vec![(String::new(), "No category".to_owned())],
        }
    }
}

impl FakeSurface {
    pub fn is_row_visible(&self, row: FormRow) -> bool {
        self.rows.get(&row).copied().unwrap_or(true)
    }

    /// The values of the category options in display order, placeholder included.
    pub fn category_values(&self) -> Vec<String> {
        self.category_options
            .iter()
            .map(|(value, _)| value.clone())
            .collect()
    }

    /// Simulate the user editing a field.
    pub fn set_value_directly(&mut self, field: FormField, value: &str) {
        self.values.insert(field, value.to_owned());
    }
}

impl QuickOpSurface for FakeSurface {
    fn set_dropdown_visible(&mut self, visible: bool) {
        self.dropdown_visible = visible;
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
        self.modal_visibility_calls += 1;
    }

    fn set_row_visible(&mut self, row: FormRow, visible: bool) {
        self.rows.insert(row, visible);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn set_value(&mut self, field: FormField, value: &str) {
        self.values.insert(field, value.to_owned());
    }

    fn value(&self, field: FormField) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn remove_category_options(&mut self) {
        self.category_options.retain(|(value, _)| value.is_empty());
    }

    fn append_category_option(&mut self, option: &CategoryOption) {
        self.category_options
            .push((option.value.clone(), option.label.clone()));
    }

    fn focus(&mut self, target: FocusTarget) {
        self.focused = Some(target);
    }
}

/// Balance hooks that remember which wallets were refreshed.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingHints {
    refreshed: Arc<Mutex<Vec<WalletField>>>,
}

impl RecordingHints {
    pub fn refreshed(&self) -> Vec<WalletField> {
        self.refreshed.lock().unwrap().clone()
    }
}

impl BalanceHints for RecordingHints {
    fn refresh(&self, wallet: WalletField) {
        self.refreshed.lock().unwrap().push(wallet);
    }
}
