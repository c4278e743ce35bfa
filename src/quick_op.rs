//! The quick-operation controller: an action-type dropdown and a modal form
//! whose visible fields and selectable categories depend on the chosen type.
//!
//! The controller owns no DOM itself. It drives a [QuickOpSurface] supplied by
//! the host page, and optionally asks [BalanceHints] to refresh the balance
//! shown next to the wallet selects.

use crate::{
    dom::{ClickTarget, FocusTarget, FormField, FormRow, WalletField},
    operation::{CategoryCatalog, CategoryOption, FieldVisibility, OperationType},
};

/// The page elements the quick-operation controller reads and writes.
pub trait QuickOpSurface {
    /// Show or hide the operation type dropdown menu.
    fn set_dropdown_visible(&mut self, visible: bool);

    /// Show or hide the modal dialog and its backdrop.
    fn set_modal_visible(&mut self, visible: bool);

    /// Show or hide a form row.
    fn set_row_visible(&mut self, row: FormRow, visible: bool);

    /// Set the modal heading.
    fn set_title(&mut self, title: &str);

    /// Set the value of a form control.
    fn set_value(&mut self, field: FormField, value: &str);

    /// The current value of a form control, or an empty string if it has none.
    fn value(&self, field: FormField) -> String;

    /// Remove every category option except the "no category" placeholder.
    fn remove_category_options(&mut self);

    /// Append an option to the category select, after the existing options.
    fn append_category_option(&mut self, option: &CategoryOption);

    /// Move input focus to an element.
    fn focus(&mut self, target: FocusTarget);
}

/// Hooks the host page may provide to refresh the balance hint of a wallet select.
pub trait BalanceHints {
    /// Refresh the balance hint shown for `wallet`.
    fn refresh(&self, wallet: WalletField);
}

/// Whether the modal is open, and for which operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// The modal is hidden.
    Closed,
    /// The modal is shown for entering an operation of the given type.
    Open(OperationType),
}

/// Drives the quick-operation dropdown and modal.
///
/// The controller starts with both the dropdown and the modal closed.
pub struct QuickOpController<S> {
    surface: S,
    catalog: CategoryCatalog,
    hints: Option<Box<dyn BalanceHints>>,
    dropdown_open: bool,
    modal: ModalState,
}

impl<S: QuickOpSurface> QuickOpController<S> {
    /// Create a controller for `surface`, keeping `catalog` as the source of
    /// every category list it builds.
    pub fn new(surface: S, catalog: CategoryCatalog) -> Self {
        Self {
            surface,
            catalog,
            hints: None,
            dropdown_open: false,
            modal: ModalState::Closed,
        }
    }

    /// Use `hints` to refresh wallet balance hints when the modal opens.
    pub fn with_hints(mut self, hints: Box<dyn BalanceHints>) -> Self {
        self.hints = Some(hints);
        self
    }

    /// Whether the dropdown menu is shown.
    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// The state of the modal.
    pub fn modal_state(&self) -> ModalState {
        self.modal
    }

    /// The page surface driven by this controller.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Show the dropdown menu.
    pub fn open_dropdown(&mut self) {
        self.dropdown_open = true;
        self.surface.set_dropdown_visible(true);
    }

    /// Hide the dropdown menu. Does nothing if it is already hidden.
    pub fn close_dropdown(&mut self) {
        if !self.dropdown_open {
            return;
        }

        self.dropdown_open = false;
        self.surface.set_dropdown_visible(false);
    }

    /// Open the dropdown if it is closed, otherwise close it.
    pub fn toggle_dropdown(&mut self) {
        if self.dropdown_open {
            self.close_dropdown();
        } else {
            self.open_dropdown();
        }
    }

    /// Handle the user picking `operation_type` from the dropdown menu.
    pub fn select_type(&mut self, operation_type: OperationType) {
        self.close_dropdown();
        self.open_modal(operation_type);
    }

    /// Open the modal for entering an operation of `operation_type`.
    ///
    /// The form is reset, only the rows relevant to the type are shown, the
    /// category list is rebuilt from the catalog and focus moves to the
    /// amount input.
    pub fn open_modal(&mut self, operation_type: OperationType) {
        tracing::debug!("Opening quick-operation modal for {operation_type}");
        self.modal = ModalState::Open(operation_type);

        self.surface
            .set_value(FormField::Type, operation_type.as_str());
        self.surface.set_title(operation_type.title());
        self.apply_visibility(FieldVisibility::for_type(operation_type));
        self.rebuild_categories(operation_type);

        for field in [
            FormField::Amount,
            FormField::Description,
            FormField::Category,
            FormField::OccurredAt,
        ] {
            self.surface.set_value(field, "");
        }

        self.refresh_hints(operation_type);
        self.surface.set_modal_visible(true);
        self.surface.focus(FocusTarget::Amount);
    }

    /// Close the modal and return focus to the dropdown trigger.
    ///
    /// Does nothing if the modal is already closed.
    pub fn close_modal(&mut self) {
        if self.modal == ModalState::Closed {
            return;
        }

        tracing::debug!("Closing quick-operation modal");
        self.modal = ModalState::Closed;
        self.surface.set_modal_visible(false);
        self.surface.focus(FocusTarget::Trigger);
    }

    /// Handle a click anywhere on the page.
    pub fn handle_click(&mut self, target: ClickTarget) {
        if !matches!(target, ClickTarget::Trigger | ClickTarget::Menu) {
            self.close_dropdown();
        }

        match target {
            ClickTarget::Trigger => self.toggle_dropdown(),
            ClickTarget::Backdrop | ClickTarget::CloseButton => self.close_modal(),
            ClickTarget::Menu | ClickTarget::Dialog | ClickTarget::Outside => {}
        }
    }

    /// Handle the Escape key: closes the modal if it is open, otherwise the dropdown.
    pub fn handle_escape(&mut self) {
        match self.modal {
            ModalState::Open(_) => self.close_modal(),
            ModalState::Closed => self.close_dropdown(),
        }
    }

    fn apply_visibility(&mut self, visibility: FieldVisibility) {
        self.surface
            .set_row_visible(FormRow::Wallet, visibility.single_wallet);
        self.surface
            .set_row_visible(FormRow::FromWallet, visibility.from_wallet);
        self.surface
            .set_row_visible(FormRow::ToWallet, visibility.to_wallet);
        self.surface
            .set_row_visible(FormRow::Category, visibility.category);
    }

    /// Replace the category options with the catalog entries for `operation_type`.
    ///
    /// Options are removed and re-appended rather than hidden, since hiding
    /// individual options is not honoured by every mobile browser. The
    /// placeholder is never removed; [open_modal](Self::open_modal) selects it
    /// afterwards.
    fn rebuild_categories(&mut self, operation_type: OperationType) {
        self.surface.remove_category_options();
        for option in self.catalog.options_for(operation_type) {
            self.surface.append_category_option(option);
        }
    }

    fn refresh_hints(&self, operation_type: OperationType) {
        let Some(hints) = &self.hints else {
            return;
        };

        match operation_type {
            OperationType::Transfer => {
                hints.refresh(WalletField::From);
                hints.refresh(WalletField::To);
            }
            OperationType::Income | OperationType::Expense => hints.refresh(WalletField::Single),
        }
    }
}
