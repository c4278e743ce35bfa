//! The fixed element identifiers shared by the host page and the controllers.
//!
//! The views render elements with these IDs and the controllers address them
//! through a surface trait, so the two sides cannot drift apart.

/// The button that opens the operation type dropdown.
pub const DROPDOWN_TRIGGER: &str = "quick-op-trigger";
/// The dropdown menu listing the operation types.
pub const DROPDOWN_MENU: &str = "quick-op-menu";
/// The backdrop behind the modal dialog.
pub const MODAL_BACKDROP: &str = "quick-op-backdrop";
/// The modal dialog containing the operation form.
pub const MODAL_DIALOG: &str = "quick-op-modal";
/// The button inside the modal that closes it.
pub const MODAL_CLOSE: &str = "quick-op-close";
/// The push notification toggle button.
pub const PUSH_TOGGLE: &str = "push-toggle";
/// The text describing the push notification status.
pub const PUSH_STATUS: &str = "push-status";
/// The button that asks the server to send a test notification.
pub const PUSH_TEST: &str = "push-test";

/// A form control inside the quick-operation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// The hidden input holding the operation type.
    Type,
    /// The modal heading.
    Title,
    /// The amount input.
    Amount,
    /// The description input.
    Description,
    /// The single wallet select for income and expenses.
    Wallet,
    /// The source wallet select for transfers.
    FromWallet,
    /// The destination wallet select for transfers.
    ToWallet,
    /// The category select.
    Category,
    /// The date and time the operation happened.
    OccurredAt,
}

impl FormField {
    /// The ID of the element for this field.
    pub fn element_id(&self) -> &'static str {
        match self {
            FormField::Type => "quick-op-type",
            FormField::Title => "quick-op-title",
            FormField::Amount => "quick-op-amount",
            FormField::Description => "quick-op-description",
            FormField::Wallet => "quick-op-wallet",
            FormField::FromWallet => "quick-op-from-wallet",
            FormField::ToWallet => "quick-op-to-wallet",
            FormField::Category => "quick-op-category",
            FormField::OccurredAt => "quick-op-occurred-at",
        }
    }
}

/// A row wrapping a label and control that can be shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormRow {
    /// The row of the single wallet select.
    Wallet,
    /// The row of the source wallet select.
    FromWallet,
    /// The row of the destination wallet select.
    ToWallet,
    /// The row of the category select.
    Category,
}

impl FormRow {
    /// The ID of the element for this row.
    pub fn element_id(&self) -> &'static str {
        match self {
            FormRow::Wallet => "quick-op-wallet-row",
            FormRow::FromWallet => "quick-op-from-wallet-row",
            FormRow::ToWallet => "quick-op-to-wallet-row",
            FormRow::Category => "quick-op-category-row",
        }
    }
}

/// A wallet select whose balance hint can be refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletField {
    /// The single wallet of an income or expense.
    Single,
    /// The source wallet of a transfer.
    From,
    /// The destination wallet of a transfer.
    To,
}

impl WalletField {
    /// The form field holding this wallet.
    pub fn form_field(&self) -> FormField {
        match self {
            WalletField::Single => FormField::Wallet,
            WalletField::From => FormField::FromWallet,
            WalletField::To => FormField::ToWallet,
        }
    }
}

/// An element that can receive input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The amount input in the modal.
    Amount,
    /// The dropdown trigger button.
    Trigger,
}

impl FocusTarget {
    /// The ID of the focused element.
    pub fn element_id(&self) -> &'static str {
        match self {
            FocusTarget::Amount => FormField::Amount.element_id(),
            FocusTarget::Trigger => DROPDOWN_TRIGGER,
        }
    }
}

/// Where a click landed, as far as the quick-operation controller cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dropdown trigger button.
    Trigger,
    /// Inside the dropdown menu.
    Menu,
    /// The backdrop around the modal dialog.
    Backdrop,
    /// Inside the modal dialog.
    Dialog,
    /// The close button of the modal dialog.
    CloseButton,
    /// Anywhere else on the page.
    Outside,
}

impl ClickTarget {
    /// Resolve the target from the IDs of the clicked element and its ancestors,
    /// innermost first.
    pub fn from_element_path<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        for id in ids {
            match id {
                MODAL_CLOSE => return ClickTarget::CloseButton,
                MODAL_DIALOG => return ClickTarget::Dialog,
                MODAL_BACKDROP => return ClickTarget::Backdrop,
                DROPDOWN_MENU => return ClickTarget::Menu,
                DROPDOWN_TRIGGER => return ClickTarget::Trigger,
                _ => {}
            }
        }

        ClickTarget::Outside
    }
}
