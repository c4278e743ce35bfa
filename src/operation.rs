//! Core types for quick operations: operation types, the category catalog and
//! the field visibility rules of the quick-operation modal.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The kind of financial operation entered through the quick-operation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    /// Money earned and paid into a single wallet.
    Income,
    /// Money spent from a single wallet.
    Expense,
    /// Money moved from one wallet to another.
    Transfer,
}

impl OperationType {
    /// All operation types in the order they appear in the dropdown menu.
    pub const ALL: [OperationType; 3] = [
        OperationType::Income,
        OperationType::Expense,
        OperationType::Transfer,
    ];

    /// The value used for this type in form fields and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Income => "INCOME",
            OperationType::Expense => "EXPENSE",
            OperationType::Transfer => "TRANSFER",
        }
    }

    /// The heading shown in the modal and the label of the menu item.
    pub fn title(&self) -> &'static str {
        match self {
            OperationType::Income => "New income",
            OperationType::Expense => "New expense",
            OperationType::Transfer => "New transfer",
        }
    }

    /// The category kind selectable for this operation type.
    ///
    /// Transfers have no categories.
    pub fn category_kind(&self) -> Option<CategoryKind> {
        match self {
            OperationType::Income => Some(CategoryKind::Income),
            OperationType::Expense => Some(CategoryKind::Expense),
            OperationType::Transfer => None,
        }
    }
}

impl Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(OperationType::Income),
            "EXPENSE" => Ok(OperationType::Expense),
            "TRANSFER" => Ok(OperationType::Transfer),
            _ => Err(Error::InvalidOperationType(s.to_owned())),
        }
    }
}

/// The operation type a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryKind {
    /// A category for income, e.g. "Salary".
    Income,
    /// A category for expenses, e.g. "Groceries".
    Expense,
}

impl FromStr for CategoryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(CategoryKind::Income),
            "EXPENSE" => Ok(CategoryKind::Expense),
            _ => Err(Error::InvalidCategoryKind(s.to_owned())),
        }
    }
}

/// A selectable category in the quick-operation modal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryOption {
    /// The value submitted with the form, usually the category ID.
    pub value: String,
    /// The text shown to the user.
    pub label: String,
    /// The operation type this category may be used with.
    #[serde(rename = "type")]
    pub associated_type: CategoryKind,
}

impl CategoryOption {
    /// Create a category option.
    pub fn new(value: &str, label: &str, associated_type: CategoryKind) -> Self {
        Self {
            value: value.to_owned(),
            label: label.to_owned(),
            associated_type,
        }
    }
}

/// The fixed list of categories supplied by the host page at load time.
///
/// The catalog is never mutated, it is only filtered into the subset shown
/// for the active operation type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCatalog(Vec<CategoryOption>);

impl CategoryCatalog {
    /// Create a catalog from the options in display order.
    pub fn new(options: Vec<CategoryOption>) -> Self {
        Self(options)
    }

    /// All options in the catalog, regardless of type.
    pub fn all(&self) -> &[CategoryOption] {
        &self.0
    }

    /// The options selectable for `operation_type`, in catalog order.
    ///
    /// Returns an empty list for [OperationType::Transfer].
    pub fn options_for(&self, operation_type: OperationType) -> Vec<&CategoryOption> {
        match operation_type.category_kind() {
            Some(kind) => self
                .0
                .iter()
                .filter(|option| option.associated_type == kind)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// A wallet the user can pick in the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletOption {
    /// The value submitted with the form, usually the wallet ID.
    pub value: String,
    /// The wallet name shown to the user.
    pub label: String,
}

/// Which rows of the quick-operation modal are shown.
///
/// This is derived from the operation type and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    /// The single wallet select used by income and expenses.
    pub single_wallet: bool,
    /// The source wallet select used by transfers.
    pub from_wallet: bool,
    /// The destination wallet select used by transfers.
    pub to_wallet: bool,
    /// The category select.
    pub category: bool,
}

impl FieldVisibility {
    /// The field visibility for `operation_type`.
    pub fn for_type(operation_type: OperationType) -> Self {
        let is_transfer = operation_type == OperationType::Transfer;

        Self {
            single_wallet: !is_transfer,
            from_wallet: is_transfer,
            to_wallet: is_transfer,
            category: !is_transfer,
        }
    }
}
