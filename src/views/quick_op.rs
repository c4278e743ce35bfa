//! Markup for the quick-operation trigger, dropdown and modal.
//!
//! Everything starts hidden except the trigger; the controller takes over
//! visibility once the page is loaded.

use maud::{Markup, html};

use crate::{
    dom::{self, FormField, FormRow},
    endpoints,
    operation::{CategoryCatalog, OperationType, WalletOption},
    views::html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The label of the category placeholder, which is always the first option.
pub const NO_CATEGORY_LABEL: &str = "No category";

pub fn quick_op_dropdown() -> Markup {
    html! {
        div class="relative inline-block"
        {
            button
                type="button"
                id=(dom::DROPDOWN_TRIGGER)
                aria-haspopup="menu"
                aria-controls=(dom::DROPDOWN_MENU)
                class=(BUTTON_PRIMARY_STYLE)
            {
                "+ Quick operation"
            }

            ul
                id=(dom::DROPDOWN_MENU)
                role="menu"
                hidden
                class="absolute z-10 mt-2 w-48 rounded bg-white shadow dark:bg-gray-800"
            {
                @for operation_type in OperationType::ALL {
                    li role="none"
                    {
                        button
                            type="button"
                            role="menuitem"
                            data-operation-type=(operation_type.as_str())
                            class="block w-full px-4 py-2 text-left hover:bg-gray-100 dark:hover:bg-gray-700"
                        {
                            (operation_type.title())
                        }
                    }
                }
            }
        }
    }
}

fn wallet_row(
    row: FormRow,
    field: FormField,
    name: &str,
    label: &str,
    wallets: &[WalletOption],
) -> Markup {
    html! {
        div id=(row.element_id())
        {
            label for=(field.element_id()) class=(FORM_LABEL_STYLE) { (label) }

            select
                id=(field.element_id())
                name=(name)
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for wallet in wallets {
                    option value=(wallet.value) { (wallet.label) }
                }
            }
        }
    }
}

pub fn quick_op_modal(catalog: &CategoryCatalog, wallets: &[WalletOption]) -> Markup {
    html! {
        div
            id=(dom::MODAL_BACKDROP)
            hidden
            class="fixed inset-0 z-40 flex items-center justify-center bg-gray-900/50"
        {
            div
                id=(dom::MODAL_DIALOG)
                role="dialog"
                aria-modal="true"
                aria-labelledby=(FormField::Title.element_id())
                class="w-full max-w-md rounded-lg bg-white p-6 shadow dark:bg-gray-800"
            {
                div class="flex items-center justify-between mb-4"
                {
                    h2 id=(FormField::Title.element_id()) class="text-xl font-bold" {}

                    button
                        type="button"
                        id=(dom::MODAL_CLOSE)
                        aria-label="Close"
                        class="text-gray-500 hover:text-gray-900 dark:hover:text-white"
                    {
                        "✕"
                    }
                }

                form method="post" action=(endpoints::CREATE_TRANSACTION) class="space-y-4"
                {
                    input type="hidden" id=(FormField::Type.element_id()) name="operation_type";

                    div
                    {
                        label for=(FormField::Amount.element_id()) class=(FORM_LABEL_STYLE) { "Amount" }

                        input
                            id=(FormField::Amount.element_id())
                            name="amount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            placeholder="0.00"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    (wallet_row(FormRow::Wallet, FormField::Wallet, "wallet_id", "Wallet", wallets))
                    (wallet_row(FormRow::FromWallet, FormField::FromWallet, "from_wallet_id", "From wallet", wallets))
                    (wallet_row(FormRow::ToWallet, FormField::ToWallet, "to_wallet_id", "To wallet", wallets))

                    div id=(FormRow::Category.element_id())
                    {
                        label for=(FormField::Category.element_id()) class=(FORM_LABEL_STYLE) { "Category" }

                        select
                            id=(FormField::Category.element_id())
                            name="category_id"
                            class=(FORM_TEXT_INPUT_STYLE)
                        {
                            option value="" { (NO_CATEGORY_LABEL) }

                            @for option in catalog.all() {
                                option value=(option.value) { (option.label) }
                            }
                        }
                    }

                    div
                    {
                        label for=(FormField::Description.element_id()) class=(FORM_LABEL_STYLE) { "Description" }

                        input
                            id=(FormField::Description.element_id())
                            name="description"
                            type="text"
                            placeholder="Description"
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for=(FormField::OccurredAt.element_id()) class=(FORM_LABEL_STYLE) { "Date" }

                        input
                            id=(FormField::OccurredAt.element_id())
                            name="occurred_at"
                            type="datetime-local"
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
                }
            }
        }
    }
}
