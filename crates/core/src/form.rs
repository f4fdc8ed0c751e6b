//! Form state: the named inputs, selection lists and error slots a validator
//! reads from and writes to.
//!
//! In the browser these are DOM elements looked up by id. Everywhere else the
//! same contract is served by [`MemoryForm`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Value of a selection list option that means "nothing chosen".
pub const NO_SELECTION: &str = "0";

/// User-editable text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    /// Username for the create-user form.
    CreateUser,
    /// Amount for the create-coin form.
    CreateCoin,
    /// Amount for the transfer form.
    PayAmount,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::CreateUser => "createUser",
            InputField::CreateCoin => "createCoin",
            InputField::PayAmount => "payAmount",
        }
    }
}

/// Selection lists populated from the user listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectList {
    /// The acting user.
    SelectUser,
    /// Transfer receiver.
    Receiver,
}

impl SelectList {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectList::SelectUser => "selectUser",
            SelectList::Receiver => "receiverPkeySelect",
        }
    }
}

/// Inline error slots, one per form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorTarget {
    CreateUser,
    CreateCoin,
    PayCoin,
}

impl ErrorTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorTarget::CreateUser => "createUserError",
            ErrorTarget::CreateCoin => "createCoinError",
            ErrorTarget::PayCoin => "payCoinError",
        }
    }
}

/// The currently selected option of a selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Option value (a user identifier, or [`NO_SELECTION`]).
    pub value: String,
    /// Display text.
    pub text: String,
}

impl Selection {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// Whether this is the "nothing chosen" placeholder option.
    pub fn is_sentinel(&self) -> bool {
        self.value == NO_SELECTION
    }
}

/// Read/write access to a page's form elements.
///
/// Implementations only ever read inputs and selections; the sole mutation is
/// rendering or clearing an inline error message.
pub trait FormState {
    /// Current text of an input. Missing inputs read as empty.
    fn value(&self, field: InputField) -> String;

    /// Current selection of a list, if any option is selected.
    fn selection(&self, list: SelectList) -> Option<Selection>;

    /// Render `message` into the error slot.
    fn set_error(&mut self, target: ErrorTarget, message: &str);

    /// Clear the error slot.
    fn clear_error(&mut self, target: ErrorTarget) {
        self.set_error(target, "");
    }
}

/// In-memory [`FormState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    values: HashMap<InputField, String>,
    selections: HashMap<SelectList, Selection>,
    errors: HashMap<ErrorTarget, String>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, field: InputField, value: impl Into<String>) -> Self {
        self.set_value(field, value);
        self
    }

    pub fn with_selection(mut self, list: SelectList, selection: Selection) -> Self {
        self.select(list, selection);
        self
    }

    pub fn set_value(&mut self, field: InputField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn select(&mut self, list: SelectList, selection: Selection) {
        self.selections.insert(list, selection);
    }

    pub fn deselect(&mut self, list: SelectList) {
        self.selections.remove(&list);
    }

    /// The rendered error message, or `None` when the slot is empty.
    pub fn error(&self, target: ErrorTarget) -> Option<&str> {
        self.errors
            .get(&target)
            .map(String::as_str)
            .filter(|msg| !msg.is_empty())
    }
}

impl FormState for MemoryForm {
    fn value(&self, field: InputField) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn selection(&self, list: SelectList) -> Option<Selection> {
        self.selections.get(&list).cloned()
    }

    fn set_error(&mut self, target: ErrorTarget, message: &str) {
        self.errors.insert(target, message.to_string());
    }
}
