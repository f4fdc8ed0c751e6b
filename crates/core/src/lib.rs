//! `goofycoin-core` — form validation building blocks.
//!
//! This crate contains **pure** validation logic (no IO, no HTTP, no DOM).

pub mod error;
pub mod form;
pub mod payload;
pub mod user;
pub mod validation;

pub use error::{ErrorCategory, ValidationError, ValidationResult};
pub use form::{ErrorTarget, FormState, InputField, MemoryForm, NO_SELECTION, SelectList, Selection};
pub use payload::{CoinDraft, CreateUserPayload, TransferDraft};
pub use user::{UserId, UserSummary};
pub use validation::{
    Amount, COIN_ISSUER, Username, validate_amount, validate_coin_issuer, validate_receiver,
    validate_username,
};
