//! `goofycoin-web` — browser bindings for the goofycoin forms.
//!
//! On `wasm32` this exports `createUser`, `createCoin`, `createTx` and
//! `refreshUsers` for the page's buttons. The page's elements are reached
//! through [`dom::DomForm`], a DOM-backed `FormState`.

pub mod options;

#[cfg(target_arch = "wasm32")]
pub mod bindings;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use options::{RECEIVER_PLACEHOLDER, receiver_options, user_options};
