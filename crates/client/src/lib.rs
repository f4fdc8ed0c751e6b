//! `goofycoin-client`
//!
//! **Responsibility:** turn validated forms into backend requests.
//!
//! This crate provides:
//! - Client configuration (backend base URL)
//! - A [`Transport`] seam with a `reqwest` implementation
//! - A soft-failure [`Dispatcher`]: requests settle into a [`DispatchOutcome`]
//!   value, never an error
//! - The [`FormController`] behind the create-user, create-coin and transfer
//!   forms

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod transport;

pub use config::{ClientConfig, ConfigError};
pub use controller::{DirectoryError, FormController};
pub use dispatch::{DispatchFailure, DispatchOutcome, DispatchTask, Dispatcher};
pub use transport::{HttpResponse, HttpTransport, Transport, TransportError};
