//! Libris - Library Circulation Policy Engine
//!
//! Business rules for a library management system: catalog validation, the
//! borrow/return workflow, tiered late-fee arithmetic, search, patron
//! reporting, and payment-gateway settlement of fees. Storage and payment
//! backends are supplied by the caller through the [`repository::LibraryStore`]
//! and [`payment::PaymentGateway`] traits.

pub mod config;
pub mod error;
pub mod models;
pub mod payment;
pub mod repository;
pub mod services;

pub use config::{AppConfig, CirculationConfig};
pub use error::{AppError, AppResult};
pub use services::Services;
