//! Typed client for the Barber Study quiz backend.
//!
//! The backend is an external collaborator: this crate only knows the
//! request/response shapes. Every response is wrapped as `{ "data": T }`
//! and every request carries the bearer token found in the active
//! [`CredentialStore`] (if any).

mod client;
mod config;
mod credentials;
mod error;
pub mod models;

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod questions;
pub mod quiz;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, NATIVE_ORIGIN};
pub use credentials::{CredentialStore, MemoryCredentials};
pub use error::ApiError;
pub use quiz::QuizApi;
