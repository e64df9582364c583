//! Shared types, errors, and configuration for Margin.
//!
//! This crate provides common types used across all other crates:
//! - Authentication claims and capability checks
//! - JWT validation for tokens issued by the identity service
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;

pub use auth::{Capability, Claims};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
