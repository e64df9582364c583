//! Core business logic for Margin.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, aggregation rules, and descriptor
//! builders live here.
//!
//! # Modules
//!
//! - `action` - UI window-action descriptors for opening expense records
//! - `profitability` - Project profitability report assembly

pub mod action;
pub mod profitability;
