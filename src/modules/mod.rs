//! Modules layer - Infrastructure components behind the feature services
//!
//! Contains the persistence backends for items and categories.

pub mod store;
