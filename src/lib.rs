//! Incentivist - a terminal client for rewards policy administration
//!
//! This library provides a terminal-based interface for reviewing and
//! deleting the reward policies of an internal bank incentive platform.
//! Policies are loaded from a snapshot export, browsed in a Ratatui UI,
//! and deleted through an injectable backend seam.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`policy`] - Policy entities and derived reward math
//! * [`backend`] - Injectable seam for policy mutations
//! * [`service`] - Policy collection and deletion service
//! * [`ui`] - Terminal user interface components

/// Backend seam for policy mutations
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Policy entities and derived reward math
pub mod policy;

/// Policy service owning the loaded collection and deletions
pub mod service;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export entity types for convenient access
pub use policy::{Condition, Policy, PolicyCategory, PolicyStatus, RewardTotals, WormReward};
