// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # tfcost Store
//!
//! User settings for tfcost.
//!
//! This crate provides:
//!
//! - **SettingsStore**: User preferences with persistence
//! - **Persistence**: File I/O helpers for JSON data
//!
//! ## Usage
//!
//! ```ignore
//! use tfcost_store::SettingsStore;
//!
//! let store = SettingsStore::load_default().await?;
//! store.update(|s| s.timeout_secs = 300).await;
//! store.save().await?;
//! ```

pub mod error;
pub mod persistence;
pub mod settings_store;

pub use error::StoreError;
pub use persistence::{default_config_dir, default_settings_path, load_json, save_json};
pub use settings_store::{DEFAULT_TIMEOUT_SECS, LogLevel, Settings, SettingsStore};
