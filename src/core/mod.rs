//! Core library components.
//!
//! This module contains the reusable business logic for code generation
//! and credential storage. Nothing in here prints user-facing text; the
//! CLI layer owns all messaging.

pub mod base32;
pub mod entry;
pub mod import_export;
pub mod resolve;
pub mod store;
pub mod totp;
pub mod validate;
