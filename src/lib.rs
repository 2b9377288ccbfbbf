//! Auth - a TOTP authenticator for the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── add           # Add a credential entry
//! │   ├── list          # List entries with live codes
//! │   ├── generate      # Print the code for one entry
//! │   ├── info          # Show entry details
//! │   ├── edit          # Modify an entry in place
//! │   ├── remove        # Delete an entry
//! │   ├── import/export # TOML/JSON bulk transfer
//! │   └── wipe          # Delete the whole database
//! └── core/             # Core library components
//!     ├── base32        # Lenient RFC 4648 Base32 decoding
//!     ├── totp          # RFC 6238 code generation (HMAC-SHA1)
//!     ├── entry         # Credential entry record
//!     ├── resolve       # Entry lookup by name, id, or position
//!     ├── validate      # Input-boundary validation
//!     ├── import_export # File format adapters
//!     └── store/        # Storage backends
//!         ├── mod       # Store trait + backend selection
//!         ├── file      # Structured TOML file backend
//!         ├── sqlite    # Indexed SQLite backend
//!         └── secrets   # OS secret-service offload
//! ```
//!
//! # Features
//!
//! - RFC 6238 TOTP over HMAC-SHA1 with 6-8 digit codes
//! - Two interchangeable storage backends (TOML file, SQLite)
//! - Optional secret-at-rest offload into the OS credential vault
//! - TOML and JSON import/export

pub mod cli;
pub mod core;
pub mod error;
