//! # replyscan
//!
//! Binds decoded command/response replies to typed Rust values:
//! - Positional scans of a reply into heterogeneous destinations
//! - Name-based scans of field/value replies into structs
//! - Flattening structs back into field/value command arguments
//! - A per-type cache of compiled field tables, safe for concurrent use
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Protocol decoder (external)                  │
//! │                    -> [Value, Value, ...]                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Binder                               │
//! │         scan / scan_struct / append_struct                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Convert    │          │ Spec Cache  │
//!   │  (Slots)    │          │  (RwLock)   │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │    Spec     │
//!                           │  Compiler   │
//!                           └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use replyscan::{record, Binder, Value};
//!
//! #[derive(Default)]
//! struct Album {
//!     title: String,
//!     rating: i32,
//! }
//!
//! record!(Album {
//!     value title: "Title" as "title";
//!     value rating: "Rating" as "rating";
//! });
//!
//! let binder = Binder::default();
//! let reply: Vec<Value> = ["title", "Red", "rating", "5"].into_iter().map(Value::from).collect();
//!
//! let mut album = Album::default();
//! binder.scan_struct(&reply, &mut album).unwrap();
//! assert_eq!(album.title, "Red");
//! assert_eq!(album.rating, 5);
//!
//! let args = binder.append_struct(Vec::new(), &album).unwrap();
//! assert_eq!(args.len(), 4);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod value;
pub mod convert;
pub mod record;
pub mod spec;
pub mod cache;
pub mod binder;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, Result, ScanError};
pub use config::Config;
pub use value::{Arg, ToArg, Value};
pub use convert::{Scan, Skip, Slot};
pub use record::{FieldDesc, FieldKind, FieldMut, FieldRef, Layout, Record};
pub use spec::{FieldSpec, StructSpec};
pub use cache::SpecCache;
pub use binder::{scan, Binder};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of replyscan
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
