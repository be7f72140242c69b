//! Font naming, family grouping, and the system font catalog.
//!
//! This crate provides:
//! - [`FontName`] / [`FontFamilyGroup`] — the value types shared by the
//!   document model, the engine, and the panel protocol
//! - [`FontSource`] — the asynchronous enumerate/load contract the engine
//!   depends on
//! - [`SystemFonts`] — a fontdb-backed [`FontSource`] over the operating
//!   system's fonts plus any configured extra font directories

mod name;
mod source;
mod system;

pub use name::{FontFamilyGroup, FontName, group_by_family};
pub use source::{FontError, FontSource};
pub use system::{SystemFonts, style_name};
