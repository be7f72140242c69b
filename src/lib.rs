//! Bulk font inventory and replacement for layered design documents.
//!
//! fontswap walks a document's node tree, enumerates the fonts its text
//! uses, and replaces maximal runs of one font with another, streaming
//! progress to an interactive panel over line-delimited JSON.
//!
//! # Module layout
//!
//! - [`scan`] — font inventory over a node set
//! - [`catalog`] — full font catalog fetch
//! - [`replace`] — run detection and sequential replacement
//! - [`session`] — wires the engine to panel commands and notifications
//! - [`app`] — the stdio session loop
//! - [`cli`] / [`config`] / [`debug`] — argument parsing, configuration,
//!   and the logging bridge

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod debug;
pub mod replace;
pub mod scan;
pub mod session;
