//! Post-processing passes for generated data-access code.
//!
//! The host generator builds one mutable artifact tree per table (record
//! class, dynamic SQL support class, mapper interface) and invokes each
//! registered plugin's hooks against it in a fixed order. The plugins in
//! this crate rewrite that tree in place:
//!
//! - [`CommentPlugin`] - javadoc synthesis from table/column remarks
//! - [`CodeStylePlugin`] - stable method ordering and parameter renaming
//! - [`LombokPlugin`] - accessor suppression via class-level annotations
//! - [`LogicalDeletePlugin`] - soft-delete-aware lookup and update methods
//!
//! Warnings never abort generation; they accumulate as [`Diagnostic`]s on
//! the [`GenerationContext`].

mod context;
mod diagnostic;
pub mod passes;
mod plugin;
mod runner;
pub mod testing;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use passes::{CodeStylePlugin, CommentPlugin, LogicalDeletePlugin, LombokPlugin};
pub use plugin::Plugin;
pub use runner::{GenerationEvent, PluginChain};
