//! Mutable generated-code model for the mapsmith generator passes.
//!
//! This crate models the tree of generated Java artifacts the host
//! generator builds per table: compilation units (record classes, dynamic
//! SQL support classes, mapper interfaces), their fields, methods and
//! parameters. Every artifact carries an ordered list of doc lines and of
//! annotation markers, mutable in place through the [`JavaElement`] trait.
//!
//! The tree is constructed once per table by the host, mutated in place by
//! the transformation passes, and rendered afterwards through [`format`].
//!
//! # Module Organization
//!
//! - `element` - The shared doc/annotation mutation surface
//! - `types` - Fully qualified Java type references and visibility
//! - `imports` - Ordered import sets for compilation units
//! - `method` - Methods and parameters
//! - `field` - Fields
//! - `class` - Top-level and inner classes
//! - `interface` - Mapper interfaces
//! - [`format`] - Rendering plus the structural formatter check

mod class;
mod code_builder;
mod element;
mod field;
pub mod format;
mod imports;
mod interface;
mod method;
mod types;

pub use class::{InnerClass, TopLevelClass};
pub use code_builder::{CodeBuilder, Indent};
pub use element::JavaElement;
pub use field::Field;
pub use imports::ImportList;
pub use interface::Interface;
pub use method::{Method, Parameter};
pub use types::{JavaType, Visibility};
