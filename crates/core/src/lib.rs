//! Core types for kollect
//!
//! This crate defines the foundational types used by the containers:
//! - Value: runtime value enum carried by every element
//! - ClassDef / TypeRegistry / Instance: nominal types and their instances
//! - TypeConstraint: the rule a container enforces on its elements
//! - Pair: immutable left/right tuple produced by zip
//! - CollectionPolicy: behaviour switches, loadable from TOML
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod class;
pub mod config;
pub mod constraint;
pub mod error;
pub mod pair;
pub mod value;

pub use class::{ClassDef, ClassKind, ClassRef, Instance, TypeRegistry, PAIR_CLASS};
pub use config::{AddAllMode, ChunkConstraint, CollectionPolicy, ZipMode};
pub use constraint::{PrimitiveKind, TypeConstraint};
pub use error::{Error, Operation, Result, Side};
pub use pair::Pair;
pub use value::Value;
