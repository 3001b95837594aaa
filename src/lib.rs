//! Kollect - runtime-typed collections
//!
//! Kollect gives callers array-like containers whose element type is checked
//! at mutation time, a suite of functional combinators, and a zip/unpair
//! engine that can rebuild both typed sources from a container of pairs.
//!
//! # Quick Start
//!
//! ```
//! use kollect::{TypeRegistry, TypedContainer, Instance, Value};
//!
//! let mut registry = TypeRegistry::new();
//! let item = registry.define_class("Item", None, &[]).unwrap();
//!
//! let mut items = TypedContainer::objects(&item);
//! items.add(Instance::new(&item).unwrap().with_field("a", 1)).unwrap();
//! assert!(items.add(Value::Int(1)).is_err());
//!
//! let mut counts = TypedContainer::integers();
//! counts.add(10).unwrap();
//!
//! let (items_again, counts_again) = items.zip(&counts).unwrap().unpair().unwrap();
//! assert_eq!(items_again, items);
//! assert_eq!(counts_again, counts);
//! ```
//!
//! # Architecture
//!
//! - `kollect-core`: values, type descriptors, constraints, errors, policies
//! - `kollect-containers`: containers, combinators, pairing, `Collection<T>`

pub use kollect_containers::*;
pub use kollect_core::*;
