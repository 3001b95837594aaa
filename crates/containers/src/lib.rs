//! Typed containers for kollect
//!
//! This crate provides:
//! - TypedContainer: runtime-typed, position-keyed container
//! - ContainerKind: the concrete kinds (generic, integer, string, object)
//! - Combinators: each, map, filter, chain, partition, reduce, fold, all,
//!   any, find, chunk
//! - Pairing: zip into a PairedContainer and unpair back into two containers
//! - Collection: the same suite with a compile-time element type
//!
//! # Quick Start
//!
//! ```
//! use kollect_containers::TypedContainer;
//!
//! let mut ids = TypedContainer::integers();
//! ids.add(5).unwrap();
//! assert!(ids.add("5").is_err());
//!
//! let mut names = TypedContainer::strings();
//! names.add_all(["five", "six"]).unwrap();
//!
//! let paired = ids.zip(&names).unwrap();
//! assert_eq!(paired.count(), 1);
//!
//! let (ids_again, names_again) = paired.unpair().unwrap();
//! assert_eq!(ids_again, ids);
//! assert_eq!(names_again.count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
mod combinators;
pub mod container;
pub mod kind;
pub mod pairing;
pub mod slots;

pub use collection::Collection;
pub use container::{Iter, TypedContainer};
pub use kind::ContainerKind;
pub use pairing::{Origin, PairedContainer, Provenance};
pub use slots::Slots;
