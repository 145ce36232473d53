//! traitsdata – a dynamic trait/property store with typed, versioned views.
//!
//! Independently built components exchange loosely structured metadata
//! through one canonical store, the [`TraitsData`]:
//! * A *trait* is identified by a stable, namespaced string such as
//!   `"acme-media:content.LocatableContent"`.
//! * A trait is *imbued* on a store when its identifier is present,
//!   whether or not any of its properties hold a value.
//! * Each imbued trait maps property keys to a [`Value`] (`Bool`, `Int`,
//!   `Float` or `Str`). The store itself is dynamically typed.
//!
//! Typed access is layered on top through *views*, stateless wrappers
//! around a shared [`TraitsDataPtr`]:
//! * A trait view ([`TraitView`]) exposes the properties declared by one
//!   version of one trait, with optional and defaulted getters plus setters.
//! * A specification view ([`SpecificationView`]) bundles a fixed set of
//!   traits and can `create()` a store pre-imbued with exactly that set.
//!
//! Views are declared from a schema with [`define_trait!`],
//! [`define_specification!`] and, for the unversioned aliases of version
//! 1, [`define_unversioned_trait!`] and [`define_unversioned_specification!`].
//!
//! ## Modules
//! * [`value`] – The [`value::Value`] union and the [`value::PropertyType`] trait.
//! * [`data`] – The shared [`data::TraitsData`] store.
//! * [`view`] – Trait views and the typed getter/setter helpers.
//! * [`specification`] – Specification views.
//! * [`version`] – Versioned identifiers and unversioned aliases.
//! * [`schema`] – Descriptors of declared traits/specifications and the [`schema::Catalog`].
//! * [`settings`] – Settings for the `traitsdata` binary.
//!
//! ## Quick Start
//! ```
//! use traitsdata::{TraitsData, Value};
//! let data = TraitsData::make();
//! data.set_trait_property("ns:T", "count", 123);
//! assert!(data.has_trait("ns:T"));
//! assert_eq!(data.get_trait_property("ns:T", "count"), Some(Value::Int(123)));
//! assert_eq!(data.get_trait_property("ns:T", "other"), None);
//! ```
//!
//! ## Sharing
//! Stores are reference counted. Every view and holder sees writes made
//! through any other immediately. Each call on a store is atomic, but a
//! sequence of calls is not; callers sharing a store across threads
//! serialize such sequences themselves.

pub mod data;
pub mod error;
pub mod schema;
pub mod settings;
pub mod specification;
pub mod value;
pub mod version;
pub mod view;

pub use data::{TraitSet, TraitsData, TraitsDataPtr};
pub use error::{Result, TraitsError};
pub use specification::SpecificationView;
pub use value::{PropertyType, Value, ValueType};
pub use view::TraitView;
