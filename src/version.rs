//! Version naming rules.
//!
//! Every version of a trait or specification is its own type. Version 1
//! keeps the bare identifier; later versions append `.v<N>`. An
//! unversioned symbol is a newtype over version 1 that logs a
//! deprecation warning when constructed.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::error::{Result, TraitsError};

lazy_static! {
    static ref VERSION_SUFFIX: Regex = Regex::new(r"^(?P<base>.+)\.v(?P<version>[0-9]+)$").unwrap();
}

pub fn versioned_id(base: &str, version: u32) -> String {
    if version <= 1 {
        base.to_owned()
    } else {
        format!("{}.v{}", base, version)
    }
}

/// Splits an identifier into its base and the version its suffix implies.
/// Unsuffixed identifiers are version 1.
pub fn split_versioned_id(id: &str) -> (&str, u32) {
    match VERSION_SUFFIX.captures(id) {
        Some(caps) => match (caps.name("base"), caps["version"].parse::<u32>()) {
            (Some(base), Ok(version)) => (base.as_str(), version),
            _ => (id, 1),
        },
        None => (id, 1),
    }
}

/// Checks that a declaration's identifier carries the suffix its version
/// requires: none for version 1, `.v<N>` otherwise.
pub fn check_versioned_id(id: &str, version: u32) -> Result<()> {
    if version == 0 {
        return Err(TraitsError::InvalidVersion { id: id.to_owned(), version });
    }
    let (base, implied) = split_versioned_id(id);
    if implied != version || versioned_id(base, version) != id {
        return Err(TraitsError::VersionMismatch {
            id: id.to_owned(),
            declared: version,
            implied,
        });
    }
    Ok(())
}

pub fn warn_deprecated(kind: &str, id: &str) {
    warn!(target: "traitsdata::deprecation", "The '{}' {} is deprecated.", id, kind);
}

pub fn warn_unversioned(kind: &str, unversioned: &str, versioned: &str) {
    warn!(
        target: "traitsdata::deprecation",
        "Unversioned {} view classes are deprecated. Please switch from {} to {}.",
        kind, unversioned, versioned
    );
}

/// Emits the struct of a declared view. Types declared `deprecated: true`
/// carry a deprecation notice in their docs and a `#[deprecated]` attribute.
#[doc(hidden)]
#[macro_export]
macro_rules! __view_struct {
    (false, $kind:literal, $(#[$meta:meta])* $vis:vis struct $name:ident $body:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name $body
    };
    (true, "trait", $(#[$meta:meta])* $vis:vis struct $name:ident $body:tt) => {
        $(#[$meta])*
        #[doc = ""]
        #[doc = "**Deprecated:** This trait is flagged for future removal."]
        #[deprecated(note = "This trait is flagged for future removal.")]
        #[derive(Debug, Clone)]
        $vis struct $name $body
    };
    (true, "specification", $(#[$meta:meta])* $vis:vis struct $name:ident $body:tt) => {
        $(#[$meta])*
        #[doc = ""]
        #[doc = "**Deprecated:** This specification is flagged for future removal."]
        #[deprecated(note = "This specification is flagged for future removal.")]
        #[derive(Debug, Clone)]
        $vis struct $name $body
    };
}

/// Declares the unversioned alias of a trait, delegating to version 1.
///
/// The alias is `#[deprecated]`, so using it under `deny(deprecated)` fails:
///
/// ```compile_fail
/// #![deny(deprecated)]
/// traitsdata::define_trait! {
///     /// Some trait.
///     pub struct SomeTraitV1 {
///         id: "demo:ns.Some",
///         name: "Some",
///         version: 1,
///         description: "Some trait.",
///         usage: [],
///         deprecated: false,
///         properties: {}
///     }
/// }
/// traitsdata::define_unversioned_trait! {
///     /// Some trait.
///     pub struct SomeTrait => SomeTraitV1;
/// }
/// use traitsdata::{TraitsData, TraitView};
/// let _ = SomeTrait::new(TraitsData::make());
/// ```
///
/// while version 1 itself stays clean:
///
/// ```
/// #![deny(deprecated)]
/// traitsdata::define_trait! {
///     /// Some trait.
///     pub struct SomeTraitV1 {
///         id: "demo:ns.Some",
///         name: "Some",
///         version: 1,
///         description: "Some trait.",
///         usage: [],
///         deprecated: false,
///         properties: {}
///     }
/// }
/// traitsdata::define_unversioned_trait! {
///     /// Some trait.
///     pub struct SomeTrait => SomeTraitV1;
/// }
/// use traitsdata::{TraitsData, TraitView};
/// let _ = SomeTraitV1::new(TraitsData::make());
/// ```
#[macro_export]
macro_rules! define_unversioned_trait {
    ($(#[$meta:meta])* $vis:vis struct $name:ident => $v1:ident;) => {
        $(#[$meta])*
        #[doc = ""]
        #[doc = concat!("**Deprecated:** Unversioned trait view classes are deprecated, please use [`", stringify!($v1), "`] explicitly.")]
        #[deprecated(note = "Unversioned trait view classes are deprecated, please use the version 1 view explicitly.")]
        #[derive(Debug, Clone)]
        $vis struct $name($v1);

        #[allow(deprecated)]
        impl $crate::TraitView for $name {
            const ID: &'static str = <$v1 as $crate::TraitView>::ID;
            const DESCRIPTOR: &'static $crate::schema::TraitDescriptor = <$v1 as $crate::TraitView>::DESCRIPTOR;

            fn new(data: $crate::TraitsDataPtr) -> Self {
                $crate::version::warn_unversioned("trait", stringify!($name), stringify!($v1));
                Self(<$v1 as $crate::TraitView>::new(data))
            }
            fn traits_data(&self) -> &$crate::TraitsDataPtr {
                <$v1 as $crate::TraitView>::traits_data(&self.0)
            }
        }

        #[allow(deprecated)]
        impl ::std::ops::Deref for $name {
            type Target = $v1;
            fn deref(&self) -> &$v1 {
                &self.0
            }
        }

        #[allow(deprecated)]
        impl From<$name> for $v1 {
            fn from(unversioned: $name) -> $v1 {
                unversioned.0
            }
        }
    };
}

/// Declares the unversioned alias of a specification, delegating to
/// version 1. `create()` goes through `new()` and so also warns.
#[macro_export]
macro_rules! define_unversioned_specification {
    ($(#[$meta:meta])* $vis:vis struct $name:ident => $v1:ident;) => {
        $(#[$meta])*
        #[doc = ""]
        #[doc = concat!("**Deprecated:** Unversioned specification view classes are deprecated, please use [`", stringify!($v1), "`] explicitly.")]
        #[deprecated(note = "Unversioned specification view classes are deprecated, please use the version 1 view explicitly.")]
        #[derive(Debug, Clone)]
        $vis struct $name($v1);

        #[allow(deprecated)]
        impl $crate::SpecificationView for $name {
            const ID: &'static str = <$v1 as $crate::SpecificationView>::ID;
            const DESCRIPTOR: &'static $crate::schema::SpecificationDescriptor = <$v1 as $crate::SpecificationView>::DESCRIPTOR;
            const TRAIT_SET: &'static [&'static str] = <$v1 as $crate::SpecificationView>::TRAIT_SET;

            fn new(data: $crate::TraitsDataPtr) -> Self {
                $crate::version::warn_unversioned("specification", stringify!($name), stringify!($v1));
                Self(<$v1 as $crate::SpecificationView>::new(data))
            }
            fn traits_data(&self) -> &$crate::TraitsDataPtr {
                <$v1 as $crate::SpecificationView>::traits_data(&self.0)
            }
        }

        #[allow(deprecated)]
        impl ::std::ops::Deref for $name {
            type Target = $v1;
            fn deref(&self) -> &$v1 {
                &self.0
            }
        }

        #[allow(deprecated)]
        impl From<$name> for $v1 {
            fn from(unversioned: $name) -> $v1 {
                unversioned.0
            }
        }
    };
}
