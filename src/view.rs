//! Typed trait views over a shared [`TraitsData`].
//!
//! A trait view is a stateless wrapper around a [`TraitsDataPtr`] that
//! exposes the properties declared by one version of one trait. Views
//! forward every access to the store; nothing is cached or copied.
//!
//! Views are declared with [`define_trait!`](crate::define_trait), which
//! emits for each property `P` of type `T`:
//! * a getter returning `Result<Option<T>>`, failing only when a value of
//!   another variant is stored under the key,
//! * a defaulted getter returning `T`, falling back to the supplied default
//!   when the key is unset or holds another variant,
//! * a setter that imbues the trait and stores the value.

use tracing::debug;

use crate::data::{TraitsData, TraitsDataPtr};
use crate::error::{Result, TraitsError};
use crate::schema::TraitDescriptor;
use crate::value::PropertyType;

pub trait TraitView: Sized {
    const ID: &'static str;
    const DESCRIPTOR: &'static TraitDescriptor;

    /// Wraps `data` without imbuing anything.
    fn new(data: TraitsDataPtr) -> Self;
    fn traits_data(&self) -> &TraitsDataPtr;

    fn is_imbued(&self) -> bool {
        Self::is_imbued_to(self.traits_data())
    }
    fn is_imbued_to(data: &TraitsData) -> bool {
        data.has_trait(Self::ID)
    }
    fn imbue(&self) {
        Self::imbue_to(self.traits_data())
    }
    fn imbue_to(data: &TraitsData) {
        data.add_trait(Self::ID)
    }
}

pub fn get_property<T: PropertyType>(data: &TraitsData, trait_id: &str, key: &str) -> Result<Option<T>> {
    let Some(value) = data.get_trait_property(trait_id, key) else {
        return Ok(None);
    };
    let found = value.value_type();
    match T::narrow(value) {
        Some(narrowed) => Ok(Some(narrowed)),
        None => Err(TraitsError::InvalidStoredValueType {
            trait_id: trait_id.to_owned(),
            property: key.to_owned(),
            expected: T::VALUE_TYPE,
            found,
        }),
    }
}

pub fn get_property_or<T: PropertyType>(data: &TraitsData, trait_id: &str, key: &str, default: T) -> T {
    match get_property(data, trait_id, key) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            debug!(trait_id, key, error = %e, "returning default");
            default
        }
    }
}

pub fn set_property<T: PropertyType>(data: &TraitsData, trait_id: &str, key: &str, value: T) {
    data.set_trait_property(trait_id, key, value)
}

/// Declares a trait view type.
///
/// ```
/// #![deny(deprecated)]
/// traitsdata::define_trait! {
///     /// Where to find some content.
///     pub struct LocatableContentTraitV1 {
///         id: "demo:content.LocatableContent",
///         name: "LocatableContent",
///         version: 1,
///         description: "Where to find some content.",
///         usage: ["entity"],
///         deprecated: false,
///         properties: {
///             "location": String, "A URL." => get_location / get_location_or / set_location;
///         }
///     }
/// }
/// use traitsdata::{TraitsData, TraitView};
/// let view = LocatableContentTraitV1::new(TraitsData::make());
/// view.set_location("file:///tmp/a.exr");
/// assert_eq!(view.get_location().unwrap().as_deref(), Some("file:///tmp/a.exr"));
/// ```
///
/// A trait declared `deprecated: true` gets a deprecation notice in its docs
/// and is `#[deprecated]`:
///
/// ```compile_fail
/// #![deny(deprecated)]
/// traitsdata::define_trait! {
///     /// An old trait.
///     pub struct OldTraitV1 {
///         id: "demo:ns.Old",
///         name: "Old",
///         version: 1,
///         description: "An old trait.",
///         usage: [],
///         deprecated: true,
///         properties: {}
///     }
/// }
/// use traitsdata::{TraitsData, TraitView};
/// let _ = OldTraitV1::new(TraitsData::make());
/// ```
#[macro_export]
macro_rules! define_trait {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            id: $id:literal,
            name: $trait_name:literal,
            version: $version:literal,
            description: $description:literal,
            usage: [$($usage:literal),* $(,)?],
            deprecated: $deprecated:tt,
            properties: {
                $(
                    $key:literal : $ty:ty, $property_description:literal
                        => $get:ident / $get_or:ident / $set:ident;
                )*
            }
        }
    ) => {
        $crate::__view_struct! {
            $deprecated, "trait",
            $(#[$meta])*
            $vis struct $name {
                data: $crate::TraitsDataPtr,
            }
        }

        #[allow(deprecated)]
        impl $crate::TraitView for $name {
            const ID: &'static str = $id;
            const DESCRIPTOR: &'static $crate::schema::TraitDescriptor = &$crate::schema::TraitDescriptor {
                id: $id,
                name: $trait_name,
                version: $version,
                description: $description,
                usage: &[$($usage),*],
                deprecated: $deprecated,
                properties: &[$(
                    $crate::schema::PropertyDescriptor {
                        key: $key,
                        value_type: <$ty as $crate::PropertyType>::VALUE_TYPE,
                        description: $property_description,
                    }
                ),*],
            };

            fn new(data: $crate::TraitsDataPtr) -> Self {
                if $deprecated {
                    $crate::version::warn_deprecated("trait", $id);
                }
                Self { data }
            }
            fn traits_data(&self) -> &$crate::TraitsDataPtr {
                &self.data
            }
        }

        #[allow(deprecated)]
        impl $name {
            $(
                #[doc = concat!("Gets the value of the `", $key, "` property, if set.\n\n", $property_description)]
                pub fn $get(&self) -> $crate::Result<Option<$ty>> {
                    $crate::view::get_property::<$ty>(&self.data, $id, $key)
                }
                #[doc = concat!("Gets the value of the `", $key, "` property or the supplied default.\n\n", $property_description)]
                pub fn $get_or(&self, default: $ty) -> $ty {
                    $crate::view::get_property_or::<$ty>(&self.data, $id, $key, default)
                }
                #[doc = concat!("Sets the `", $key, "` property.\n\n", $property_description)]
                pub fn $set(&self, value: impl Into<$ty>) {
                    $crate::view::set_property::<$ty>(&self.data, $id, $key, value.into())
                }
            )*
        }
    };
}
