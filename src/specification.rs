//! Specification views: one typed façade over a fixed set of traits.

use crate::data::{TraitSet, TraitsData, TraitsDataPtr};
use crate::schema::SpecificationDescriptor;

pub trait SpecificationView: Sized {
    const ID: &'static str;
    const DESCRIPTOR: &'static SpecificationDescriptor;
    /// The identifier of every trait version the specification references.
    const TRAIT_SET: &'static [&'static str];

    /// Wraps `data` as is. Nothing is imbued, so traits and properties
    /// already present are preserved and extended.
    fn new(data: TraitsDataPtr) -> Self;
    fn traits_data(&self) -> &TraitsDataPtr;

    fn trait_set() -> TraitSet {
        Self::TRAIT_SET.iter().map(|id| (*id).to_owned()).collect()
    }
    /// Wraps a new store imbued with exactly the specification's traits.
    fn create() -> Self {
        Self::new(TraitsData::make_with_traits(Self::TRAIT_SET.iter().copied()))
    }
}

/// Declares a specification view type. Each entry under `traits` names an
/// accessor method and the trait view type it returns.
#[macro_export]
macro_rules! define_specification {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            id: $id:literal,
            name: $spec_name:literal,
            version: $version:literal,
            description: $description:literal,
            usage: [$($usage:literal),* $(,)?],
            deprecated: $deprecated:tt,
            traits: {
                $( $accessor:ident : $trait_view:ty ),* $(,)?
            }
        }
    ) => {
        $crate::__view_struct! {
            $deprecated, "specification",
            $(#[$meta])*
            $vis struct $name {
                data: $crate::TraitsDataPtr,
            }
        }

        #[allow(deprecated)]
        impl $crate::SpecificationView for $name {
            const ID: &'static str = $id;
            const DESCRIPTOR: &'static $crate::schema::SpecificationDescriptor = &$crate::schema::SpecificationDescriptor {
                id: $id,
                name: $spec_name,
                version: $version,
                description: $description,
                usage: &[$($usage),*],
                deprecated: $deprecated,
                traits: &[$( <$trait_view as $crate::TraitView>::DESCRIPTOR ),*],
            };
            const TRAIT_SET: &'static [&'static str] = &[$( <$trait_view as $crate::TraitView>::ID ),*];

            fn new(data: $crate::TraitsDataPtr) -> Self {
                if $deprecated {
                    $crate::version::warn_deprecated("specification", $id);
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
                #[doc = concat!("Returns the view for the `", stringify!($trait_view), "` trait wrapped around the data held in this instance.")]
                #[doc = ""]
                #[doc = "A new view is constructed on every call, so a deprecated trait logs its warning each time. Keep the returned view when calling in a loop."]
                pub fn $accessor(&self) -> $trait_view {
                    <$trait_view as $crate::TraitView>::new(::std::sync::Arc::clone(&self.data))
                }
            )*
        }
    };
}
