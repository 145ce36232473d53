#![allow(dead_code)]
// Declarations shared by the integration tests: one package with traits
// and specifications of every shape, plus a traits-only package that the
// first one references.

use std::io;
use std::sync::{Arc, Mutex};

pub mod a_namespace {
    use traitsdata::{define_trait, define_unversioned_trait};

    define_trait! {
        /// A trait with properties of all types.
        pub struct AllPropertiesTraitV1 {
            id: "traitsdata-test-all:aNamespace.AllProperties",
            name: "AllProperties",
            version: 1,
            description: "A trait with properties of all types.",
            usage: [],
            deprecated: false,
            properties: {
                "boolProperty": bool, "A bool-typed property." => get_bool_property / get_bool_property_or / set_bool_property;
                "floatProperty": f64, "A float-typed property." => get_float_property / get_float_property_or / set_float_property;
                "intProperty": i64, "A int-typed property." => get_int_property / get_int_property_or / set_int_property;
                "stringProperty": String, "A string-typed property." => get_string_property / get_string_property_or / set_string_property;
            }
        }
    }

    define_trait! {
        /// A trait with multiple versions, version 1.
        pub struct MultipleVersionsTraitV1 {
            id: "traitsdata-test-all:aNamespace.MultipleVersions",
            name: "MultipleVersions",
            version: 1,
            description: "A trait with multiple versions, version 1.",
            usage: ["entity"],
            deprecated: false,
            properties: {
                "oldProperty": String, "A deprecated string-typed property." => get_old_property / get_old_property_or / set_old_property;
            }
        }
    }

    define_trait! {
        /// A trait with multiple versions, version 2.
        pub struct MultipleVersionsTraitV2 {
            id: "traitsdata-test-all:aNamespace.MultipleVersions.v2",
            name: "MultipleVersions",
            version: 2,
            description: "A trait with multiple versions, version 2.",
            usage: [],
            deprecated: false,
            properties: {
                "newProperty": i64, "A new int-typed property." => get_new_property / get_new_property_or / set_new_property;
            }
        }
    }

    define_unversioned_trait! {
        /// A trait with multiple versions, version 1.
        pub struct MultipleVersionsTrait => MultipleVersionsTraitV1;
    }

    define_trait! {
        /// Another trait, this time with no properties.
        pub struct NoPropertiesTraitV1 {
            id: "traitsdata-test-all:aNamespace.NoProperties",
            name: "NoProperties",
            version: 1,
            description: "Another trait, this time with no properties.",
            usage: [],
            deprecated: false,
            properties: {}
        }
    }

    define_trait! {
        /// Another trait, this time with multiple usage.
        pub struct NoPropertiesMultipleUsageTraitV1 {
            id: "traitsdata-test-all:aNamespace.NoPropertiesMultipleUsage",
            name: "NoPropertiesMultipleUsage",
            version: 1,
            description: "Another trait, this time with multiple usage.",
            usage: ["entity", "relationship"],
            deprecated: false,
            properties: {}
        }
    }

    define_trait! {
        /// A deprecated trait.
        pub struct DeprecatedTraitV1 {
            id: "traitsdata-test-all:aNamespace.Deprecated",
            name: "Deprecated",
            version: 1,
            description: "A deprecated trait.",
            usage: [],
            deprecated: true,
            properties: {}
        }
    }
}

pub mod another_namespace {
    use traitsdata::define_trait;

    define_trait! {
        /// Another NoProperties trait in a different namespace.
        pub struct NoPropertiesTraitV1 {
            id: "traitsdata-test-all:anotherNamespace.NoProperties",
            name: "NoProperties",
            version: 1,
            description: "Another NoProperties trait in a different namespace.",
            usage: [],
            deprecated: false,
            properties: {}
        }
    }
}

pub mod traits_only {
    use traitsdata::define_trait;

    define_trait! {
        /// Another trait, in another package.
        pub struct AnotherTraitV1 {
            id: "traitsdata-test-traits-only:test.Another",
            name: "Another",
            version: 1,
            description: "Another trait, in another package.",
            usage: [],
            deprecated: false,
            properties: {}
        }
    }

    define_trait! {
        /// A NoProperties trait in another package.
        pub struct NoPropertiesTraitV1 {
            id: "traitsdata-test-traits-only:aNamespace.NoProperties",
            name: "NoProperties",
            version: 1,
            description: "A NoProperties trait in another package.",
            usage: [],
            deprecated: false,
            properties: {}
        }
    }
}

pub mod specifications {
    use traitsdata::{define_specification, define_unversioned_specification};

    use super::{a_namespace, another_namespace, traits_only};

    define_specification! {
        /// A specification with two traits.
        pub struct TwoLocalTraitsSpecificationV1 {
            id: "traitsdata-test-all:test.TwoLocalTraits",
            name: "TwoLocalTraits",
            version: 1,
            description: "A specification with two traits.",
            usage: [],
            deprecated: false,
            traits: {
                a_namespace_no_properties_trait: a_namespace::NoPropertiesTraitV1,
                another_namespace_no_properties_trait: another_namespace::NoPropertiesTraitV1,
            }
        }
    }

    define_specification! {
        /// A specification referencing traits in another package.
        pub struct OneExternalTraitSpecificationV1 {
            id: "traitsdata-test-all:test.OneExternalTrait",
            name: "OneExternalTrait",
            version: 1,
            description: "A specification referencing traits in another package.",
            usage: [],
            deprecated: false,
            traits: {
                another_trait: traits_only::AnotherTraitV1,
            }
        }
    }

    define_specification! {
        /// A specification referencing traits in this and another package.
        pub struct LocalAndExternalTraitSpecificationV1 {
            id: "traitsdata-test-all:test.LocalAndExternalTrait",
            name: "LocalAndExternalTrait",
            version: 1,
            description: "A specification referencing traits in this and another package.",
            usage: ["entity", "managementPolicy"],
            deprecated: false,
            traits: {
                traitsdata_test_all_a_namespace_no_properties_trait: a_namespace::NoPropertiesTraitV1,
                traitsdata_test_traits_only_a_namespace_no_properties_trait: traits_only::NoPropertiesTraitV1,
            }
        }
    }

    define_specification! {
        /// Version 1 of a specification referencing version 1 of a trait.
        pub struct MultipleVersionsOfTraitSpecificationV1 {
            id: "traitsdata-test-all:test.MultipleVersionsOfTrait",
            name: "MultipleVersionsOfTrait",
            version: 1,
            description: "Version 1 of a specification referencing version 1 of a trait.",
            usage: [],
            deprecated: false,
            traits: {
                multiple_versions_trait: a_namespace::MultipleVersionsTraitV1,
                no_properties_trait: a_namespace::NoPropertiesTraitV1,
            }
        }
    }

    define_specification! {
        /// Version 2 of a specification referencing version 2 of a trait.
        pub struct MultipleVersionsOfTraitSpecificationV2 {
            id: "traitsdata-test-all:test.MultipleVersionsOfTrait.v2",
            name: "MultipleVersionsOfTrait",
            version: 2,
            description: "Version 2 of a specification referencing version 2 of a trait.",
            usage: [],
            deprecated: false,
            traits: {
                multiple_versions_trait: a_namespace::MultipleVersionsTraitV2,
                no_properties_trait: a_namespace::NoPropertiesTraitV1,
            }
        }
    }

    define_unversioned_specification! {
        /// Version 1 of a specification referencing version 1 of a trait.
        pub struct MultipleVersionsOfTraitSpecification => MultipleVersionsOfTraitSpecificationV1;
    }

    define_specification! {
        /// A specification referencing a deprecated trait.
        pub struct DeprecatedTraitSpecificationV1 {
            id: "traitsdata-test-all:test.DeprecatedTrait",
            name: "DeprecatedTrait",
            version: 1,
            description: "A specification referencing a deprecated trait.",
            usage: [],
            deprecated: false,
            traits: {
                deprecated_trait: a_namespace::DeprecatedTraitV1,
            }
        }
    }

    define_specification! {
        /// A deprecated specification.
        pub struct DeprecatedSpecificationV1 {
            id: "traitsdata-test-all:test.Deprecated",
            name: "Deprecated",
            version: 1,
            description: "A deprecated specification.",
            usage: [],
            deprecated: true,
            traits: {
                no_properties_trait: a_namespace::NoPropertiesTraitV1,
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a subscriber that records every event, and returns the
/// formatted output.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
