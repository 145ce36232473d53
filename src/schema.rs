//! Schema descriptors for declared traits and specifications, and a
//! [`Catalog`] that gathers the declarations of one package.
//!
//! Descriptors are `'static` constants emitted by the declaration macros.
//! They describe the schema only; stored property data never passes
//! through here.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::error::{Result, TraitsError};
use crate::specification::SpecificationView;
use crate::value::ValueType;
use crate::version::check_versioned_id;
use crate::view::TraitView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    pub key: &'static str,
    pub value_type: ValueType,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub version: u32,
    pub description: &'static str,
    pub usage: &'static [&'static str],
    pub deprecated: bool,
    pub properties: &'static [PropertyDescriptor],
}

impl TraitDescriptor {
    pub fn property(&self, key: &str) -> Option<&'static PropertyDescriptor> {
        self.properties.iter().find(|p| p.key == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecificationDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub version: u32,
    pub description: &'static str,
    pub usage: &'static [&'static str],
    pub deprecated: bool,
    #[serde(serialize_with = "serialize_trait_references")]
    pub traits: &'static [&'static TraitDescriptor],
}

#[derive(Serialize)]
struct TraitReference {
    id: &'static str,
    name: &'static str,
    version: u32,
}

fn serialize_trait_references<S: Serializer>(
    traits: &&'static [&'static TraitDescriptor],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(traits.iter().map(|t| TraitReference {
        id: t.id,
        name: t.name,
        version: t.version,
    }))
}

/// The traits and specifications declared by one package.
#[derive(Debug, Serialize)]
pub struct Catalog {
    package: String,
    description: String,
    traits: BTreeMap<&'static str, &'static TraitDescriptor>,
    specifications: BTreeMap<&'static str, &'static SpecificationDescriptor>,
}

impl Catalog {
    pub fn new(package: &str, description: &str) -> Self {
        Self {
            package: package.to_owned(),
            description: description.to_owned(),
            traits: BTreeMap::new(),
            specifications: BTreeMap::new(),
        }
    }
    pub fn package(&self) -> &str {
        &self.package
    }
    pub fn register_trait<T: TraitView>(&mut self) -> Result<&'static TraitDescriptor> {
        self.register_trait_descriptor(T::DESCRIPTOR)
    }
    pub fn register_trait_descriptor(
        &mut self,
        descriptor: &'static TraitDescriptor,
    ) -> Result<&'static TraitDescriptor> {
        check_versioned_id(descriptor.id, descriptor.version)?;
        if self.traits.contains_key(descriptor.id) {
            return Err(TraitsError::Duplicate(format!("trait '{}'", descriptor.id)));
        }
        debug!(package = %self.package, id = descriptor.id, version = descriptor.version, "registered trait");
        self.traits.insert(descriptor.id, descriptor);
        Ok(descriptor)
    }
    /// Every trait the specification references must be registered first.
    pub fn register_specification<S: SpecificationView>(
        &mut self,
    ) -> Result<&'static SpecificationDescriptor> {
        self.register_specification_descriptor(S::DESCRIPTOR)
    }
    pub fn register_specification_descriptor(
        &mut self,
        descriptor: &'static SpecificationDescriptor,
    ) -> Result<&'static SpecificationDescriptor> {
        check_versioned_id(descriptor.id, descriptor.version)?;
        if self.specifications.contains_key(descriptor.id) {
            return Err(TraitsError::Duplicate(format!(
                "specification '{}'",
                descriptor.id
            )));
        }
        if let Some(missing) = descriptor
            .traits
            .iter()
            .find(|t| !self.traits.contains_key(t.id))
        {
            return Err(TraitsError::UnknownTrait {
                trait_id: missing.id.to_owned(),
                specification_id: descriptor.id.to_owned(),
            });
        }
        debug!(package = %self.package, id = descriptor.id, version = descriptor.version, "registered specification");
        self.specifications.insert(descriptor.id, descriptor);
        Ok(descriptor)
    }
    pub fn trait_descriptor(&self, id: &str) -> Option<&'static TraitDescriptor> {
        self.traits.get(id).copied()
    }
    pub fn specification_descriptor(&self, id: &str) -> Option<&'static SpecificationDescriptor> {
        self.specifications.get(id).copied()
    }
    pub fn traits(&self) -> impl Iterator<Item = &'static TraitDescriptor> + '_ {
        self.traits.values().copied()
    }
    pub fn specifications(&self) -> impl Iterator<Item = &'static SpecificationDescriptor> + '_ {
        self.specifications.values().copied()
    }
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        info!(
            package = %self.package,
            traits = self.traits.len(),
            specifications = self.specifications.len(),
            "rendered catalog"
        );
        Ok(json)
    }
}
