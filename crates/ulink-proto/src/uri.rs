//! uProtocol URIs and their long-form text.
//!
//! Long form is the human readable serialization:
//!
//! ```text
//! [//authority]/entity[/version][/resource[.instance][#message]]
//! ```
//!
//! A URI with no authority is local and starts with a single `/`. The empty
//! URI serializes to the empty string. Values are written as given; checking
//! that names are well formed is the caller's business. In particular a local
//! URI whose entity name is empty but whose version or resource is set
//! serializes with a leading `//` (`//1/door`), which a reader will take for an
//! authority. Callers that cannot rule this out must validate before encoding.

use std::fmt::{self, Write};

/// Device or domain hosting the entity. Absent for local URIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UAuthority {
    /// Authority name, e.g. `vcu.my_car_vin`
    pub name: String,
}

/// Software entity (service or application).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UEntity {
    /// Entity name
    pub name: String,
    /// Major version
    pub version: Option<u32>,
}

/// Resource exposed by an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UResource {
    /// Resource name, e.g. `door` or `rpc`
    pub name: String,
    /// Instance, e.g. `front_left`
    pub instance: Option<String>,
    /// Message type carried by the resource
    pub message: Option<String>,
}

/// Address of a uProtocol resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UUri {
    /// Remote authority, `None` for local URIs
    pub authority: Option<UAuthority>,
    /// Target entity
    pub entity: UEntity,
    /// Target resource
    pub resource: UResource,
}

impl UUri {
    /// Local URI for `entity` / `resource`.
    pub fn local(entity: UEntity, resource: UResource) -> Self {
        Self { authority: None, entity, resource }
    }

    /// Remote URI for `entity` / `resource` on `authority`.
    pub fn remote(authority: impl Into<String>, entity: UEntity, resource: UResource) -> Self {
        Self { authority: Some(UAuthority { name: authority.into() }), entity, resource }
    }

    /// Whether the URI carries nothing at all.
    pub fn is_empty(&self) -> bool {
        self.authority.is_none() && self.entity == UEntity::default() && self.resource.is_empty()
    }

    /// Long-form text.
    pub fn to_long_form(&self) -> String {
        self.to_string()
    }

    /// Byte length of [`Self::to_long_form`], computed without allocating.
    pub fn long_form_len(&self) -> usize {
        let mut counter = LenCounter(0);
        // LenCounter never fails.
        let _ = write!(counter, "{self}");
        counter.0
    }
}

impl UEntity {
    /// Entity with a name and major version.
    pub fn new(name: impl Into<String>, version: Option<u32>) -> Self {
        Self { name: name.into(), version }
    }
}

impl UResource {
    /// Resource with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), instance: None, message: None }
    }

    /// Response resource of an RPC method, `rpc.response`.
    pub fn rpc_response() -> Self {
        Self { name: "rpc".into(), instance: Some("response".into()), message: None }
    }

    /// Set the instance.
    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Set the message type.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.name.is_empty() && self.instance.is_none() && self.message.is_none()
    }
}

impl fmt::Display for UUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        if let Some(authority) = &self.authority {
            write!(f, "//{}", authority.name)?;
        }

        write!(f, "/{}", self.entity.name)?;
        if let Some(version) = self.entity.version {
            write!(f, "/{version}")?;
        }

        if !self.resource.is_empty() {
            write!(f, "/{}", self.resource.name)?;
            if let Some(instance) = &self.resource.instance {
                write!(f, ".{instance}")?;
            }
            if let Some(message) = &self.resource.message {
                write!(f, "#{message}")?;
            }
        }

        Ok(())
    }
}

struct LenCounter(usize);

impl Write for LenCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door() -> UResource {
        UResource::named("door").with_instance("front_left").with_message("Door")
    }

    #[test]
    fn local_long_form() {
        let uri = UUri::local(UEntity::new("body.access", Some(1)), door());
        assert_eq!(uri.to_long_form(), "/body.access/1/door.front_left#Door");
    }

    #[test]
    fn remote_long_form() {
        let uri = UUri::remote("vcu.my_car_vin", UEntity::new("body.access", None), door());
        assert_eq!(uri.to_long_form(), "//vcu.my_car_vin/body.access/door.front_left#Door");
    }

    #[test]
    fn resource_is_optional() {
        let uri = UUri::local(UEntity::new("petapp", Some(2)), UResource::default());
        assert_eq!(uri.to_long_form(), "/petapp/2");
    }

    #[test]
    fn rpc_response_resource() {
        let uri = UUri::local(UEntity::new("petapp", Some(1)), UResource::rpc_response());
        assert_eq!(uri.to_long_form(), "/petapp/1/rpc.response");
    }

    #[test]
    fn empty_uri_is_empty_text() {
        let uri = UUri::default();
        assert!(uri.is_empty());
        assert_eq!(uri.to_long_form(), "");
        assert_eq!(uri.long_form_len(), 0);
    }

    #[test]
    fn empty_entity_name_is_written_as_given() {
        let uri = UUri::local(UEntity::new("", Some(1)), UResource::named("door"));
        assert_eq!(uri.to_long_form(), "//1/door");
        assert_eq!(uri.long_form_len(), 8);
    }

    #[test]
    fn long_form_len_matches_text() {
        let uris = [
            UUri::local(UEntity::new("body.access", Some(1)), door()),
            UUri::remote("vcu.vin", UEntity::new("hvac", Some(12)), UResource::named("fan")),
            UUri::remote("ümlaut", UEntity::new("ß", None), UResource::default()),
        ];
        for uri in uris {
            assert_eq!(uri.long_form_len(), uri.to_long_form().len());
        }
    }
}
