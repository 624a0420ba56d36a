//! Message attributes.
//!
//! [`UAttributes`] carries the metadata of one message. The identifier, type
//! and priority are constructor arguments, so an attribute set without them
//! cannot exist; everything else is optional and set with the `with_*`
//! methods.

use uuid::Uuid;

use crate::uri::UUri;

/// Kind of message.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UMessageType {
    /// Not specified
    #[default]
    Unspecified = 0,
    /// Topic publication
    Publish = 1,
    /// RPC request
    Request = 2,
    /// RPC response
    Response = 3,
    /// Notification addressed to one consumer
    Notification = 4,
}

/// Quality of service class, `Cs0` lowest.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum UPriority {
    /// Not specified
    #[default]
    Unspecified = 0,
    /// Low priority, no bandwidth assurance
    Cs0 = 1,
    /// Standard
    Cs1 = 2,
    /// Operations, administration and management
    Cs2 = 3,
    /// Multimedia streaming
    Cs3 = 4,
    /// Real-time interactive
    Cs4 = 5,
    /// Signaling
    Cs5 = 6,
    /// Network control
    Cs6 = 7,
}

/// How the payload is serialized.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum USerializationHint {
    /// Unknown format
    #[default]
    Unknown = 0,
    /// Protocol buffers
    Protobuf = 1,
    /// Protocol buffers wrapped in `google.protobuf.Any`
    ProtobufWrappedInAny = 2,
    /// JSON
    Json = 3,
    /// SOME/IP
    SomeIp = 4,
    /// Raw bytes
    Raw = 5,
    /// UTF-8 text
    Text = 6,
}

macro_rules! wire_ordinal {
    ($ty:ty { $($variant:ident),+ $(,)? }) => {
        impl $ty {
            /// One-byte wire ordinal.
            pub const fn to_u8(self) -> u8 {
                self as u8
            }

            /// Parse a wire ordinal.
            pub const fn from_u8(value: u8) -> Option<Self> {
                $(
                    if value == Self::$variant as u8 {
                        return Some(Self::$variant);
                    }
                )+
                None
            }
        }
    };
}

wire_ordinal!(UMessageType { Unspecified, Publish, Request, Response, Notification });
wire_ordinal!(UPriority { Unspecified, Cs0, Cs1, Cs2, Cs3, Cs4, Cs5, Cs6 });
wire_ordinal!(USerializationHint {
    Unknown,
    Protobuf,
    ProtobufWrappedInAny,
    Json,
    SomeIp,
    Raw,
    Text,
});

/// Metadata of one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UAttributes {
    id: Uuid,
    message_type: UMessageType,
    priority: UPriority,
    ttl: Option<i32>,
    token: Option<String>,
    serialization_hint: Option<USerializationHint>,
    sink: Option<UUri>,
    plevel: Option<i32>,
    commstatus: Option<i32>,
    reqid: Option<Uuid>,
}

impl UAttributes {
    /// Attribute set with only the mandatory fields.
    pub fn new(id: Uuid, message_type: UMessageType, priority: UPriority) -> Self {
        Self {
            id,
            message_type,
            priority,
            ttl: None,
            token: None,
            serialization_hint: None,
            sink: None,
            plevel: None,
            commstatus: None,
            reqid: None,
        }
    }

    /// Publication with a fresh time-ordered identifier.
    pub fn publish(priority: UPriority) -> Self {
        Self::new(Uuid::now_v7(), UMessageType::Publish, priority)
    }

    /// Notification to `sink` with a fresh identifier.
    pub fn notification(priority: UPriority, sink: UUri) -> Self {
        Self::new(Uuid::now_v7(), UMessageType::Notification, priority).with_sink(sink)
    }

    /// RPC request to `sink` that expires after `ttl` milliseconds.
    pub fn request(priority: UPriority, sink: UUri, ttl: i32) -> Self {
        Self::new(Uuid::now_v7(), UMessageType::Request, priority).with_sink(sink).with_ttl(ttl)
    }

    /// RPC response to `sink` answering request `reqid`.
    pub fn response(priority: UPriority, sink: UUri, reqid: Uuid) -> Self {
        Self::new(Uuid::now_v7(), UMessageType::Response, priority)
            .with_sink(sink)
            .with_reqid(reqid)
    }

    /// Set the time to live, in milliseconds.
    #[must_use]
    pub fn with_ttl(mut self, ttl: i32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set the access token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the serialization hint.
    #[must_use]
    pub fn with_serialization_hint(mut self, hint: USerializationHint) -> Self {
        self.serialization_hint = Some(hint);
        self
    }

    /// Set the destination.
    #[must_use]
    pub fn with_sink(mut self, sink: UUri) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the permission level.
    #[must_use]
    pub fn with_plevel(mut self, plevel: i32) -> Self {
        self.plevel = Some(plevel);
        self
    }

    /// Set the communication status.
    #[must_use]
    pub fn with_commstatus(mut self, commstatus: i32) -> Self {
        self.commstatus = Some(commstatus);
        self
    }

    /// Set the identifier of the request being answered.
    #[must_use]
    pub fn with_reqid(mut self, reqid: Uuid) -> Self {
        self.reqid = Some(reqid);
        self
    }

    /// Message identifier.
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// Message type.
    pub fn message_type(&self) -> UMessageType {
        self.message_type
    }

    /// Priority class.
    pub fn priority(&self) -> UPriority {
        self.priority
    }

    /// Time to live in milliseconds.
    pub fn ttl(&self) -> Option<i32> {
        self.ttl
    }

    /// Access token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Serialization hint.
    pub fn serialization_hint(&self) -> Option<USerializationHint> {
        self.serialization_hint
    }

    /// Destination.
    pub fn sink(&self) -> Option<&UUri> {
        self.sink.as_ref()
    }

    /// Permission level.
    pub fn plevel(&self) -> Option<i32> {
        self.plevel
    }

    /// Communication status.
    pub fn commstatus(&self) -> Option<i32> {
        self.commstatus
    }

    /// Identifier of the request being answered.
    pub fn reqid(&self) -> Option<&Uuid> {
        self.reqid.as_ref()
    }
}
