//! Command-line arguments.

use clap::{Parser, ValueEnum};
use ulink_proto::{
    HeaderConfig, SinkEncoding, UAttributes, UEntity, UMessageType, UPriority, UResource,
    USerializationHint, UUri,
};
use uuid::Uuid;

use crate::error::CliError;

/// Encode a uProtocol link header and print it as hex.
#[derive(Debug, Parser)]
#[command(name = "ulink-header", version, about)]
pub struct Args {
    /// Message identifier (fresh time-ordered UUID if omitted)
    #[arg(long)]
    pub id: Option<Uuid>,

    /// Message type
    #[arg(long = "type", value_enum, default_value_t = MessageTypeArg::Publish)]
    pub message_type: MessageTypeArg,

    /// Priority class
    #[arg(long, value_enum, default_value_t = PriorityArg::Cs1)]
    pub priority: PriorityArg,

    /// Time to live in milliseconds
    #[arg(long, allow_negative_numbers = true)]
    pub ttl: Option<i32>,

    /// Access token
    #[arg(long)]
    pub token: Option<String>,

    /// Payload serialization hint
    #[arg(long, value_enum)]
    pub hint: Option<HintArg>,

    /// Sink authority (makes the sink remote)
    #[arg(long, requires = "sink_entity")]
    pub sink_authority: Option<String>,

    /// Sink entity name
    #[arg(long)]
    pub sink_entity: Option<String>,

    /// Sink entity major version
    #[arg(long, requires = "sink_entity")]
    pub sink_version: Option<u32>,

    /// Sink resource, as `name[.instance][#message]`
    #[arg(long)]
    pub sink_resource: Option<String>,

    /// Permission level
    #[arg(long, allow_negative_numbers = true)]
    pub plevel: Option<i32>,

    /// Communication status
    #[arg(long, allow_negative_numbers = true)]
    pub commstatus: Option<i32>,

    /// Identifier of the request being answered
    #[arg(long)]
    pub reqid: Option<Uuid>,

    /// Payload size to account for in the estimate
    #[arg(long, default_value_t = 0)]
    pub payload_size: usize,

    /// Base64-encode the sink entry
    #[arg(long)]
    pub base64_sink: bool,
}

/// Message type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageTypeArg {
    /// Topic publication
    Publish,
    /// RPC request
    Request,
    /// RPC response
    Response,
    /// Notification
    Notification,
}

/// Priority argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    /// CS0
    Cs0,
    /// CS1
    Cs1,
    /// CS2
    Cs2,
    /// CS3
    Cs3,
    /// CS4
    Cs4,
    /// CS5
    Cs5,
    /// CS6
    Cs6,
}

/// Serialization hint argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HintArg {
    /// Protocol buffers
    Protobuf,
    /// Protocol buffers in `Any`
    ProtobufAny,
    /// JSON
    Json,
    /// SOME/IP
    SomeIp,
    /// Raw bytes
    Raw,
    /// Text
    Text,
}

impl From<MessageTypeArg> for UMessageType {
    fn from(arg: MessageTypeArg) -> Self {
        match arg {
            MessageTypeArg::Publish => Self::Publish,
            MessageTypeArg::Request => Self::Request,
            MessageTypeArg::Response => Self::Response,
            MessageTypeArg::Notification => Self::Notification,
        }
    }
}

impl From<PriorityArg> for UPriority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Cs0 => Self::Cs0,
            PriorityArg::Cs1 => Self::Cs1,
            PriorityArg::Cs2 => Self::Cs2,
            PriorityArg::Cs3 => Self::Cs3,
            PriorityArg::Cs4 => Self::Cs4,
            PriorityArg::Cs5 => Self::Cs5,
            PriorityArg::Cs6 => Self::Cs6,
        }
    }
}

impl From<HintArg> for USerializationHint {
    fn from(arg: HintArg) -> Self {
        match arg {
            HintArg::Protobuf => Self::Protobuf,
            HintArg::ProtobufAny => Self::ProtobufWrappedInAny,
            HintArg::Json => Self::Json,
            HintArg::SomeIp => Self::SomeIp,
            HintArg::Raw => Self::Raw,
            HintArg::Text => Self::Text,
        }
    }
}

impl Args {
    /// Header configuration selected by the flags.
    pub fn config(&self) -> HeaderConfig {
        let sink_encoding = if self.base64_sink { SinkEncoding::Base64 } else { SinkEncoding::Raw };
        HeaderConfig { sink_encoding, ..HeaderConfig::default() }
    }

    /// Attribute set described by the flags.
    pub fn attributes(&self) -> Result<UAttributes, CliError> {
        let id = self.id.unwrap_or_else(Uuid::now_v7);
        let mut attrs = UAttributes::new(id, self.message_type.into(), self.priority.into());

        if let Some(ttl) = self.ttl {
            attrs = attrs.with_ttl(ttl);
        }
        if let Some(token) = &self.token {
            attrs = attrs.with_token(token.clone());
        }
        if let Some(hint) = self.hint {
            attrs = attrs.with_serialization_hint(hint.into());
        }
        if let Some(sink) = self.sink()? {
            attrs = attrs.with_sink(sink);
        }
        if let Some(plevel) = self.plevel {
            attrs = attrs.with_plevel(plevel);
        }
        if let Some(commstatus) = self.commstatus {
            attrs = attrs.with_commstatus(commstatus);
        }
        if let Some(reqid) = self.reqid {
            attrs = attrs.with_reqid(reqid);
        }

        Ok(attrs)
    }

    fn sink(&self) -> Result<Option<UUri>, CliError> {
        let Some(entity) = &self.sink_entity else {
            if self.sink_resource.is_some() {
                return Err(CliError::SinkWithoutEntity);
            }
            return Ok(None);
        };

        let entity = UEntity::new(entity.clone(), self.sink_version);
        let resource = self.sink_resource.as_deref().map(parse_resource).unwrap_or_default();

        Ok(Some(match &self.sink_authority {
            Some(authority) => UUri::remote(authority.clone(), entity, resource),
            None => UUri::local(entity, resource),
        }))
    }
}

/// Parse `name[.instance][#message]`.
fn parse_resource(text: &str) -> UResource {
    let (rest, message) = match text.split_once('#') {
        Some((rest, message)) => (rest, Some(message.to_string())),
        None => (text, None),
    };
    let (name, instance) = match rest.split_once('.') {
        Some((name, instance)) => (name, Some(instance.to_string())),
        None => (rest, None),
    };

    UResource { name: name.to_string(), instance, message }
}
