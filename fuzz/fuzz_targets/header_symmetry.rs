//! Sizing and encoding must agree for any attribute set.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ulink_proto::{
    HeaderBuilder, HeaderConfig, NullSink, SinkEncoding, UAttributes, UEntity, UMessageType,
    UPayload, UPriority, UResource, USerializationHint, UUri, estimate, header_len,
};
use uuid::Uuid;

#[derive(Debug, Arbitrary)]
struct Input {
    id: u128,
    message_type: u8,
    priority: u8,
    ttl: Option<i32>,
    token: Option<String>,
    hint: Option<u8>,
    sink: Option<(Option<String>, String, Option<u32>, String, Option<String>, Option<String>)>,
    plevel: Option<i32>,
    commstatus: Option<i32>,
    reqid: Option<u128>,
    base64_sink: bool,
    payload: Vec<u8>,
}

impl Input {
    fn attributes(self) -> (UAttributes, Vec<u8>, SinkEncoding) {
        let mut attrs = UAttributes::new(
            Uuid::from_u128(self.id),
            UMessageType::from_u8(self.message_type % 5).unwrap_or_default(),
            UPriority::from_u8(self.priority % 8).unwrap_or_default(),
        );
        if let Some(v) = self.ttl {
            attrs = attrs.with_ttl(v);
        }
        if let Some(v) = self.token {
            attrs = attrs.with_token(v);
        }
        if let Some(v) = self.hint.and_then(|h| USerializationHint::from_u8(h % 7)) {
            attrs = attrs.with_serialization_hint(v);
        }
        if let Some((authority, entity, version, resource, instance, message)) = self.sink {
            let entity = UEntity::new(entity, version);
            let resource = UResource { name: resource, instance, message };
            let uri = match authority {
                Some(authority) => UUri::remote(authority, entity, resource),
                None => UUri::local(entity, resource),
            };
            attrs = attrs.with_sink(uri);
        }
        if let Some(v) = self.plevel {
            attrs = attrs.with_plevel(v);
        }
        if let Some(v) = self.commstatus {
            attrs = attrs.with_commstatus(v);
        }
        if let Some(v) = self.reqid {
            attrs = attrs.with_reqid(Uuid::from_u128(v));
        }

        let encoding = if self.base64_sink { SinkEncoding::Base64 } else { SinkEncoding::Raw };
        (attrs, self.payload, encoding)
    }
}

fuzz_target!(|input: Input| {
    let (attrs, payload, sink_encoding) = input.attributes();
    let config = HeaderConfig { sink_encoding, ..HeaderConfig::default() };
    let builder = HeaderBuilder::with_config(config.clone()).with_sink(NullSink);
    let payload = UPayload::new(payload, USerializationHint::Raw);

    let header = builder.build(&attrs).expect("header within limits");
    assert_eq!(header.len(), header_len(&attrs, &config).expect("sized"));

    let message = builder.build_message(&attrs, &payload).expect("message within limits");
    assert_eq!(message.len(), estimate(&attrs, payload.size(), &config).expect("sized"));
    assert_eq!(&message[..header.len()], &header[..]);
});
