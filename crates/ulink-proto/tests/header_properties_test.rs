//! Property tests for header sizing and encoding.
//!
//! Random attribute sets are built and encoded, and the output is walked
//! entry by entry to check size, order and presence against the input.

use proptest::prelude::*;
use ulink_proto::{
    HeaderBuilder, HeaderConfig, LENGTH_FIELD_WIDTH, NullSink, SinkEncoding, Tag, TagSet,
    UAttributes, UEntity, UMessageType, UPayload, UPriority, UResource, USerializationHint, UUri,
    estimate, header_len,
};
use uuid::Uuid;

/// Split a header into `(tag, value)` pairs, checking framing as we go.
fn walk(mut buf: &[u8]) -> Vec<(Tag, Vec<u8>)> {
    let mut entries = Vec::new();
    while !buf.is_empty() {
        let tag = Tag::from_u8(buf[0]).expect("known tag");
        let len_bytes: [u8; LENGTH_FIELD_WIDTH] =
            buf[1..1 + LENGTH_FIELD_WIDTH].try_into().expect("length field");
        let len = u64::from_be_bytes(len_bytes) as usize;
        let start = 1 + LENGTH_FIELD_WIDTH;
        entries.push((tag, buf[start..start + len].to_vec()));
        buf = &buf[start + len..];
    }
    entries
}

fn arb_uri() -> impl Strategy<Value = UUri> {
    (
        proptest::option::of("[a-z0-9.]{1,12}"),
        "[a-z_.]{0,12}",
        proptest::option::of(0u32..100),
        "[a-z]{0,8}",
        proptest::option::of("[a-z_]{1,8}"),
        proptest::option::of("[A-Za-z]{1,8}"),
    )
        .prop_map(|(authority, entity, version, resource, instance, message)| {
            let resource = UResource { name: resource, instance, message };
            let entity = UEntity::new(entity, version);
            match authority {
                Some(authority) => UUri::remote(authority, entity, resource),
                None => UUri::local(entity, resource),
            }
        })
}

prop_compose! {
    fn arb_attributes()(
        id in any::<u128>(),
        message_type in 0u8..=4,
        priority in 0u8..=7,
        ttl in proptest::option::of(any::<i32>()),
        token in proptest::option::of(".{0,24}"),
        hint in proptest::option::of(0u8..=6),
        sink in proptest::option::of(arb_uri()),
        plevel in proptest::option::of(any::<i32>()),
        commstatus in proptest::option::of(any::<i32>()),
        reqid in proptest::option::of(any::<u128>()),
    ) -> UAttributes {
        let mut attrs = UAttributes::new(
            Uuid::from_u128(id),
            UMessageType::from_u8(message_type).unwrap_or_default(),
            UPriority::from_u8(priority).unwrap_or_default(),
        );
        if let Some(v) = ttl { attrs = attrs.with_ttl(v); }
        if let Some(v) = token { attrs = attrs.with_token(v); }
        if let Some(v) = hint.and_then(USerializationHint::from_u8) {
            attrs = attrs.with_serialization_hint(v);
        }
        if let Some(v) = sink { attrs = attrs.with_sink(v); }
        if let Some(v) = plevel { attrs = attrs.with_plevel(v); }
        if let Some(v) = commstatus { attrs = attrs.with_commstatus(v); }
        if let Some(v) = reqid { attrs = attrs.with_reqid(Uuid::from_u128(v)); }
        attrs
    }
}

fn arb_encoding() -> impl Strategy<Value = SinkEncoding> {
    prop_oneof![Just(SinkEncoding::Raw), Just(SinkEncoding::Base64)]
}

fn expected_tags(attrs: &UAttributes) -> TagSet {
    let mut set = TagSet::MANDATORY;
    set.set(TagSet::TTL, attrs.ttl().is_some());
    set.set(TagSet::TOKEN, attrs.token().is_some());
    set.set(TagSet::HINT, attrs.serialization_hint().is_some());
    set.set(TagSet::SINK, attrs.sink().is_some());
    set.set(TagSet::PLEVEL, attrs.plevel().is_some());
    set.set(TagSet::COMMSTATUS, attrs.commstatus().is_some());
    set.set(TagSet::REQID, attrs.reqid().is_some());
    set
}

proptest! {
    #[test]
    fn estimate_covers_header_and_payload(
        attrs in arb_attributes(),
        encoding in arb_encoding(),
        payload_size in 0usize..4096,
    ) {
        let config = HeaderConfig { sink_encoding: encoding, ..HeaderConfig::default() };
        let header = HeaderBuilder::with_config(config.clone()).build(&attrs).unwrap();

        prop_assert_eq!(header.len(), header_len(&attrs, &config).unwrap());
        prop_assert_eq!(
            estimate(&attrs, payload_size, &config).unwrap(),
            header.len() + 1 + LENGTH_FIELD_WIDTH + payload_size
        );
    }

    #[test]
    fn message_fills_estimate_exactly(
        attrs in arb_attributes(),
        encoding in arb_encoding(),
        payload in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let config = HeaderConfig { sink_encoding: encoding, ..HeaderConfig::default() };
        let builder = HeaderBuilder::with_config(config.clone()).with_sink(NullSink);
        let payload = UPayload::new(payload, USerializationHint::Raw);

        let header = builder.build(&attrs).unwrap();
        let message = builder.build_message(&attrs, &payload).unwrap();

        prop_assert_eq!(message.len(), estimate(&attrs, payload.size(), &config).unwrap());
        prop_assert_eq!(&message[..header.len()], &header[..]);
        prop_assert_eq!(&message[message.len() - payload.size()..], &payload.data()[..]);
    }

    #[test]
    fn entries_follow_declared_order(attrs in arb_attributes()) {
        let header = HeaderBuilder::new().build(&attrs).unwrap();
        let tags: Vec<Tag> = walk(&header).into_iter().map(|(tag, _)| tag).collect();

        prop_assert_eq!(&tags[..3], &[Tag::ID, Tag::TYPE, Tag::PRIORITY]);
        prop_assert!(tags.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn optional_entry_present_iff_field_set(attrs in arb_attributes()) {
        let header = HeaderBuilder::new().build(&attrs).unwrap();
        let found: TagSet = walk(&header).into_iter().map(|(tag, _)| tag).collect();

        prop_assert_eq!(found, expected_tags(&attrs));
    }

    #[test]
    fn values_decode_to_attributes(attrs in arb_attributes()) {
        let header = HeaderBuilder::new().build(&attrs).unwrap();

        for (tag, value) in walk(&header) {
            match tag {
                Tag::ID => prop_assert_eq!(&value[..], attrs.id().as_bytes()),
                Tag::TYPE => prop_assert_eq!(value, vec![attrs.message_type().to_u8()]),
                Tag::PRIORITY => prop_assert_eq!(value, vec![attrs.priority().to_u8()]),
                Tag::TTL => prop_assert_eq!(Some(value), attrs.ttl().map(|v| v.to_be_bytes().to_vec())),
                Tag::TOKEN => prop_assert_eq!(Some(&value[..]), attrs.token().map(str::as_bytes)),
                Tag::HINT => prop_assert_eq!(Some(value), attrs.serialization_hint().map(|h| vec![h.to_u8()])),
                Tag::SINK => prop_assert_eq!(Some(value), attrs.sink().map(|u| u.to_long_form().into_bytes())),
                Tag::PLEVEL => prop_assert_eq!(Some(value), attrs.plevel().map(|v| v.to_be_bytes().to_vec())),
                Tag::COMMSTATUS => prop_assert_eq!(Some(value), attrs.commstatus().map(|v| v.to_be_bytes().to_vec())),
                Tag::REQID => prop_assert_eq!(Some(&value[..]), attrs.reqid().map(|id| &id.as_bytes()[..])),
            }
        }
    }

    #[test]
    fn identical_attributes_encode_identically(attrs in arb_attributes()) {
        let builder = HeaderBuilder::new().with_sink(NullSink);
        prop_assert_eq!(builder.build(&attrs).unwrap(), builder.build(&attrs.clone()).unwrap());
    }
}

#[test]
fn sink_only_header_agrees_with_estimate_for_each_encoding() {
    let sink = UUri::remote(
        "vcu.my_car_vin",
        UEntity::new("body.access", Some(1)),
        UResource::named("door").with_instance("front_left").with_message("Door"),
    );
    let attrs =
        UAttributes::new(Uuid::nil(), UMessageType::Publish, UPriority::Cs1).with_sink(sink);

    let mut sink_values = Vec::new();
    for encoding in [SinkEncoding::Raw, SinkEncoding::Base64] {
        let config = HeaderConfig { sink_encoding: encoding, ..HeaderConfig::default() };
        let header = HeaderBuilder::with_config(config.clone()).build(&attrs).unwrap();

        assert_eq!(estimate(&attrs, 0, &config).unwrap(), header.len() + 1 + LENGTH_FIELD_WIDTH);

        let (tag, value) = walk(&header).pop().unwrap();
        assert_eq!(tag, Tag::SINK);
        sink_values.push(value);
    }

    assert_eq!(sink_values[0], b"//vcu.my_car_vin/body.access/1/door.front_left#Door");
    assert!(sink_values[1].len() > sink_values[0].len());
}
