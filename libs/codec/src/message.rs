//! Message codec.
//!
//! Composes the header codec, the user header sub-codec, and the raw
//! payload into one contiguous encoded unit; the decode path is the exact
//! mirror. Both length fields in the header are enforced against the
//! actual encoded content, a disagreement is an error, never silently
//! corrected.

use tracing::trace;
use types::Message;

use crate::error::{CodecError, CodecResult};
use crate::fixed::{self, Reader};
use crate::header::{decode_header, encode_header};
use crate::user_headers;

/// Encoded size of a message, as declared by its header.
pub fn encoded_message_size(message: &Message) -> usize {
    message.header.declared_message_size()
}

/// Encode a message into a freshly allocated buffer.
pub fn encode_message(message: &Message) -> CodecResult<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded_message_size(message));
    encode_message_into(message, &mut out)?;
    Ok(out)
}

/// Append the wire form of a message to the output buffer.
///
/// Layout: header(56) | user headers(user_headers_length) |
/// payload(payload_length). Fails with `LengthMismatch` when either
/// declared length field disagrees with the actual content and leaves the
/// buffer exactly as it was on entry; fails with `Overflow` when the
/// payload cannot be described by the header's u32 field.
pub fn encode_message_into(message: &Message, out: &mut Vec<u8>) -> CodecResult<()> {
    let payload_len = fixed::length_to_u32(message.payload.len(), "payload length")?;
    if payload_len != message.header.payload_length {
        return Err(CodecError::length_mismatch(
            "payload length",
            message.header.payload_length as usize,
            message.payload.len(),
        ));
    }

    let start = out.len();
    encode_header(&message.header, out);

    let headers_start = out.len();
    if let Some(headers) = &message.user_headers {
        if let Err(err) = user_headers::encode_user_headers(headers, out) {
            out.truncate(start);
            return Err(err);
        }
    }
    let encoded_headers_len = out.len() - headers_start;
    if encoded_headers_len != message.header.user_headers_length as usize {
        out.truncate(start);
        return Err(CodecError::length_mismatch(
            "user headers length",
            message.header.user_headers_length as usize,
            encoded_headers_len,
        ));
    }

    out.extend_from_slice(&message.payload);
    Ok(())
}

/// Decode one message from the front of a buffer.
///
/// Decodes the header first, then slices exactly `user_headers_length`
/// bytes for user headers and exactly `payload_length` bytes for the
/// payload. Returns the message together with the bytes consumed so a
/// framing layer can continue; trailing bytes are left unread. Fails with
/// `TruncatedInput` when the buffer is shorter than the header declares.
pub fn decode_message(buf: &[u8]) -> CodecResult<(Message, usize)> {
    let mut reader = Reader::new(buf);
    let header = decode_header(&mut reader)?;

    let headers_region = reader.get_bytes(header.user_headers_length as usize, "user headers")?;
    let user_headers = if headers_region.is_empty() {
        None
    } else {
        Some(user_headers::decode_user_headers(headers_region)?)
    };

    let payload = reader
        .get_bytes(header.payload_length as usize, "message payload")?
        .to_vec();

    trace!(
        payload_length = header.payload_length,
        user_headers_length = header.user_headers_length,
        consumed = reader.position(),
        "decoded message"
    );

    Ok((
        Message {
            header,
            payload,
            user_headers,
        },
        reader.position(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{HeaderValue, MessageHeader, UserHeaders};

    fn message_with_payload(payload: Vec<u8>) -> Message {
        let header = MessageHeader::for_payload(99, payload.len() as u32);
        Message::new(header, payload, None)
    }

    #[test]
    fn test_round_trip_without_user_headers() {
        let message = message_with_payload((0..=255).collect());
        let encoded = encode_message(&message).unwrap();
        assert_eq!(encoded.len(), MessageHeader::SIZE + 256);

        let (decoded, consumed) = decode_message(&encoded).unwrap();
        assert_eq!(decoded, message);
        assert_eq!(consumed, encoded.len());
    }

    #[test]
    fn test_round_trip_with_user_headers() {
        let mut headers = UserHeaders::new();
        headers.insert("origin".into(), HeaderValue::String("gateway-2".into()));
        headers.insert("retries".into(), HeaderValue::Uint8(1));

        let encoded_headers_len = user_headers::encoded_len(&headers).unwrap();
        let mut header = MessageHeader::for_payload(7, 4);
        header.user_headers_length = encoded_headers_len as u32;
        let message = Message::new(header, vec![9, 8, 7, 6], Some(headers));

        let encoded = encode_message(&message).unwrap();
        assert_eq!(
            encoded.len(),
            MessageHeader::SIZE + encoded_headers_len + 4
        );

        let (decoded, _) = decode_message(&encoded).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_empty_payload_round_trip() {
        let message = message_with_payload(Vec::new());
        let encoded = encode_message(&message).unwrap();
        assert_eq!(encoded.len(), MessageHeader::SIZE);

        let (decoded, _) = decode_message(&encoded).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_payload_length_mismatch_rejected() {
        let mut message = message_with_payload(vec![1, 2, 3]);
        message.header.payload_length = 4;

        let err = encode_message(&message).unwrap_err();
        assert_eq!(
            err,
            CodecError::length_mismatch("payload length", 4, 3)
        );
    }

    #[test]
    fn test_user_headers_length_mismatch_rejected() {
        let mut headers = UserHeaders::new();
        headers.insert("k".into(), HeaderValue::Bool(true));

        let mut header = MessageHeader::for_payload(1, 2);
        header.user_headers_length = 1; // actual encoded length is 11
        let message = Message::new(header, vec![0, 0], Some(headers));

        let mut out = vec![0xEE; 3];
        let err = encode_message_into(&message, &mut out).unwrap_err();
        assert!(matches!(
            err,
            CodecError::LengthMismatch { declared: 1, .. }
        ));
        // Failed encode must leave the buffer as it was
        assert_eq!(out, vec![0xEE; 3]);
    }

    #[test]
    fn test_truncated_payload_rejected() {
        let message = message_with_payload(vec![5; 100]);
        let mut encoded = encode_message(&message).unwrap();
        encoded.truncate(MessageHeader::SIZE + 60);

        let err = decode_message(&encoded).unwrap_err();
        assert_eq!(
            err,
            CodecError::truncated(100, 60, "message payload")
        );
    }

    #[test]
    fn test_truncated_user_headers_rejected() {
        let mut headers = UserHeaders::new();
        headers.insert("k".into(), HeaderValue::Uint64(1));
        let headers_len = user_headers::encoded_len(&headers).unwrap();

        let mut header = MessageHeader::for_payload(1, 0);
        header.user_headers_length = headers_len as u32;
        let message = Message::new(header, Vec::new(), Some(headers));

        let mut encoded = encode_message(&message).unwrap();
        encoded.truncate(MessageHeader::SIZE + headers_len - 2);

        let err = decode_message(&encoded).unwrap_err();
        assert!(matches!(err, CodecError::TruncatedInput { .. }));
    }

    #[test]
    fn test_decode_leaves_trailing_bytes() {
        let first = message_with_payload(vec![1, 2, 3]);
        let second = message_with_payload(vec![4, 5]);

        let mut stream = encode_message(&first).unwrap();
        stream.extend(encode_message(&second).unwrap());

        let (decoded_first, consumed) = decode_message(&stream).unwrap();
        assert_eq!(decoded_first, first);

        let (decoded_second, _) = decode_message(&stream[consumed..]).unwrap();
        assert_eq!(decoded_second, second);
    }

    #[test]
    fn test_encode_into_appends_after_existing_content() {
        let message = message_with_payload(vec![1]);
        let mut out = vec![0xAB, 0xCD];
        encode_message_into(&message, &mut out).unwrap();
        assert_eq!(&out[..2], &[0xAB, 0xCD]);
        assert_eq!(out.len(), 2 + MessageHeader::SIZE + 1);
    }
}
