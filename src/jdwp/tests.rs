#[cfg(test)]
mod jdwp_tests {
    use crate::cache::structs::cache_key::CacheKey;
    use crate::jdwp::enums::frame_error::FrameError;
    use crate::jdwp::enums::packet_kind::PacketKind;
    use crate::jdwp::jdwp::{read_frame, relay_handshake, write_frame, DEFAULT_MAX_FRAME_LENGTH, HANDSHAKE, HEADER_SIZE};
    use crate::jdwp::structs::frame::Frame;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn raw_command(id: u32, command_set: u8, command: u8, body: &[u8]) -> Vec<u8> {
        let mut packet = Vec::new();
        packet.extend_from_slice(&((HEADER_SIZE + body.len()) as u32).to_be_bytes());
        packet.extend_from_slice(&id.to_be_bytes());
        packet.push(0);
        packet.push(command_set);
        packet.push(command);
        packet.extend_from_slice(body);
        packet
    }

    #[test]
    fn test_decode_command() {
        let packet = raw_command(7, 2, 7, &42u64.to_be_bytes());
        let frame = Frame::from_bytes(&packet, DEFAULT_MAX_FRAME_LENGTH).unwrap();
        assert_eq!(frame.length, 19);
        assert_eq!(frame.id, 7);
        assert_eq!(frame.kind, PacketKind::Command { command_set: 2, command: 7 });
        assert_eq!(frame.body, 42u64.to_be_bytes().to_vec());
        assert!(!frame.is_reply());
    }

    #[test]
    fn test_decode_reply_with_error_code() {
        let mut packet = Vec::new();
        packet.extend_from_slice(&12u32.to_be_bytes());
        packet.extend_from_slice(&99u32.to_be_bytes());
        packet.push(0x80);
        packet.extend_from_slice(&0x0015u16.to_be_bytes());
        packet.push(b'Z');
        let frame = Frame::from_bytes(&packet, DEFAULT_MAX_FRAME_LENGTH).unwrap();
        assert!(frame.is_reply());
        assert_eq!(frame.error_code(), Some(21));
        assert_eq!(frame.body, b"Z".to_vec());
    }

    #[test]
    fn test_forwarded_frame_is_byte_identical() {
        // Extra flag bits must survive re-serialization.
        let mut packet = raw_command(3, 1, 1, b"abc");
        packet[8] = 0x01;
        let frame = Frame::from_bytes(&packet, DEFAULT_MAX_FRAME_LENGTH).unwrap();
        assert_eq!(frame.write_to_vec().unwrap(), packet);
    }

    #[test]
    fn test_synthesized_reply_layout() {
        let frame = Frame::reply(0x01020304, b"X".to_vec());
        assert_eq!(frame.write_to_vec().unwrap(), vec![0, 0, 0, 12, 1, 2, 3, 4, 0x80, 0, 0, b'X']);
    }

    #[test]
    fn test_length_shorter_than_header_is_rejected() {
        let mut packet = raw_command(1, 1, 1, &[]);
        packet[..4].copy_from_slice(&5u32.to_be_bytes());
        match Frame::from_bytes(&packet, DEFAULT_MAX_FRAME_LENGTH) {
            Err(FrameError::InvalidLength { length }) => assert_eq!(length, 5),
            other => panic!("Expected InvalidLength, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_length_is_rejected() {
        let packet = raw_command(1, 1, 1, &[0u8; 32]);
        match Frame::from_bytes(&packet, 20) {
            Err(FrameError::FrameTooLarge { length, max }) => {
                assert_eq!(length, 43);
                assert_eq!(max, 20);
            }
            other => panic!("Expected FrameTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_cache_key_for_reference_type_commands() {
        let frame = Frame::command(1, 2, 7, 42u64.to_be_bytes().to_vec());
        assert!(frame.is_cacheable());
        assert_eq!(frame.cache_key(), Some(CacheKey { command: 7, reference_id: 42 }));

        let other = Frame::command(2, 3, 7, 42u64.to_be_bytes().to_vec());
        assert!(!other.is_cacheable());
        assert_eq!(other.cache_key(), None);

        let short = Frame::command(3, 2, 1, vec![0, 1, 2]);
        assert!(short.is_cacheable());
        assert_eq!(short.cache_key(), None);

        let reply = Frame::reply(4, 42u64.to_be_bytes().to_vec());
        assert_eq!(reply.cache_key(), None);
    }

    #[tokio::test]
    async fn test_read_frames_until_eof() {
        let mut stream = Vec::new();
        stream.extend(raw_command(1, 2, 1, &1u64.to_be_bytes()));
        stream.extend(raw_command(2, 1, 9, &[]));
        let mut reader = stream.as_slice();

        let first = read_frame(&mut reader, DEFAULT_MAX_FRAME_LENGTH).await.unwrap().unwrap();
        assert_eq!(first.id, 1);
        let second = read_frame(&mut reader, DEFAULT_MAX_FRAME_LENGTH).await.unwrap().unwrap();
        assert_eq!(second.id, 2);
        assert!(second.body.is_empty());
        assert!(read_frame(&mut reader, DEFAULT_MAX_FRAME_LENGTH).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_truncated_body_is_a_short_read() {
        let packet = raw_command(1, 2, 1, &1u64.to_be_bytes());
        let mut reader = &packet[..packet.len() - 3];
        assert!(read_frame(&mut reader, DEFAULT_MAX_FRAME_LENGTH).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_frame_flushes_whole_frame() {
        let (mut a, mut b) = tokio::io::duplex(64);
        let frame = Frame::command(5, 2, 3, 9u64.to_be_bytes().to_vec());
        write_frame(&mut a, &frame).await.unwrap();
        let mut received = vec![0u8; frame.length as usize];
        b.read_exact(&mut received).await.unwrap();
        assert_eq!(received, frame.write_to_vec().unwrap());
    }

    #[tokio::test]
    async fn test_handshake_relayed_verbatim() {
        let (mut client, mut client_side) = tokio::io::duplex(64);
        let (mut backend_side, mut backend) = tokio::io::duplex(64);

        let debugger = tokio::spawn(async move {
            client.write_all(HANDSHAKE).await.unwrap();
            let mut answer = [0u8; 14];
            client.read_exact(&mut answer).await.unwrap();
            answer
        });
        let vm = tokio::spawn(async move {
            let mut seen = [0u8; 14];
            backend.read_exact(&mut seen).await.unwrap();
            backend.write_all(b"jdwp-handshake").await.unwrap();
            seen
        });

        let (from_client, from_backend) = relay_handshake(&mut client_side, &mut backend_side).await.unwrap();
        assert_eq!(&from_client, HANDSHAKE);
        assert_eq!(&from_backend, b"jdwp-handshake");
        assert_eq!(&vm.await.unwrap(), HANDSHAKE);
        assert_eq!(&debugger.await.unwrap(), b"jdwp-handshake");
    }
}
