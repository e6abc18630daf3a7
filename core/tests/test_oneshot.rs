#[cfg(test)]
mod tests {
    use zstream_core::{compress, decompress_into, is_error};

    #[test]
    fn roundtrip_small_payload() {
        let data = b"hello zstream hello zstream hello zstream";
        let compressed = compress(data, 3).expect("compression should succeed");
        let mut dst = vec![0u8; data.len()];
        let written = decompress_into(&compressed, &mut dst).expect("decompression should succeed");
        assert_eq!(written, data.len());
        assert_eq!(&dst[..], &data[..]);
    }

    #[test]
    fn roundtrip_across_levels() {
        let data: Vec<u8> = (0..2048u32).flat_map(|i| (i % 251).to_le_bytes()).collect();
        for level in [1, 3, 9, 19] {
            let compressed = compress(&data, level).expect("compression should succeed");
            let mut dst = vec![0u8; data.len()];
            let written =
                decompress_into(&compressed, &mut dst).expect("decompression should succeed");
            assert_eq!(written, data.len());
            assert_eq!(dst, data, "level {} roundtrip mismatch", level);
        }
    }

    #[test]
    fn repetitive_input_shrinks_at_level_1() {
        let data = b"abc".repeat(1000); // 3000 bytes
        let compressed = compress(&data, 1).expect("compression should succeed");
        assert!(
            compressed.len() < data.len(),
            "expected {} compressed bytes < {} input bytes",
            compressed.len(),
            data.len()
        );

        let mut dst = vec![0u8; data.len()];
        let written = decompress_into(&compressed, &mut dst).expect("decompression should succeed");
        assert_eq!(written, 3000);
        assert_eq!(dst, data);
    }

    #[test]
    fn is_error_false_on_valid_result_codes() {
        let data = b"abc".repeat(1000);
        let compressed = compress(&data, 1).expect("compression should succeed");
        let mut dst = vec![0u8; data.len()];
        let written = decompress_into(&compressed, &mut dst).expect("decompression should succeed");

        // Byte counts are success codes.
        assert!(!is_error(compressed.len()));
        assert!(!is_error(written));
        assert!(!is_error(0));
    }

    #[test]
    fn is_error_true_on_corrupted_input() {
        let data = b"abc".repeat(1000);
        let compressed = compress(&data, 1).expect("compression should succeed");
        let truncated = &compressed[..10];

        let mut dst = vec![0u8; data.len()];
        let err = decompress_into(truncated, &mut dst)
            .expect_err("truncated frame should fail to decompress");
        let code = err.raw_code().expect("codec error should carry a raw code");
        assert!(is_error(code));
    }

    #[test]
    fn undersized_destination_fails_instead_of_truncating() {
        let data = b"abc".repeat(1000);
        let compressed = compress(&data, 1).expect("compression should succeed");

        let mut dst = vec![0u8; 100];
        let err = decompress_into(&compressed, &mut dst)
            .expect_err("undersized destination should fail");
        let code = err.raw_code().expect("codec error should carry a raw code");
        assert!(is_error(code));
    }

    #[test]
    fn empty_input_roundtrips() {
        let compressed = compress(&[], 1).expect("compression should succeed");
        assert!(!compressed.is_empty(), "empty input still yields a frame");
        let mut dst = [0u8; 0];
        let written = decompress_into(&compressed, &mut dst).expect("decompression should succeed");
        assert_eq!(written, 0);
    }
}
