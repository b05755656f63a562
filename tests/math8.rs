mod tests {
    use myrtio_rgbw_light::gamma::{GAMMA8, gamma8};
    use myrtio_rgbw_light::math8::{clamp8, map8};

    #[test]
    fn test_map8() {
        assert_eq!(map8(255, 128), 128);
        assert_eq!(map8(0, 128), 0);
        assert_eq!(map8(128, 128), 64);
        assert_eq!(map8(64, 255), 64);
        assert_eq!(map8(63, 63), 15);
        assert_eq!(map8(128, 0), 0);
    }

    #[test]
    fn test_map8_truncates() {
        for value in 0..=255u8 {
            for max in [0u8, 1, 63, 64, 100, 254, 255] {
                let expected = (u32::from(value) * u32::from(max) / 255) as u8;
                assert_eq!(map8(value, max), expected);
            }
        }
    }

    #[test]
    fn test_clamp8() {
        assert_eq!(clamp8(0), 0);
        assert_eq!(clamp8(255), 255);
        assert_eq!(clamp8(256), 255);
        assert_eq!(clamp8(u16::MAX), 255);
    }

    #[test]
    fn test_gamma8_table() {
        assert_eq!(GAMMA8.len(), 256);
        assert_eq!(gamma8(0), 0);
        assert_eq!(gamma8(27), 0);
        assert_eq!(gamma8(28), 1);
        assert_eq!(gamma8(64), 5);
        assert_eq!(gamma8(128), 37);
        assert_eq!(gamma8(200), 129);
        assert_eq!(gamma8(255), 255);
    }

    #[test]
    fn test_gamma8_monotonic() {
        for pair in GAMMA8.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
