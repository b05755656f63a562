mod tests {
    use myrtio_rgbw_light::color::{
        ChannelRole, Color, kelvin_to_mired, mired_to_kelvin, temperature_to_rgb,
    };
    use smart_leds::{RGB8, RGBW, White};

    #[test]
    fn test_temperature_to_rgb_warm_white() {
        // 370 mired is about 2700K
        let color = temperature_to_rgb(370);
        assert_eq!(color, Color::from_rgb(255, 166, 87));
        assert!(color.green < color.red);
        assert!(color.blue < color.green);
    }

    #[test]
    fn test_temperature_to_rgb_daylight() {
        // 154 mired is about 6500K
        assert_eq!(temperature_to_rgb(154), Color::from_rgb(255, 252, 247));
        assert_eq!(temperature_to_rgb(153), Color::from_rgb(255, 254, 250));
    }

    #[test]
    fn test_temperature_to_rgb_zero_is_one() {
        assert_eq!(temperature_to_rgb(0), temperature_to_rgb(1));
        assert_eq!(temperature_to_rgb(0), Color::from_rgb(151, 183, 255));
    }

    #[test]
    fn test_temperature_to_rgb_clamps_range() {
        // Everything hotter than 40000K looks the same
        assert_eq!(temperature_to_rgb(25), temperature_to_rgb(1));
        // Everything colder than 1000K looks the same
        assert_eq!(temperature_to_rgb(1000), Color::from_rgb(255, 67, 0));
        assert_eq!(temperature_to_rgb(u16::MAX), temperature_to_rgb(1000));
    }

    #[test]
    fn test_temperature_to_rgb_branches() {
        assert_eq!(temperature_to_rgb(100), Color::from_rgb(201, 203, 255));
        assert_eq!(temperature_to_rgb(200), Color::from_rgb(255, 228, 205));
        // 2000K sits on the blue cutoff
        assert_eq!(temperature_to_rgb(500), Color::from_rgb(255, 136, 13));
    }

    #[test]
    fn test_temperature_to_rgb_white_is_off() {
        for mired in [0, 153, 370, 500, u16::MAX] {
            assert_eq!(temperature_to_rgb(mired).white, 0);
        }
    }

    #[test]
    fn test_mired_kelvin() {
        assert_eq!(mired_to_kelvin(370), 2702);
        assert_eq!(mired_to_kelvin(0), 1_000_000);
        assert_eq!(kelvin_to_mired(2700), 370);
        assert_eq!(kelvin_to_mired(6500), 153);
        assert_eq!(kelvin_to_mired(0), u16::MAX);
        assert_eq!(kelvin_to_mired(10), u16::MAX);
    }

    #[test]
    fn test_color_channels() {
        let mut color = Color::new(1, 2, 3, 4);
        assert_eq!(color.channel(ChannelRole::Red), 1);
        assert_eq!(color.channel(ChannelRole::White), 4);

        color.set_channel(ChannelRole::Blue, 30);
        assert_eq!(color, Color::new(1, 2, 30, 4));
        assert_eq!(color.with_rgb(7, 8, 9), Color::new(7, 8, 9, 4));
        assert_eq!(color.with_white(0), Color::new(1, 2, 30, 0));
        assert_eq!(Color::from_rgb_u32(0x00FF_AA78), Color::from_rgb(255, 170, 120));
    }

    #[test]
    fn test_smart_leds_conversions() {
        let color = Color::new(10, 20, 30, 40);
        let rgbw: RGBW<u8> = color.into();
        assert_eq!((rgbw.r, rgbw.g, rgbw.b, rgbw.a), (10, 20, 30, White(40)));
        assert_eq!(Color::from(rgbw), color);

        assert_eq!(RGB8::from(color), RGB8::new(10, 20, 30));
        assert_eq!(Color::from(RGB8::new(10, 20, 30)), Color::from_rgb(10, 20, 30));
    }
}
