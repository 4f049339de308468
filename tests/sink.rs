mod tests {
    use myrtio_light_fader::{
        CrossfadeEngine, DisplaySink, FadeOptions, PixelWrite, Rgb, SmartLedsSink,
    };
    use smart_leds::SmartLedsWrite;

    #[derive(Default)]
    struct FakeStrip {
        writes: Vec<Vec<Rgb>>,
        fail: bool,
    }

    impl SmartLedsWrite for FakeStrip {
        type Error = &'static str;
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err("bus error");
            }
            self.writes.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[derive(Default)]
    struct NoopClock;

    impl myrtio_light_fader::Clock for NoopClock {
        fn sleep(&mut self, _duration: myrtio_light_fader::Duration) {}
    }

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    type Engine = CrossfadeEngine<SmartLedsSink<FakeStrip, 8>, NoopClock, 8>;

    fn bind(num_leds: usize) -> Engine {
        CrossfadeEngine::bind(SmartLedsSink::new(FakeStrip::default()), NoopClock, num_leds)
    }

    fn last_write(engine: &Engine) -> Vec<Rgb> {
        engine.sink().driver().writes.last().cloned().unwrap_or_default()
    }

    #[test]
    fn test_sink_takes_written_frame() {
        let mut sink = SmartLedsSink::<_, 8>::new(FakeStrip::default());
        assert!(sink.current_frame().is_empty());

        sink.set_current_frame(&[Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), Rgb::new(7, 8, 9)]);
        assert!(sink.driver().writes.is_empty());

        sink.present();
        assert_eq!(
            sink.driver().writes,
            vec![vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), Rgb::new(7, 8, 9)]]
        );
        assert!(sink.last_error().is_none());

        sink.set_current_frame(&[Rgb::new(1, 1, 1)]);
        assert_eq!(sink.current_frame(), &[Rgb::new(1, 1, 1)]);
    }

    #[test]
    fn test_sink_frame_is_capped_to_capacity() {
        let mut sink = SmartLedsSink::<_, 2>::new(FakeStrip::default());
        sink.set_current_frame(&[WHITE; 5]);
        assert_eq!(sink.current_frame(), &[WHITE; 2]);
    }

    #[test]
    fn test_bind_sets_sink_length() {
        let mut sink = SmartLedsSink::<_, 8>::new(FakeStrip::default());
        sink.set_current_frame(&[WHITE; 5]);

        let engine = CrossfadeEngine::<_, _, 8>::bind(sink, NoopClock, 3);
        assert_eq!(engine.sink().current_frame(), &[Rgb::default(); 3]);
    }

    #[test]
    fn test_rebind_to_shorter_strip() {
        let mut engine = bind(2);
        engine.set_frame(&[[255, 255, 255]; 2]);
        engine.push(&FadeOptions::default());
        assert_eq!(last_write(&engine), vec![WHITE; 2]);

        engine.rebind(1);
        assert_eq!(engine.sink().current_frame(), &[Rgb::default()]);

        engine.push(&FadeOptions::default());
        assert_eq!(last_write(&engine), vec![Rgb::default()]);
    }

    #[test]
    fn test_rebind_to_longer_strip() {
        let mut engine = bind(2);
        engine.push(&FadeOptions::default());

        engine.rebind(4);
        assert_eq!(engine.sink().current_frame(), &[Rgb::default(); 4]);

        engine.set_frame(&[[255, 255, 255]; 4]);
        engine.push(&FadeOptions::default());
        assert_eq!(last_write(&engine), vec![WHITE; 4]);
    }

    #[test]
    fn test_empty_strip() {
        let mut engine = bind(0);
        assert!(engine.is_empty());
        engine.push(&FadeOptions::default());
        let writes = &engine.sink().driver().writes;
        assert_eq!(writes.len(), 10);
        assert!(writes.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_driver_error_is_kept() {
        let mut sink = SmartLedsSink::<_, 8>::new(FakeStrip {
            fail: true,
            ..FakeStrip::default()
        });
        sink.present();
        assert_eq!(sink.last_error(), Some(&"bus error"));

        sink.driver_mut().fail = false;
        sink.present();
        assert!(sink.last_error().is_none());
        assert_eq!(sink.into_inner().writes.len(), 1);
    }

    #[test]
    fn test_fade_through_smart_leds_driver() {
        let sink = SmartLedsSink::<_, 8>::new(FakeStrip::default());
        let mut engine = CrossfadeEngine::<_, _, 8>::bind(sink, NoopClock, 3);
        engine.set_pixel(PixelWrite::new(2).with_rgb([0, 0, 255]));
        engine.push(&FadeOptions::default());

        let (sink, _clock) = engine.into_parts();
        let writes = sink.into_inner().writes;
        assert_eq!(writes.len(), 10);
        assert_eq!(writes[0], vec![Rgb::default(); 3]);
        assert_eq!(writes[9][2], Rgb::new(0, 0, 255));
    }
}
