//! Tests for default settings and clamping bounds

#[cfg(test)]
mod tests {
    use grhindexer::engine::TilerSettings;
    use grhindexer::export::ExportConfig;
    use grhindexer::io::configuration::{
        DEFAULT_FRAME_DELAY, DEFAULT_STARTING_INDEX, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
        MAX_FRAME_DELAY, MIN_FRAME_DELAY, MIN_STARTING_INDEX, OVERLAY_FILL_COLOR,
        OVERLAY_STROKE_COLOR,
    };

    // Tests defaults survive clamping unchanged
    // Verified by setting the default delay outside the range
    #[test]
    fn test_defaults_within_bounds() {
        let export = ExportConfig::new(
            0,
            i64::from(DEFAULT_FRAME_DELAY),
            i64::from(DEFAULT_STARTING_INDEX),
        );
        assert_eq!(export, ExportConfig::default());
        assert!((MIN_FRAME_DELAY..=MAX_FRAME_DELAY).contains(&export.frame_delay()));
        assert!(export.starting_index() >= MIN_STARTING_INDEX);
    }

    // Tests the default grid matches the settings defaults
    // Verified by changing the settings default tile width
    #[test]
    fn test_default_tile_size() {
        let settings = TilerSettings::default();
        assert_eq!(settings.tile_width, DEFAULT_TILE_WIDTH);
        assert_eq!(settings.tile_height, DEFAULT_TILE_HEIGHT);
        assert_eq!((settings.offset_x, settings.offset_y), (0, 0));
    }

    // Tests the clamp range edges map to themselves
    // Verified by using an exclusive upper bound
    #[test]
    fn test_frame_delay_range_edges() {
        let slowest = ExportConfig::new(0, i64::from(MAX_FRAME_DELAY), 1);
        let fastest = ExportConfig::new(0, i64::from(MIN_FRAME_DELAY), 1);
        assert_eq!(slowest.frame_delay(), MAX_FRAME_DELAY);
        assert_eq!(fastest.frame_delay(), MIN_FRAME_DELAY);
    }

    // Tests overlay colors keep the outline opaque and the fill translucent
    // Verified by making the fill opaque
    #[test]
    fn test_overlay_colors() {
        let [_, _, _, stroke_alpha] = OVERLAY_STROKE_COLOR;
        let [_, _, _, fill_alpha] = OVERLAY_FILL_COLOR;
        assert_eq!(stroke_alpha, u8::MAX);
        assert!(fill_alpha > 0 && fill_alpha < u8::MAX);
    }
}
