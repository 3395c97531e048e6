use hearth_types::SizeClass;

const MIN_WINDOW_WIDTH: i32 = 200;
const MIN_WINDOW_HEIGHT: i32 = 160;

/// Margin kept free around non-fullscreen frames when the viewport is small.
const VIEWPORT_MARGIN: i32 = 24;

/// Concrete frame dimensions for a size bucket. Fullscreen covers the whole
/// viewport; everything else is a fixed shape clamped to fit.
pub fn size_to_pixels(size: SizeClass, viewport: (u32, u32)) -> (i32, i32) {
    let (vw, vh) = (viewport.0 as i32, viewport.1 as i32);
    let (width, height) = match size {
        SizeClass::Small => (420, 320),
        SizeClass::Medium => (640, 480),
        SizeClass::Large => (860, 560),
        SizeClass::ExtraLarge => (1100, 720),
        SizeClass::Fullscreen => return (vw, vh),
    };

    (
        width.min((vw - VIEWPORT_MARGIN).max(MIN_WINDOW_WIDTH)),
        height.min((vh - VIEWPORT_MARGIN).max(MIN_WINDOW_HEIGHT)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_grow_monotonically() {
        let viewport = (1920, 1080);
        let widths: Vec<i32> = [
            SizeClass::Small,
            SizeClass::Medium,
            SizeClass::Large,
            SizeClass::ExtraLarge,
        ]
        .into_iter()
        .map(|s| size_to_pixels(s, viewport).0)
        .collect();

        let mut sorted = widths.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(widths, sorted);
    }

    #[test]
    fn fullscreen_matches_viewport() {
        assert_eq!(size_to_pixels(SizeClass::Fullscreen, (1280, 720)), (1280, 720));
    }

    #[test]
    fn small_viewport_clamps_but_respects_minimums() {
        let (w, h) = size_to_pixels(SizeClass::ExtraLarge, (320, 240));
        assert_eq!(w, 320 - VIEWPORT_MARGIN);
        assert_eq!(h, 240 - VIEWPORT_MARGIN);

        let (w, h) = size_to_pixels(SizeClass::Large, (100, 100));
        assert_eq!(w, MIN_WINDOW_WIDTH);
        assert_eq!(h, MIN_WINDOW_HEIGHT);
    }
}
