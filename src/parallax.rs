// Scroll offset -> header visuals. Kept free of egui types so it can be tested
// without a rendering context.

use crate::ui_constants::header::{ELEVATION, TITLE_PADDING, TITLE_PADDING_SHIFT, TITLE_SCALE_SHRINK};

/// Derived header visuals for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderParams {
    /// Scroll offset clamped to `[0, max_offset]`, in physical pixels.
    pub offset: f32,
    /// 0 until two thirds of `max_offset` are scrolled, then linear up to 1.
    pub progress: f32,
    pub image_alpha: f32,
    pub title_padding: f32,
    pub title_scale: f32,
    /// Shadow depth; non-zero only when fully collapsed.
    pub elevation: f32,
}

impl HeaderParams {
    pub fn is_collapsed(&self) -> bool {
        self.elevation > 0.0
    }
}

/// Distance the header can travel before it is fully collapsed.
/// `image_height` is in logical points, `top_inset_px` in physical pixels.
pub fn max_offset(image_height: f32, pixels_per_point: f32, top_inset_px: f32) -> f32 {
    (image_height * pixels_per_point).round() - top_inset_px
}

pub fn header_params(scroll_offset: f32, max_offset: f32) -> HeaderParams {
    if max_offset <= 0.0 {
        // Inset taller than the image: nothing left to collapse.
        return params_for(0.0, 1.0, true);
    }
    let offset = scroll_offset.max(0.0).min(max_offset);
    let progress = ((offset * 3.0 - 2.0 * max_offset).max(0.0) / max_offset).min(1.0);
    params_for(offset, progress, offset >= max_offset)
}

fn params_for(offset: f32, progress: f32, collapsed: bool) -> HeaderParams {
    HeaderParams {
        offset,
        progress,
        image_alpha: 1.0 - progress,
        title_padding: TITLE_PADDING + TITLE_PADDING_SHIFT * progress,
        title_scale: 1.0 - TITLE_SCALE_SHRINK * progress,
        elevation: if collapsed { ELEVATION } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn max_offset_subtracts_inset_in_pixels() {
        assert_eq!(max_offset(200.0, 1.0, 20.0), 180.0);
        assert_eq!(max_offset(344.0, 2.0, 48.0), 640.0);
        assert_eq!(max_offset(100.3, 1.5, 0.0), 150.0);
    }

    #[test]
    fn fully_collapsed_at_and_past_max_offset() {
        let max = 180.0;
        for scroll in [180.0, 181.0, 500.0, 10_000.0] {
            let p = header_params(scroll, max);
            assert_eq!(p.offset, max);
            assert!((p.progress - 1.0).abs() < EPS);
            assert!(p.image_alpha.abs() < EPS);
            assert!((p.title_scale - 0.75).abs() < EPS);
            assert!((p.title_padding - 36.0).abs() < EPS);
            assert!(p.is_collapsed());
        }
    }

    #[test]
    fn untouched_until_two_thirds() {
        let max = 180.0;
        for scroll in [-20.0, 0.0, 50.0, 119.0, 120.0] {
            let p = header_params(scroll, max);
            assert_eq!(p.progress, 0.0);
            assert_eq!(p.image_alpha, 1.0);
            assert_eq!(p.title_scale, 1.0);
            assert_eq!(p.title_padding, 16.0);
            assert!(!p.is_collapsed());
        }
        assert_eq!(header_params(0.0, max).offset, 0.0);
    }

    #[test]
    fn progress_ramps_linearly_over_last_third() {
        let max = 180.0;
        let mut prev = 0.0;
        for scroll in (121..180).map(|s| s as f32) {
            let p = header_params(scroll, max);
            assert!(p.progress > prev, "not increasing at {scroll}");
            let expected = (scroll * 3.0 - 2.0 * max) / max;
            assert!((p.progress - expected).abs() < EPS);
            assert!(!p.is_collapsed());
            prev = p.progress;
        }
        // Constant slope: 3 / max per pixel.
        let a = header_params(130.0, max).progress;
        let b = header_params(140.0, max).progress;
        let c = header_params(150.0, max).progress;
        assert!(((b - a) - (c - b)).abs() < EPS);
        assert!(((b - a) - 30.0 / max).abs() < EPS);
    }

    #[test]
    fn midpoint_of_ramp() {
        let p = header_params(150.0, 180.0);
        assert!((p.progress - 0.5).abs() < EPS);
        assert!((p.image_alpha - 0.5).abs() < EPS);
        assert!((p.title_scale - 0.875).abs() < EPS);
        assert!((p.title_padding - 26.0).abs() < EPS);
    }

    #[test]
    fn non_positive_max_offset_counts_as_collapsed() {
        let p = header_params(10.0, 0.0);
        assert_eq!(p.offset, 0.0);
        assert_eq!(p.progress, 1.0);
        assert!(p.is_collapsed());
        assert!(header_params(0.0, -30.0).is_collapsed());
    }
}
