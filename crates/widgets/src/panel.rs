use crate::kind::PanelKind;
use hud_renderer::{PixelBuffer, Rgba, Surface};
use hud_theme::Palette;
use tracing::warn;

/// Logical chart width before scaling.
pub const LOGICAL_WIDTH: usize = 74;
/// Logical chart height before scaling.
pub const LOGICAL_HEIGHT: usize = 30;
/// Largest accepted device-resolution multiplier.
pub const MAX_PIXEL_SCALE: u32 = 8;

/// A single scrolling strip-chart.
///
/// The buffer is a history of columns, oldest on the left.  Each
/// [`StripChart::update`] scrolls everything one column left and draws the
/// new sample as a bar growing up from the bottom of the rightmost column.
#[derive(Debug)]
pub struct StripChart<S> {
    kind:        PanelKind,
    foreground:  Rgba,
    background:  Rgba,
    pixel_scale: usize,
    buffer:      PixelBuffer,
    primary:     String,
    secondary:   String,
    visible:     bool,
    generation:  u64,
    surface:     S,
}

impl<S: Surface> StripChart<S> {
    /// Allocate a panel whose buffer is `74×30 × pixel_scale` filled with the
    /// background colour.  The scale is clamped to `1..=MAX_PIXEL_SCALE`.
    pub fn new(kind: PanelKind, palette: Palette, pixel_scale: u32, mut surface: S) -> Self {
        let clamped = pixel_scale.clamp(1, MAX_PIXEL_SCALE);
        if clamped != pixel_scale {
            warn!(requested = pixel_scale, used = clamped, "pixel_scale out of range");
        }
        let pixel_scale = clamped as usize;
        let foreground = palette.foreground.to_rgba();
        let background = palette.background.to_rgba();
        let buffer = PixelBuffer::new(
            LOGICAL_WIDTH * pixel_scale,
            LOGICAL_HEIGHT * pixel_scale,
            background,
        );

        let primary = kind.label().to_string();
        surface.set_label(&primary, "");
        surface.present(&buffer);

        Self {
            kind,
            foreground,
            background,
            pixel_scale,
            buffer,
            primary,
            secondary: String::new(),
            visible: false,
            generation: 0,
            surface,
        }
    }

    /// Record one sample.
    ///
    /// `max_value` is the saturation point: samples at or above it draw a
    /// full-height bar.  Zero or negative samples, a non-positive or NaN
    /// `max_value` and a NaN sample all draw an empty column.
    pub fn update(&mut self, value: f64, max_value: f64, primary: &str, secondary: &str) {
        self.primary.replace_range(.., primary);
        self.secondary.replace_range(.., secondary);
        self.surface.set_label(primary, secondary);

        let bar_top = self.bar_top(value, max_value);
        let (fg, bg) = (self.foreground, self.background);
        let x = self.buffer.width() - 1;

        self.buffer.shift_left();
        self.buffer
            .fill_column(x, |y| if (y as f64) < bar_top { bg } else { fg });

        self.generation += 1;
        self.surface.present(&self.buffer);
    }

    /// First row (from the top) belonging to the bar, in `[0, height]`.
    fn bar_top(&self, value: f64, max_value: f64) -> f64 {
        let height = self.buffer.height() as f64;
        let ratio = value / max_value;
        if max_value <= 0.0 || ratio.is_nan() {
            return height;
        }
        (height - ratio * height).clamp(0.0, height)
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.surface.set_visible(visible);
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn pixel_scale(&self) -> usize {
        self.pixel_scale
    }

    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn foreground(&self) -> Rgba {
        self.foreground
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Bold part of the label, e.g. `"16 MS"`.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Normal-weight part of the label, e.g. `"(14-33)"`.
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of samples drawn so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hud_renderer::RecordingSurface;
    use hud_theme::Color;

    fn palette() -> Palette {
        Palette {
            foreground: Color::rgb(0, 255, 255),
            background: Color::rgb(0, 0, 34),
        }
    }

    fn chart() -> StripChart<RecordingSurface> {
        StripChart::new(PanelKind::Rate, palette(), 1, RecordingSurface::default())
    }

    fn column(chart: &StripChart<RecordingSurface>, x: usize) -> Vec<Rgba> {
        (0..chart.height())
            .map(|y| chart.buffer().pixel(x, y).unwrap())
            .collect()
    }

    #[test]
    fn construction_fills_background_and_scales() {
        let chart = StripChart::new(PanelKind::Memory, palette(), 2, RecordingSurface::default());
        assert_eq!((chart.width(), chart.height()), (148, 60));
        assert!(chart
            .buffer()
            .as_bytes()
            .chunks_exact(4)
            .all(|px| px == chart.background()));
        assert_eq!(chart.primary(), "MB");
        assert_eq!(chart.surface().primary, "MB");
        assert_eq!(chart.surface().presents, 1);
    }

    #[test]
    fn zero_scale_is_clamped_to_one() {
        let chart = StripChart::new(PanelKind::Rate, palette(), 0, RecordingSurface::default());
        assert_eq!(chart.pixel_scale(), 1);
        assert_eq!((chart.width(), chart.height()), (74, 30));
    }

    #[test]
    fn huge_scale_is_clamped() {
        for requested in [9, 5_000, u32::MAX] {
            let chart =
                StripChart::new(PanelKind::Rate, palette(), requested, RecordingSurface::default());
            assert_eq!(chart.pixel_scale(), MAX_PIXEL_SCALE as usize);
            assert_eq!((chart.width(), chart.height()), (74 * 8, 30 * 8));
        }
    }

    #[test]
    fn every_update_shifts_the_history_left() {
        let mut chart = chart();
        let samples = [10.0, 90.0, 0.0, 55.0, 100.0, 33.3, 7.0];

        for (i, &v) in samples.iter().enumerate() {
            let before = chart.buffer().clone();
            chart.update(v, 100.0, "x", "y");

            for y in 0..chart.height() {
                for x in 0..chart.width() - 1 {
                    assert_eq!(
                        chart.buffer().pixel(x, y),
                        before.pixel(x + 1, y),
                        "sample {i} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn new_column_matches_bar_height() {
        let mut chart = chart();
        let (fg, bg) = (chart.foreground(), chart.background());
        let last = chart.width() - 1;

        for (value, max) in [(50.0, 100.0), (20.0, 200.0), (1.0, 3.0), (99.0, 100.0)] {
            chart.update(value, max, "", "");
            let top = 30.0 - (value / max) * 30.0;
            for (y, px) in column(&chart, last).into_iter().enumerate() {
                let expected = if (y as f64) < top { bg } else { fg };
                assert_eq!(px, expected, "value {value}/{max} row {y}");
            }
        }
    }

    #[test]
    fn half_scale_fills_bottom_half() {
        let mut chart = chart();
        chart.update(50.0, 100.0, "", "");
        let col = column(&chart, chart.width() - 1);
        assert!(col[..15].iter().all(|&px| px == chart.background()));
        assert!(col[15..].iter().all(|&px| px == chart.foreground()));
    }

    #[test]
    fn saturated_and_empty_columns() {
        let mut chart = chart();
        let last = chart.width() - 1;

        for v in [100.0, 250.0, f64::INFINITY] {
            chart.update(v, 100.0, "", "");
            assert!(column(&chart, last).iter().all(|&px| px == chart.foreground()), "{v}");
        }
        for v in [0.0, -20.0, f64::NAN] {
            chart.update(v, 100.0, "", "");
            assert!(column(&chart, last).iter().all(|&px| px == chart.background()), "{v}");
        }
    }

    #[test]
    fn non_positive_ceiling_draws_empty_bar() {
        let mut chart = chart();
        let last = chart.width() - 1;
        for max in [0.0, -1.0] {
            chart.update(50.0, max, "", "");
            assert!(column(&chart, last).iter().all(|&px| px == chart.background()));
        }
    }

    #[test]
    fn pixels_are_opaque() {
        let mut chart = chart();
        chart.update(40.0, 100.0, "", "");
        assert!(chart.buffer().as_bytes().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn labels_are_verbatim_and_presented() {
        let mut chart = chart();
        chart.update(1.0, 100.0, "<b>60 FPS</b>", "(1-&2)");

        assert_eq!(chart.primary(), "<b>60 FPS</b>");
        assert_eq!(chart.secondary(), "(1-&2)");
        assert_eq!(chart.surface().primary, "<b>60 FPS</b>");
        assert_eq!(chart.surface().secondary, "(1-&2)");
        assert_eq!(chart.surface().presents, 2);
        assert_eq!(chart.surface().frame.as_ref(), Some(chart.buffer()));
        assert_eq!(chart.generation(), 1);
    }
}
