use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart series colours
// ---------------------------------------------------------------------------

/// The three things drawn on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Observed,
    FullTrend,
    RecentTrend,
}

impl Series {
    /// Hue in degrees: blue scatter, red long-term line, orange recent line.
    fn hue(self) -> f32 {
        match self {
            Series::Observed => 210.0,
            Series::FullTrend => 0.0,
            Series::RecentTrend => 33.0,
        }
    }

    pub fn color(self) -> Color32 {
        hsl_to_color32(self.hue(), 0.75, 0.5)
    }

    /// Same hue, lighter, for the warning frame behind the analysis text.
    pub fn tint(self) -> Color32 {
        hsl_to_color32(self.hue(), 0.75, 0.9)
    }
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colours_are_distinct() {
        let colors = [
            Series::Observed.color(),
            Series::FullTrend.color(),
            Series::RecentTrend.color(),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn full_trend_is_red_dominant() {
        let c = Series::FullTrend.color();
        assert!(c.r() > c.g() && c.r() > c.b());
    }

    #[test]
    fn tint_is_lighter_than_color() {
        let base = Series::RecentTrend.color();
        let tint = Series::RecentTrend.tint();
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(tint) > sum(base));
    }
}
