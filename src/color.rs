use eframe::egui::Color32;
use lazy_static::lazy_static;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting from the dashboard's blue.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (205.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

const CHARTS: usize = 3;

lazy_static! {
    static ref CHART_PALETTE: Vec<Color32> = generate_palette(CHARTS);
}

/// Colour of the `index`-th chart on screen.
pub fn chart_color(index: usize) -> Color32 {
    CHART_PALETTE[index % CHARTS]
}

// ---------------------------------------------------------------------------
// Metric deltas
// ---------------------------------------------------------------------------

pub const DELTA_UP: Color32 = Color32::from_rgb(9, 171, 59);
pub const DELTA_DOWN: Color32 = Color32::from_rgb(255, 43, 43);

/// Green for growth, red for a decline (a leading minus sign).
pub fn delta_color(delta: &str) -> Color32 {
    if delta.trim_start().starts_with('-') {
        DELTA_DOWN
    } else {
        DELTA_UP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_is_distinct() {
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a));
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_chart_color_wraps() {
        assert_eq!(chart_color(0), chart_color(3));
        assert_eq!(chart_color(1), generate_palette(3)[1]);
    }

    #[test]
    fn test_delta_color() {
        assert_eq!(delta_color("12%"), DELTA_UP);
        assert_eq!(delta_color("-3%"), DELTA_DOWN);
    }
}
