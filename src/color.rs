use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed species colours
// ---------------------------------------------------------------------------

/// The three Iris species and their fixed colours (the classic ggplot2
/// three-class hues).
pub const SPECIES_COLORS: [(&str, Color32); 3] = [
    ("setosa", Color32::from_rgb(0xF8, 0x76, 0x6D)),
    ("versicolor", Color32::from_rgb(0x00, 0xBA, 0x38)),
    ("virginica", Color32::from_rgb(0x61, 0x9C, 0xFF)),
];

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues. Used for
/// species labels outside the fixed three.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: species label → Color32
// ---------------------------------------------------------------------------

/// Explicit category→colour configuration. Known species take their fixed
/// colour; any other label present in the dataset receives a generated hue,
/// so an unexpected category still gets a stable, distinct colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build the mapping for the labels actually present in the dataset.
    pub fn for_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut mapping: BTreeMap<String, Color32> = BTreeMap::new();
        let mut extras: Vec<String> = Vec::new();

        for label in labels {
            match fixed_color(label) {
                Some(color) => {
                    mapping.insert(label.to_string(), color);
                }
                None => extras.push(label.to_string()),
            }
        }

        for (label, color) in extras.iter().zip(generate_palette(extras.len())) {
            mapping.insert(label.clone(), color);
        }

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a species label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Legend entries (label → colour) for the UI, in label order.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(label, color)| (label.clone(), *color))
            .collect()
    }
}

fn fixed_color(label: &str) -> Option<Color32> {
    SPECIES_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_species_take_fixed_colors() {
        let map = ColorMap::for_labels(["setosa", "versicolor", "virginica"]);
        assert_eq!(map.color_for("setosa"), Color32::from_rgb(0xF8, 0x76, 0x6D));
        assert_eq!(
            map.color_for("versicolor"),
            Color32::from_rgb(0x00, 0xBA, 0x38)
        );
        assert_eq!(
            map.color_for("virginica"),
            Color32::from_rgb(0x61, 0x9C, 0xFF)
        );
    }

    #[test]
    fn unknown_label_gets_a_generated_color() {
        let map = ColorMap::for_labels(["setosa", "mutant"]);
        let color = map.color_for("mutant");
        assert_ne!(color, Color32::GRAY);
        assert_ne!(color, map.color_for("setosa"));
    }

    #[test]
    fn unmapped_label_falls_back_to_gray() {
        let map = ColorMap::for_labels(["setosa"]);
        assert_eq!(map.color_for("not-in-dataset"), Color32::GRAY);
    }

    #[test]
    fn legend_lists_labels_in_order() {
        let map = ColorMap::for_labels(["virginica", "setosa"]);
        let labels: Vec<String> = map.legend_entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, ["setosa", "virginica"]);
    }

    #[test]
    fn generated_palette_is_distinct() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
    }
}
