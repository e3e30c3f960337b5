use eframe::egui::Color32;

pub struct ColorOption {
    pub name: &'static str,
    pub color: Color32,
}

pub const PALETTE: &[ColorOption] = &[
    ColorOption { name: "Red", color: Color32::from_rgb(255, 0, 0) },
    ColorOption { name: "Green", color: Color32::from_rgb(0, 255, 0) },
    ColorOption { name: "Blue", color: Color32::from_rgb(0, 0, 255) },
    ColorOption { name: "Yellow", color: Color32::from_rgb(255, 255, 0) },
    ColorOption { name: "Purple", color: Color32::from_rgb(128, 0, 128) },
    ColorOption { name: "Orange", color: Color32::from_rgb(255, 165, 0) },
    ColorOption { name: "Cyan", color: Color32::from_rgb(0, 255, 255) },
    ColorOption { name: "White", color: Color32::from_rgb(255, 255, 255) },
    ColorOption { name: "Black", color: Color32::from_rgb(0, 0, 0) },
];

pub fn color_by_name(name: &str) -> Option<Color32> {
    PALETTE
        .iter()
        .find(|option| option.name == name)
        .map(|option| option.color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_entry_is_found_by_name() {
        for option in PALETTE {
            assert_eq!(color_by_name(option.name), Some(option.color));
        }
    }

    #[test]
    fn test_unknown_name_returns_none() {
        assert_eq!(color_by_name("Magenta"), None);
        assert_eq!(color_by_name("green"), None);
    }
}
