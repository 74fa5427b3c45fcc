//! The two page themes and the bubble palettes they select.

pub type Rgb = [f32; 3];

/// Decode a `0xRRGGBB` literal into linear-ish `[0, 1]` channels.
#[inline]
pub fn hex_rgb(hex: u32) -> Rgb {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [r, g, b]
}

const VIOLET_PALETTE: [u32; 4] = [0x8B5CF6, 0x9B87F5, 0xD3E4FD, 0xA89AF5];
const EMBER_PALETTE: [u32; 4] = [0xF97316, 0xFB923C, 0xFFEDD5, 0xFD9C41];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Violet,
    Ember,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Violet => Theme::Ember,
            Theme::Ember => Theme::Violet,
        }
    }

    /// Name used in `data-theme` attributes and body classes.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Violet => "violet",
            Theme::Ember => "ember",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "violet" | "theme1" => Some(Theme::Violet),
            "ember" | "theme2" => Some(Theme::Ember),
            _ => None,
        }
    }

    pub fn palette(self) -> Palette {
        let hexes = match self {
            Theme::Violet => VIOLET_PALETTE,
            Theme::Ember => EMBER_PALETTE,
        };
        Palette {
            theme: self,
            colors: hexes.map(hex_rgb),
        }
    }
}

/// Four bubble colors tied to the theme that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub theme: Theme,
    pub colors: [Rgb; 4],
}

impl Palette {
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.iter().any(|c| *c == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_rgb_decodes_channels() {
        assert_eq!(hex_rgb(0xFF0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_rgb(0x00FF00), [0.0, 1.0, 0.0]);
        let c = hex_rgb(0x8B5CF6);
        assert!((c[0] - 139.0 / 255.0).abs() < 1e-6);
        assert!((c[2] - 246.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Violet.toggled(), Theme::Ember);
        assert_eq!(Theme::Violet.toggled().toggled(), Theme::Violet);
    }

    #[test]
    fn names_round_trip_and_accept_legacy_ids() {
        for t in [Theme::Violet, Theme::Ember] {
            assert_eq!(Theme::from_name(t.name()), Some(t));
        }
        assert_eq!(Theme::from_name("theme2"), Some(Theme::Ember));
        assert_eq!(Theme::from_name(" Violet "), Some(Theme::Violet));
        assert_eq!(Theme::from_name("sepia"), None);
    }

    #[test]
    fn palettes_differ_between_themes() {
        let a = Theme::Violet.palette();
        let b = Theme::Ember.palette();
        assert_ne!(a, b);
        assert!(a.colors.iter().all(|c| !b.contains(*c)));
    }
}
