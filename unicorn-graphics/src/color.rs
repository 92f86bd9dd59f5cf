//! Colour input
//!
//! Colours can be given as raw RGB, by name, or as HSV. All of them resolve
//! to an [`Rgb`] before they touch a buffer.

use core::str::FromStr;

use unicorn_core::Rgb;

/// Colour lookup error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Name is not in the colour table
    UnknownName,
}

/// Colours that can be referred to by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NamedColor {
    Red,
    Lime,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    Black,
    White,
    Gray,
    Silver,
    Maroon,
    Olive,
    Green,
    Teal,
    Navy,
    Orange,
    Gold,
    Purple,
    Indigo,
}

/// Name table; "grey" is an alias for gray
const NAMES: [(&str, NamedColor); 20] = [
    ("red", NamedColor::Red),
    ("lime", NamedColor::Lime),
    ("blue", NamedColor::Blue),
    ("yellow", NamedColor::Yellow),
    ("magenta", NamedColor::Magenta),
    ("cyan", NamedColor::Cyan),
    ("black", NamedColor::Black),
    ("white", NamedColor::White),
    ("gray", NamedColor::Gray),
    ("grey", NamedColor::Gray),
    ("silver", NamedColor::Silver),
    ("maroon", NamedColor::Maroon),
    ("olive", NamedColor::Olive),
    ("green", NamedColor::Green),
    ("teal", NamedColor::Teal),
    ("navy", NamedColor::Navy),
    ("orange", NamedColor::Orange),
    ("gold", NamedColor::Gold),
    ("purple", NamedColor::Purple),
    ("indigo", NamedColor::Indigo),
];

impl NamedColor {
    /// Look up a colour by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, color)| *color == self)
            .map_or("", |&(name, _)| name)
    }

    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => Rgb::new(255, 0, 0),
            Self::Lime => Rgb::new(0, 255, 0),
            Self::Blue => Rgb::new(0, 0, 255),
            Self::Yellow => Rgb::new(255, 255, 0),
            Self::Magenta => Rgb::new(255, 0, 255),
            Self::Cyan => Rgb::new(0, 255, 255),
            Self::Black => Rgb::new(0, 0, 0),
            Self::White => Rgb::new(255, 255, 255),
            Self::Gray => Rgb::new(127, 127, 127),
            Self::Silver => Rgb::new(192, 192, 192),
            Self::Maroon => Rgb::new(128, 0, 0),
            Self::Olive => Rgb::new(128, 128, 0),
            Self::Green => Rgb::new(0, 128, 0),
            Self::Teal => Rgb::new(0, 128, 128),
            Self::Navy => Rgb::new(0, 0, 128),
            Self::Orange => Rgb::new(255, 165, 0),
            Self::Gold => Rgb::new(255, 215, 0),
            Self::Purple => Rgb::new(128, 0, 128),
            Self::Indigo => Rgb::new(75, 0, 130),
        }
    }
}

impl FromStr for NamedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(ColorError::UnknownName)
    }
}

impl From<NamedColor> for Rgb {
    fn from(color: NamedColor) -> Self {
        color.rgb()
    }
}

/// A colour given either as channels or by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Rgb(Rgb),
    Named(NamedColor),
}

impl Color {
    /// Colour from integer channels, each clamped into 0-255
    pub fn from_rgb(r: i32, g: i32, b: i32) -> Self {
        Self::Rgb(Rgb::saturating(r, g, b))
    }

    /// Colour from a name such as `"red"` or `"Grey"`
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        name.parse().map(Self::Named)
    }

    /// Colour from hue, saturation and value, each nominally 0.0-1.0
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        Self::Rgb(hsv_to_rgb(h, s, v))
    }

    /// Resolve to channel values
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Named(named) => named.rgb(),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Self::Named(named)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.rgb()
    }
}

/// Convert HSV to RGB
///
/// Hue wraps around (1.25 is the same as 0.25). Each resulting channel is
/// `n * 255` truncated toward zero and saturated into a byte.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    if s == 0.0 {
        return from_unit(v, v, v);
    }

    let scaled = h * 6.0;
    let mut sector = scaled as i32;
    // `as` truncates toward zero; step down for negative hues
    if (sector as f32) > scaled {
        sector -= 1;
    }
    let f = scaled - sector as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector.rem_euclid(6) {
        0 => from_unit(v, t, p),
        1 => from_unit(q, v, p),
        2 => from_unit(p, v, t),
        3 => from_unit(p, q, v),
        4 => from_unit(t, p, v),
        _ => from_unit(v, p, q),
    }
}

fn from_unit(r: f32, g: f32, b: f32) -> Rgb {
    Rgb::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_named_lookup_ignores_case() {
        assert_eq!(NamedColor::from_name("red"), Some(NamedColor::Red));
        assert_eq!(NamedColor::from_name("RED"), Some(NamedColor::Red));
        assert_eq!(NamedColor::from_name("Indigo"), Some(NamedColor::Indigo));
        assert_eq!(NamedColor::from_name("chartreuse"), None);
    }

    #[test]
    fn test_grey_is_gray() {
        assert_eq!(NamedColor::from_name("grey"), Some(NamedColor::Gray));
        assert_eq!(NamedColor::Gray.rgb(), Rgb::new(127, 127, 127));
        assert_eq!(NamedColor::Gray.name(), "gray");
    }

    #[test]
    fn test_named_values() {
        assert_eq!(NamedColor::Orange.rgb(), Rgb::new(255, 165, 0));
        assert_eq!(NamedColor::Indigo.rgb(), Rgb::new(75, 0, 130));
        assert_eq!(NamedColor::Teal.rgb(), Rgb::new(0, 128, 128));
    }

    #[test]
    fn test_every_name_resolves_to_itself() {
        for (name, color) in NAMES {
            assert_eq!(name.parse::<NamedColor>(), Ok(color));
        }
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(
            Color::from_name("Cyan").map(Color::rgb),
            Ok(Rgb::new(0, 255, 255))
        );
        assert_eq!(Color::from_name("ultraviolet"), Err(ColorError::UnknownName));
        assert_eq!(Color::from_name(""), Err(ColorError::UnknownName));
    }

    #[test]
    fn test_color_from_rgb_clamps() {
        assert_eq!(Color::from_rgb(300, -5, 12).rgb(), Rgb::new(255, 0, 12));
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0).g, 255);
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_hsv_grey_truncates() {
        assert_eq!(hsv_to_rgb(0.7, 0.0, 0.5), Rgb::new(127, 127, 127));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 0.0), Rgb::BLACK);
    }

    #[test]
    fn test_hsv_negative_hue_wraps() {
        assert_eq!(hsv_to_rgb(-0.5, 1.0, 1.0), hsv_to_rgb(0.5, 1.0, 1.0));
    }

    proptest! {
        #[test]
        fn prop_full_saturation_and_value_has_a_full_channel(h in 0.0f32..1.0) {
            let rgb = hsv_to_rgb(h, 1.0, 1.0);
            prop_assert!(rgb.channels().contains(&255));
        }

        #[test]
        fn prop_zero_value_is_black(h in -4.0f32..4.0, s in 0.0f32..1.0) {
            prop_assert_eq!(hsv_to_rgb(h, s, 0.0), Rgb::BLACK);
        }
    }
}
