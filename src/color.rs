use crate::cursor::Float;

use rgb::RGBA8;

use core::fmt;

#[allow(unused_imports)]
use num_traits::real::Real;

/// HSV triple: `h` in degrees `[0, 360)`, `s` and `v` in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsv {
    pub h: Float,
    pub s: Float,
    pub v: Float,
}

impl Hsv {
    pub const fn new(h: Float, s: Float, v: Float) -> Self {
        Self { h, s, v }
    }

    pub fn is_valid(&self) -> bool {
        (0.0..360.0).contains(&self.h)
            && (0.0..=1.0).contains(&self.s)
            && (0.0..=1.0).contains(&self.v)
    }

    pub fn to_rgba(&self) -> RGBA8 {
        let c = self.v * self.s;
        let h = self.h / 60.0;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.v - c;
        let channel = |f: Float| ((f + m) * 255.0).round() as u8;
        RGBA8::new(channel(r), channel(g), channel(b), 255)
    }
}

/// Every representation a cursor color may take.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Color {
    Rgba(RGBA8),
    Hsv(Hsv),
    /// Must be an entry of [`NAMED_COLORS`].
    Named(&'static str),
}

const fn rgb(r: u8, g: u8, b: u8) -> RGBA8 {
    RGBA8 { r, g, b, a: 255 }
}

/// Web/Tk color names understood by [`Color::named`].
pub const NAMED_COLORS: [(&str, RGBA8); 20] = [
    ("black", rgb(0, 0, 0)),
    ("white", rgb(255, 255, 255)),
    ("red", rgb(255, 0, 0)),
    ("green", rgb(0, 128, 0)),
    ("lime", rgb(0, 255, 0)),
    ("blue", rgb(0, 0, 255)),
    ("cyan", rgb(0, 255, 255)),
    ("magenta", rgb(255, 0, 255)),
    ("yellow", rgb(255, 255, 0)),
    ("orange", rgb(255, 165, 0)),
    ("purple", rgb(128, 0, 128)),
    ("pink", rgb(255, 192, 203)),
    ("brown", rgb(165, 42, 42)),
    ("gray", rgb(128, 128, 128)),
    ("grey", rgb(128, 128, 128)),
    ("navy", rgb(0, 0, 128)),
    ("teal", rgb(0, 128, 128)),
    ("olive", rgb(128, 128, 0)),
    ("maroon", rgb(128, 0, 0)),
    ("gold", rgb(255, 215, 0)),
];

fn lookup(name: &str) -> Option<(&'static str, RGBA8)> {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .copied()
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Self = Self::Named("black");
    pub const WHITE: Self = Self::Named("white");
    pub const RED: Self = Self::Named("red");
    pub const GREEN: Self = Self::Named("green");
    pub const BLUE: Self = Self::Named("blue");
    pub const CYAN: Self = Self::Named("cyan");
    pub const MAGENTA: Self = Self::Named("magenta");
    pub const ORANGE: Self = Self::Named("orange");

    /// Parses a color name or a `#rrggbb` web color.
    pub fn named(name: &str) -> Option<Self> {
        if let Some(hex) = name.strip_prefix('#') {
            let bytes = hex.as_bytes();
            if bytes.len() != 6 {
                return None;
            }
            let mut channels = [0u8; 3];
            for (i, pair) in bytes.chunks(2).enumerate() {
                channels[i] = hex_digit(pair[0])? * 16 + hex_digit(pair[1])?;
            }
            let [r, g, b] = channels;
            return Some(Self::Rgba(rgb(r, g, b)));
        }

        lookup(name).map(|(known, _)| Self::Named(known))
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Self::Rgba(_) => true,
            Self::Hsv(hsv) => hsv.is_valid(),
            Self::Named(name) => lookup(name).is_some(),
        }
    }

    /// `None` when the color is not valid.
    pub fn to_rgba(&self) -> Option<RGBA8> {
        match self {
            Self::Rgba(c) => Some(*c),
            Self::Hsv(hsv) => hsv.is_valid().then(|| hsv.to_rgba()),
            Self::Named(name) => lookup(name).map(|(_, c)| c),
        }
    }
}

impl From<RGBA8> for Color {
    fn from(c: RGBA8) -> Self {
        Self::Rgba(c)
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        Self::Hsv(hsv)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Rgba(c) => write!(f, "rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a),
            Self::Hsv(hsv) => write!(f, "hsv({}, {}, {})", hsv.h, hsv.s, hsv.v),
            Self::Named(name) => write!(f, "'{}'", name),
        }
    }
}
