/// Opaque 8-bit RGB colour as written into panel pixel buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS-style hex colour (`#RGB` or `#RRGGBB`, `#` optional).
    ///
    /// Each shorthand digit is doubled, so `"0fa"` reads as `"00ffaa"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };
        let short = |s: &str| -> Option<u8> { byte(s).map(|d| d * 0x11) };

        match hex.len() {
            3 => Some(Self {
                r: short(&hex[0..1])?,
                g: short(&hex[1..2])?,
                b: short(&hex[2..3])?,
            }),
            6 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
            }),
            _ => None,
        }
    }

    /// Like [`Color::from_hex`], but malformed input resolves to opaque black.
    pub fn from_hex_or_black(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_else(|| {
            tracing::debug!("unparseable colour '{hex}', using black");
            Self::BLACK
        })
    }

    /// Fully opaque RGBA bytes.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}
