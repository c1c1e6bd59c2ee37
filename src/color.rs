// Simple color type, either RGB or HSL with a fractional alpha,
// rendered to the CSS strings the 2D canvas expects

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    Hsla { hue: u32, saturation: u8, lightness: u8, a: f64 },
}

impl Color {
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color::Rgba { r, g, b, a }
    }

    pub fn hsla(hue: u32, saturation: u8, lightness: u8, a: f64) -> Color {
        Color::Hsla {
            hue,
            saturation,
            lightness,
            a,
        }
    }

    // Created from an unsigned 32 representing RRGGBBAA
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color::rgba(r, g, b, a as f64 / 255.0)
    }

    pub fn with_alpha(self, alpha: f64) -> Color {
        match self {
            Color::Rgba { r, g, b, .. } => Color::rgba(r, g, b, alpha),
            Color::Hsla {
                hue,
                saturation,
                lightness,
                ..
            } => Color::hsla(hue, saturation, lightness, alpha),
        }
    }

    pub fn to_css(&self) -> String {
        match *self {
            Color::Rgba { r, g, b, a } => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Hsla {
                hue,
                saturation,
                lightness,
                a,
            } => format!("hsla({},{}%,{}%,{})", hue, saturation, lightness, a),
        }
    }

    // Same as to_css but with the alpha rounded to three decimals, used for
    // values computed per frame so the canvas parses short strings
    pub fn to_css_rounded(&self) -> String {
        match *self {
            Color::Rgba { r, g, b, a } => format!("rgba({},{},{},{:.3})", r, g, b, a),
            Color::Hsla {
                hue,
                saturation,
                lightness,
                a,
            } => format!("hsla({},{}%,{}%,{:.3})", hue, saturation, lightness, a),
        }
    }
}

#[cfg(test)]
impl Color {
    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }
}
