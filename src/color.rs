// Simple color struct, created from an unsigned 32 representing RRGGBBAA
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    // CSS color string with an explicit opacity, e.g. "rgba(51,153,255,0.350)".
    // The color's own alpha byte is ignored here.
    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            fixed3(alpha.max(0.0).min(1.0))
        )
    }
}

// Three decimals with JS `toFixed(3)` rounding: the exact binary value is
// rounded, and an exact tie goes up. Ties only happen for multiples of
// 1/16 (0.0625, 0.1875, ...), where `{:.3}` would round to even instead.
fn fixed3(value: f64) -> String {
    // Scaling by 16 is exact, so this only matches true ties (odd k/16)
    let sixteenths = value * 16.0;
    if sixteenths.fract() == 0.0 && sixteenths % 2.0 == 1.0 {
        let thousandths = (sixteenths as u64 * 125 + 1) / 2;
        return format!("{}.{:03}", thousandths / 1000, thousandths % 1000);
    }
    format!("{:.3}", value)
}
