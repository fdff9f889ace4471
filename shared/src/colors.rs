/// Marker background when a track has no accent colour.
pub const DEFAULT_MARKER_BG: (u8, u8, u8) = (0x0f, 0x17, 0x2a);
pub const DARK_TEXT: &str = "#0f172a";
pub const LIGHT_TEXT: &str = "#ffffff";

/// Parse `#rgb` or `#rrggbb` (leading `#` optional).
pub fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

/// Convert RGB to HSL. Returns (h: 0..360, s: 0..1, l: 0..1).
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}

/// Text colour that stays readable on top of `bg`.
pub fn contrast_text((r, g, b): (u8, u8, u8)) -> &'static str {
    let (_, _, l) = rgb_to_hsl(r, g, b);
    if l > 0.45 { DARK_TEXT } else { LIGHT_TEXT }
}

/// Background for a marker pill: the accent when it parses, slate otherwise.
pub fn marker_background(accent: Option<&str>) -> (u8, u8, u8) {
    accent.and_then(parse_hex).unwrap_or(DEFAULT_MARKER_BG)
}

/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}
