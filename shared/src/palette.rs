use crate::error::ColorError;

/// The selectable swatch set, in display order.
pub const SWATCHES: [&str; 26] = [
    "#000000", "#ffffff", "#ee3333", "#e64980", "#be4bdb", "#893200", "#228be6", "#3333ee",
    "#40c057", "#00aa00", "#fab005", "#fd7e14", "#808080", "#d3d3d3", "#8b0000", "#ff1493",
    "#4b0082", "#7fffd4", "#00ffff", "#4682b4", "#6a5acd", "#3cb371", "#adff2f", "#ff4500",
    "#ffa07a", "#ffe4b5",
];

/// Chalk white, active until the user picks a swatch.
pub const DEFAULT_COLOR: &str = "rgb(255,255,255)";

pub fn swatch(index: usize) -> Option<&'static str> {
    SWATCHES.get(index).copied()
}

pub fn swatch_index(color: &str) -> Option<usize> {
    SWATCHES
        .iter()
        .position(|swatch| swatch.eq_ignore_ascii_case(color))
}

/// Parses the CSS color forms the board produces (`#rgb`, `#rrggbb`,
/// `rgb(r, g, b)`) into opaque RGBA.
pub fn parse_color(color: &str) -> Result<[u8; 4], ColorError> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::Syntax(color.to_string()));
    }
    if let Some(body) = color
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let mut channels = [0u8, 0, 0, 255];
        let mut parts = body.split(',');
        for channel in channels.iter_mut().take(3) {
            let part = parts
                .next()
                .ok_or_else(|| ColorError::Syntax(color.to_string()))?;
            let value: u16 = part
                .trim()
                .parse()
                .map_err(|_| ColorError::Syntax(color.to_string()))?;
            *channel = u8::try_from(value).map_err(|_| ColorError::Range(color.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(ColorError::Syntax(color.to_string()));
        }
        return Ok(channels);
    }
    Err(ColorError::Syntax(color.to_string()))
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut out = [0u8, 0, 0, 255];
            for (index, digit) in hex.chars().enumerate() {
                let value = digit.to_digit(16)? as u8;
                out[index] = value * 17;
            }
            Some(out)
        }
        6 => {
            let mut out = [0u8, 0, 0, 255];
            for index in 0..3 {
                out[index] = u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16).ok()?;
            }
            Some(out)
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;
