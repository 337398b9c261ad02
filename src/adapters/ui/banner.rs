//! ASCII banner (ENVLIC) with a green gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Forest green (#1b5e20).
const FOREST_GREEN: (u8, u8, u8) = (0x1b, 0x5e, 0x20);
/// Leaf green (#8bc34a).
const LEAF_GREEN: (u8, u8, u8) = (0x8b, 0xc3, 0x4a);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Banner art, or the plain name when the built-in font is unavailable.
fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("ENVLIC").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "ENVLIC".to_string())
}

/// Prints the welcome banner with a gradient from forest to leaf green, then
/// the version and a subtitle.
pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(FOREST_GREEN, LEAF_GREEN, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: LEAF_GREEN.0,
        g: LEAF_GREEN.1,
        b: LEAF_GREEN.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Environmental licensing processes\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
