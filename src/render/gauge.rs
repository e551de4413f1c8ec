use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::PI;

use crate::algorithm::LINE_BREAK;
use crate::error::RenderError;
use crate::models::GaugeColor;

pub const SKILL_GAUGE_SIZE: u32 = 250;
pub const TOTAL_GAUGE_SIZE: u32 = 320;

const TRACK: RGBColor = RGBColor(222, 226, 230);
const INK: RGBColor = RGBColor(33, 37, 41);
const ARC_STEPS: usize = 64;

fn arc_color(color: GaugeColor) -> RGBColor {
    match color {
        GaugeColor::Red => RGBColor(220, 53, 69),
        GaugeColor::Blue => RGBColor(13, 110, 253),
        GaugeColor::Green => RGBColor(25, 135, 84),
    }
}

/// What to draw: a 0..100 dial with the value, its color and a title whose
/// lines are separated by `LINE_BREAK`.
#[derive(Debug, Clone, Copy)]
pub struct GaugeSpec<'a> {
    pub value: f64,
    pub title: &'a str,
    pub color: GaugeColor,
    pub size: u32,
}

/// Points along the dial from `from` to `to` (both on the 0..100 scale).
/// 0 sits on the left, 100 on the right, the arc passes over the top.
fn arc_points(cx: f64, cy: f64, radius: f64, from: f64, to: f64) -> Vec<(i32, i32)> {
    (0..=ARC_STEPS)
        .map(|i| {
            let v = from + (to - from) * i as f64 / ARC_STEPS as f64;
            let theta = PI * (1.0 - v / 100.0);
            (
                (cx + radius * theta.cos()).round() as i32,
                (cy - radius * theta.sin()).round() as i32,
            )
        })
        .collect()
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Renders one gauge as a standalone SVG document.
pub fn gauge_svg(spec: &GaugeSpec) -> Result<String, RenderError> {
    let size = spec.size.max(64);
    let side = size as f64;
    let (cx, cy) = (side / 2.0, side * 0.52);
    let radius = side * 0.36;
    let stroke = (size / 10).max(4);
    let value = spec.value.clamp(0.0, 100.0);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (size, size)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        root.draw(&PathElement::new(
            arc_points(cx, cy, radius, 0.0, 100.0),
            TRACK.stroke_width(stroke),
        ))
        .map_err(draw_err)?;
        if value > 0.0 {
            root.draw(&PathElement::new(
                arc_points(cx, cy, radius, 0.0, value),
                arc_color(spec.color).stroke_width(stroke),
            ))
            .map_err(draw_err)?;
        }

        let number = ("sans-serif", side * 0.14)
            .into_font()
            .color(&INK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        root.draw(&Text::new(format!("{:.1}", spec.value), (cx as i32, cy as i32), number))
            .map_err(draw_err)?;

        let tick = ("sans-serif", side * 0.05)
            .into_font()
            .color(&INK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        let tick_y = (cy + stroke as f64) as i32;
        root.draw(&Text::new("0", ((cx - radius) as i32, tick_y), tick.clone()))
            .map_err(draw_err)?;
        root.draw(&Text::new("100", ((cx + radius) as i32, tick_y), tick))
            .map_err(draw_err)?;

        let font_px = side * 0.05;
        let title = ("sans-serif", font_px)
            .into_font()
            .color(&INK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        let mut y = cy + side * 0.12;
        for line in spec.title.split(LINE_BREAK).filter(|l| !l.is_empty()) {
            root.draw(&Text::new(line.to_string(), (cx as i32, y as i32), title.clone()))
                .map_err(draw_err)?;
            y += font_px * 1.3;
        }

        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}
