use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Widget,
    },
};

pub const RING_STEPS: usize = 160;
const RADIUS: f64 = 1.0;
const BOUNDS: [f64; 2] = [-1.15, 1.15];

/// Points along an arc that starts at 12 o'clock and runs clockwise over
/// `fraction` of the full circle.
pub fn arc_points(fraction: f64, radius: f64, steps: usize) -> Vec<(f64, f64)> {
    let fraction = fraction.clamp(0.0, 1.0);
    let lit = (fraction * steps as f64).round() as usize;

    (0..lit)
        .map(|i| {
            let angle = FRAC_PI_2 - TAU * (i as f64 / steps as f64);
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Largest rect of roughly circular shape (cells are twice as tall as wide)
/// centered in `area`.
pub fn ring_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = (height * 2).min(area.width);
    centered(width, height, area)
}

pub fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Circular countdown: a dim track with a bright arc for the time left.
pub struct ProgressRing {
    pub fraction: f64,
    pub color: Color,
    pub track: Color,
}

impl Widget for ProgressRing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let track = arc_points(1.0, RADIUS, RING_STEPS);
        let lit = arc_points(self.fraction, RADIUS, RING_STEPS);

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(BOUNDS)
            .y_bounds(BOUNDS)
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &track,
                    color: self.track,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &lit,
                    color: self.color,
                });
            })
            .render(area, buf);
    }
}
