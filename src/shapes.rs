//! Glyph drawing routines for the five tab-bar icons
//!
//! Each routine paints opaque-white outline strokes onto the canvas. All
//! dimensions are fractions of the usable area (canvas size minus margins);
//! everything is deterministic given size and margin.

use crate::canvas::{Canvas, WHITE};

/// House: rectangular body, triangular roof, small door
pub fn home(c: &mut Canvas, size: u32, margin: u32) {
    let size = size as f32;
    let margin = margin as f32;
    let center = size / 2.0;
    let area = size - margin * 2.0;

    let body_w = area * 0.6;
    let body_h = area * 0.5;
    let body_x = center - body_w / 2.0;
    let body_y = center - body_h / 2.0 + area * 0.1;
    c.stroke_rect(body_x, body_y, body_x + body_w, body_y + body_h, 3.0, WHITE);

    let apex = (center, margin + area * 0.15);
    c.stroke_polygon(
        &[apex, (body_x, body_y), (body_x + body_w, body_y)],
        3.0,
        WHITE,
    );

    let door_w = body_w * 0.3;
    let door_h = body_h * 0.4;
    let door_x = center - door_w / 2.0;
    let door_y = body_y + body_h - door_h;
    c.stroke_rect(door_x, door_y, door_x + door_w, door_y + door_h, 2.0, WHITE);
}

/// Game controller: body with rounded top corners, two side buttons
pub fn simulation(c: &mut Canvas, size: u32, margin: u32) {
    let size = size as f32;
    let margin = margin as f32;
    let center = size / 2.0;
    let area = size - margin * 2.0;

    let body_w = area * 0.7;
    let body_h = area * 0.5;
    let body_x = center - body_w / 2.0;
    let body_y = center - body_h / 2.0;
    c.stroke_rect(
        body_x,
        body_y + 5.0,
        body_x + body_w,
        body_y + body_h - 5.0,
        3.0,
        WHITE,
    );
    // Rounded corners approximated by small circles at the top edge
    c.stroke_circle(body_x + 5.0, body_y + 5.0, 5.0, 3.0, WHITE);
    c.stroke_circle(body_x + body_w - 5.0, body_y + 5.0, 5.0, 3.0, WHITE);

    let btn_y = center - 8.0;
    c.stroke_circle(body_x - area * 0.15, btn_y, 6.0, 2.0, WHITE);
    c.stroke_circle(body_x + body_w + area * 0.15, btn_y, 6.0, 2.0, WHITE);
}

/// Trend chart: outer frame, 5-point polyline, dot on each vertex
pub fn replay(c: &mut Canvas, size: u32, margin: u32) {
    let size = size as f32;
    let margin = margin as f32;
    let area = size - margin * 2.0;

    let chart_x = margin + area * 0.1;
    let chart_y = margin + area * 0.2;
    let chart_w = area * 0.8;
    let chart_h = area * 0.6;
    c.stroke_rect(
        chart_x,
        chart_y,
        chart_x + chart_w,
        chart_y + chart_h,
        2.0,
        WHITE,
    );

    let points = [(0.1, 0.7), (0.3, 0.4), (0.5, 0.5), (0.7, 0.2), (0.9, 0.3)]
        .map(|(fx, fy)| (chart_x + chart_w * fx, chart_y + chart_h * fy));
    for pair in points.windows(2) {
        c.stroke_line(pair[0], pair[1], 3.0, WHITE);
    }
    for (px, py) in points {
        c.fill_circle(px, py, 3.0, WHITE);
    }
}

/// Book: cover rectangle, three page lines, thick spine on the left edge
pub fn knowledge(c: &mut Canvas, size: u32, margin: u32) {
    let size = size as f32;
    let margin = margin as f32;
    let center = size / 2.0;
    let area = size - margin * 2.0;

    let book_w = area * 0.6;
    let book_h = area * 0.7;
    let book_x = center - book_w / 2.0;
    let book_y = center - book_h / 2.0;
    c.stroke_rect(book_x, book_y, book_x + book_w, book_y + book_h, 3.0, WHITE);

    for i in 0..3 {
        let line_y = book_y + book_h * (0.3 + i as f32 * 0.15);
        c.stroke_line(
            (book_x + 5.0, line_y),
            (book_x + book_w - 5.0, line_y),
            1.0,
            WHITE,
        );
    }

    c.stroke_line((book_x, book_y), (book_x, book_y + book_h), 4.0, WHITE);
}

/// Person: circular head over a rectangular body
pub fn profile(c: &mut Canvas, size: u32, margin: u32) {
    let size = size as f32;
    let margin = margin as f32;
    let center = size / 2.0;
    let area = size - margin * 2.0;

    let head_r = area * 0.15;
    let head_y = margin + area * 0.25;
    c.stroke_circle(center, head_y, head_r, 3.0, WHITE);

    let body_w = area * 0.4;
    let body_h = area * 0.35;
    let body_x = center - body_w / 2.0;
    let body_y = head_y + head_r + 5.0;
    c.stroke_rect(body_x, body_y, body_x + body_w, body_y + body_h, 3.0, WHITE);
}
