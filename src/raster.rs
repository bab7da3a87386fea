//! Pixel writers for strokes and shape outlines.
//!
//! Every function clips against the buffer, so callers may pass points that
//! lie outside the canvas. A pen of width `w` covers exactly `w` pixels
//! across its path; even widths lean towards the top-left, one pixel more
//! before the centre than after it.

use image::{Rgb, RgbImage};

use crate::geometry::{Outline, Point};
use crate::tool::BrushVariant;

/// Color and width a primitive is drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ink {
    pub color: Rgb<u8>,
    /// Half the pen width in pixels
    pub half_width: f32,
}

/// Draw a shape outline with a flat, square-capped pen
pub fn draw_outline(img: &mut RgbImage, outline: &Outline, ink: Ink) {
    match outline {
        Outline::Circle { center, radius } => draw_ring(img, *center, *radius as f32, ink),
        _ => {
            for (a, b) in outline.edges() {
                draw_capped_segment(img, a, b, ink);
            }
        }
    }
}

/// Draw one free-drawing segment in the style of `brush`.
///
/// The eraser is expected to arrive with the background color already in `ink`.
/// Every style paints only `ink.color` and stays inside the pen width.
pub fn draw_brush_segment(img: &mut RgbImage, brush: BrushVariant, a: Point, b: Point, ink: Ink) {
    let r = ink.half_width;
    let color = ink.color;
    match brush {
        BrushVariant::Normal => draw_capped_segment(img, a, b, ink),
        BrushVariant::Round | BrushVariant::Eraser => {
            for p in line_points(a, b) {
                for_disc(img, p, r, |_| true, color);
            }
        }
        BrushVariant::Square => {
            for p in line_points(a, b) {
                fill_square(img, p, r, color);
            }
        }
        BrushVariant::Spray => {
            for p in line_points(a, b) {
                spray(img, p, r, color);
            }
        }
        BrushVariant::Oil => {
            for p in line_points(a, b) {
                for_disc(img, p, r, bristle, color);
            }
        }
        BrushVariant::Puffy => {
            let points = line_points(a, b);
            let step = span(r).0.max(1) as usize;
            let last = points.len() - 1;
            for (i, p) in points.into_iter().enumerate() {
                if i % step == 0 || i == last {
                    bubble(img, p, r, color);
                }
            }
        }
        BrushVariant::Textured => {
            for p in line_points(a, b) {
                // The grain is keyed to absolute pixels so overlapping stamps agree
                for_disc(img, p, r, |px| grain(px.x, px.y, 0) % 3 != 0, color);
            }
        }
        BrushVariant::Calligraphy => {
            for p in line_points(a, b) {
                nib(img, p, r, color);
            }
        }
    }
}

/// Bresenham walk from `a` to `b`, both ends included
pub fn line_points(a: Point, b: Point) -> Vec<Point> {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = a.x;
    let mut y = a.y;
    let mut points = Vec::with_capacity((dx - dy) as usize + 1);

    loop {
        points.push(Point::new(x, y));
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Fills the rotated rectangle covering the segment, extended by half the
/// width past each end.
pub fn draw_capped_segment(img: &mut RgbImage, a: Point, b: Point, ink: Ink) {
    let h = ink.half_width;
    let dx = (b.x - a.x) as f32;
    let dy = (b.y - a.y) as f32;
    let len = (dx * dx + dy * dy).sqrt();

    if len == 0.0 {
        fill_square(img, a, h, ink.color);
        return;
    }

    // Even widths put the pen axis between two pixel rows
    let shift = centre_shift(h);
    let (ax, ay) = (a.x as f32 - shift, a.y as f32 - shift);
    let (ux, uy) = (dx / len, dy / len);
    let margin = (h * 1.5).ceil() as i32 + 1;
    let Some((xs, ys)) = clip(
        img,
        (a.x.min(b.x) - margin, a.x.max(b.x) + margin),
        (a.y.min(b.y) - margin, a.y.max(b.y) + margin),
    ) else {
        return;
    };

    for y in ys.0..=ys.1 {
        for x in xs.0..=xs.1 {
            let px = x as f32 - ax;
            let py = y as f32 - ay;
            let along = px * ux + py * uy;
            let across = (px * uy - py * ux).abs();
            if along >= -h && along <= len + h && across <= h {
                plot(img, x, y, ink.color);
            }
        }
    }
}

/// Pixels whose distance from `center` falls in `[radius - h, radius + h)`.
/// Only the part of the ring inside the buffer is visited.
pub fn draw_ring(img: &mut RgbImage, center: Point, radius: f32, ink: Ink) {
    let h = ink.half_width;
    let reach = (radius + h).ceil() as i64 + 1;
    let reach = i32::try_from(reach).unwrap_or(i32::MAX);
    let Some((xs, ys)) = clip(
        img,
        (center.x.saturating_sub(reach), center.x.saturating_add(reach)),
        (center.y.saturating_sub(reach), center.y.saturating_add(reach)),
    ) else {
        return;
    };

    for y in ys.0..=ys.1 {
        for x in xs.0..=xs.1 {
            let (ox, oy) = (f64::from(x - center.x), f64::from(y - center.y));
            let d = (ox * ox + oy * oy).sqrt() as f32;
            if d >= radius - h && d < radius + h {
                plot(img, x, y, ink.color);
            }
        }
    }
}

/// Pixels before and after the centre pixel covered by a pen of half width `half`
fn span(half: f32) -> (i32, i32) {
    let width = ((half * 2.0).round() as i32).max(1);
    let lo = width / 2;
    (lo, width - lo - 1)
}

fn centre_shift(half: f32) -> f32 {
    let (lo, hi) = span(half);
    if lo == hi { 0.0 } else { 0.5 }
}

/// Offset of a pixel from a stamp centre, measured from the pen axis
#[derive(Debug, Clone, Copy)]
struct StampPixel {
    x: i32,
    y: i32,
    dist_sq: f32,
}

/// Plot the pixels of a disc stamp accepted by `keep`
fn for_disc(
    img: &mut RgbImage,
    center: Point,
    radius: f32,
    mut keep: impl FnMut(StampPixel) -> bool,
    color: Rgb<u8>,
) {
    let (lo, hi) = span(radius);
    let shift = centre_shift(radius);
    let r2 = radius * radius;
    for y in -lo..=hi {
        for x in -lo..=hi {
            let (fx, fy) = (x as f32 + shift, y as f32 + shift);
            let dist_sq = fx * fx + fy * fy;
            let px = StampPixel {
                x: center.x + x,
                y: center.y + y,
                dist_sq,
            };
            if dist_sq <= r2 && keep(px) {
                plot(img, px.x, px.y, color);
            }
        }
    }
}

fn fill_square(img: &mut RgbImage, center: Point, half: f32, color: Rgb<u8>) {
    let (lo, hi) = span(half);
    for y in center.y - lo..=center.y + hi {
        for x in center.x - lo..=center.x + hi {
            plot(img, x, y, color);
        }
    }
}

/// Hollow disc: only the outer rim one pixel deep
fn bubble(img: &mut RgbImage, center: Point, radius: f32, color: Rgb<u8>) {
    let inner = (radius - 1.0).max(0.0);
    for_disc(img, center, radius, |px| px.dist_sq >= inner * inner, color);
}

/// Short horizontal bristle runs with gaps between them
fn bristle(px: StampPixel) -> bool {
    grain(px.x.div_euclid(3), px.y, 7) % 4 != 0
}

fn spray(img: &mut RgbImage, center: Point, radius: f32, color: Rgb<u8>) {
    let (lo, hi) = span(radius);
    let width = (lo + hi + 1) as u32;
    let dots = ((radius * radius) as u32 / 4).max(1);
    let shift = centre_shift(radius);
    for i in 0..dots {
        let seed = grain(center.x, center.y, i);
        let x = (seed % width) as i32 - lo;
        let y = ((seed / width) % width) as i32 - lo;
        let (fx, fy) = (x as f32 + shift, y as f32 + shift);
        if fx * fx + fy * fy <= radius * radius {
            plot(img, center.x + x, center.y + y, color);
        }
    }
}

/// Flat nib held at 45 degrees, two pixels thick
fn nib(img: &mut RgbImage, center: Point, half: f32, color: Rgb<u8>) {
    let (lo, hi) = span(half);
    for k in -lo..=hi {
        plot(img, center.x - k, center.y + k, color);
        plot(img, center.x - k + 1, center.y + k, color);
    }
}

fn grain(x: i32, y: i32, salt: u32) -> u32 {
    let mut h = (x as u32).wrapping_mul(0x9E37_79B1)
        ^ (y as u32).wrapping_mul(0x85EB_CA77)
        ^ salt.wrapping_add(1).wrapping_mul(0xC2B2_AE3D);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    h
}

/// Intersect an inclusive pixel box with the buffer
fn clip(img: &RgbImage, xs: (i32, i32), ys: (i32, i32)) -> Option<((i32, i32), (i32, i32))> {
    let max_x = i32::try_from(img.width()).ok()? - 1;
    let max_y = i32::try_from(img.height()).ok()? - 1;
    let xs = (xs.0.max(0), xs.1.min(max_x));
    let ys = (ys.0.max(0), ys.1.min(max_y));
    (xs.0 <= xs.1 && ys.0 <= ys.1).then_some((xs, ys))
}

fn plot(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if in_bounds(img, x, y) {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn in_bounds(img: &RgbImage, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height()
}
