use raylib::prelude::*;

pub fn contains(rec: &Rectangle, point: Vector2) -> bool {
    point.x >= rec.x
        && point.x < rec.x + rec.width
        && point.y >= rec.y
        && point.y < rec.y + rec.height
}

// 0.0 when the rectangles only touch or are apart
pub fn intersection_area(a: &Rectangle, b: &Rectangle) -> f32 {
    let w = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
    let h = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);
    if w <= 0.0 || h <= 0.0 { 0.0 } else { w * h }
}

/// Share of `target` lying inside `viewport`, in `0.0..=1.0`.
pub fn visible_fraction(target: &Rectangle, viewport: &Rectangle) -> f32 {
    let area = target.width * target.height;
    if area <= 0.0 {
        return 0.0;
    }
    (intersection_area(target, viewport) / area).min(1.0)
}

pub fn expand(rec: &Rectangle, margin: f32) -> Rectangle {
    Rectangle::new(
        rec.x - margin,
        rec.y - margin,
        rec.width + margin * 2.0,
        rec.height + margin * 2.0,
    )
}
