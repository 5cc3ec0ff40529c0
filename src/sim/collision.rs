//! Collision queries against axis-aligned rectangles
//!
//! Overlap tests are open-interval: rectangles that only share an edge do not
//! collide, which is what lets a body rest exactly on a platform top.

use glam::Vec2;

use super::rect::Rect;

/// AABB overlap test (touching edges do not count)
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// First platform overlapping `rect`, if any
pub fn first_overlap<'a>(rect: &Rect, platforms: &'a [Rect]) -> Option<&'a Rect> {
    platforms.iter().find(|p| intersects(rect, p))
}

/// Does the segment `a -> b` pass through the interior of `rect`?
///
/// Liang-Barsky clipping against the four slabs. Segments that only graze an
/// edge or a corner are not blocked.
pub fn segment_intersects_rect(a: Vec2, b: Vec2, rect: &Rect) -> bool {
    let d = b - a;
    let mut t_enter = 0.0_f32;
    let mut t_exit = 1.0_f32;

    let slabs = [
        (-d.x, a.x - rect.x),
        (d.x, rect.right() - a.x),
        (-d.y, a.y - rect.y),
        (d.y, rect.bottom() - a.y),
    ];

    for (p, q) in slabs {
        if p == 0.0 {
            // Parallel to this slab: must lie strictly inside it
            if q <= 0.0 {
                return false;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t_exit {
                return false;
            }
            t_enter = t_enter.max(t);
        } else {
            if t < t_enter {
                return false;
            }
            t_exit = t_exit.min(t);
        }
    }

    t_enter < t_exit
}

/// Unobstructed straight path between two points
pub fn line_of_sight(from: Vec2, to: Vec2, platforms: &[Rect]) -> bool {
    !platforms
        .iter()
        .any(|p| segment_intersects_rect(from, to, p))
}

/// Is `point` inside any platform?
pub fn point_in_platform<'a>(point: Vec2, platforms: &'a [Rect]) -> Option<&'a Rect> {
    platforms.iter().find(|p| p.contains_point(point))
}
