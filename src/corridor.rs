//! Corridors between sibling subtrees.

use crate::rect::Rect;
use rand::Rng;

fn pick_along(start: i32, len: i32, rng: &mut impl Rng) -> i32 {
    if len >= 3 {
        rng.gen_range(start + 1..start + len - 1)
    } else {
        start + (len - 1).max(0) / 2
    }
}

/// Pick a cell inside `room`, away from its edge when the room is wide enough.
pub fn random_point_in(room: &Rect, rng: &mut impl Rng) -> (i32, i32) {
    let x = pick_along(room.x, room.width, rng);
    let y = pick_along(room.y, room.height, rng);
    (x, y)
}

/// Horizontal run covering columns `x1..=x2` (in either order) on row `y`.
fn h_corridor(x1: i32, x2: i32, y: i32) -> Rect {
    Rect::new(x1.min(x2), y, (x1 - x2).abs() + 1, 1)
}

/// Vertical run covering rows `y1..=y2` (in either order) on column `x`.
fn v_corridor(y1: i32, y2: i32, x: i32) -> Rect {
    Rect::new(x, y1.min(y2), 1, (y1 - y2).abs() + 1)
}

/// Connect two rooms with a straight or L-shaped corridor.
///
/// Endpoints are random interior cells of each room. The result holds one
/// rectangle when the endpoints share a row or column, two otherwise; each
/// is at least 1×1 and the union always touches both endpoints.
pub fn connect(left: &Rect, right: &Rect, rng: &mut impl Rng) -> Vec<Rect> {
    let (mut x1, mut y1) = random_point_in(left, rng);
    let (mut x2, mut y2) = random_point_in(right, rng);

    // Walk left to right
    if x1 > x2 {
        std::mem::swap(&mut x1, &mut x2);
        std::mem::swap(&mut y1, &mut y2);
    }

    if y1 == y2 {
        return vec![h_corridor(x1, x2, y1)];
    }
    if x1 == x2 {
        return vec![v_corridor(y1, y2, x1)];
    }

    // Randomly choose to go horizontal-then-vertical or vertical-then-horizontal
    if rng.gen_bool(0.5) {
        vec![h_corridor(x1, x2, y1), v_corridor(y1, y2, x2)]
    } else {
        vec![v_corridor(y1, y2, x1), h_corridor(x1, x2, y2)]
    }
}
