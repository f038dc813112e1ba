//! Room carving inside leaf partitions.

use crate::constants::DUNGEON_ROOM_MARGIN;
use crate::rect::Rect;
use log::warn;
use rand::Rng;

/// Pick a room size along one axis of a partition span.
/// Returns `(offset, length)` relative to the partition origin.
fn carve_span(span: i32, rng: &mut impl Rng) -> (i32, i32) {
    // Leave a wall on both sides when there is space for it
    let max_len = (span - DUNGEON_ROOM_MARGIN * 2).max(1);
    let min_len = (span / 2).clamp(1, max_len);
    let len = rng.gen_range(min_len..=max_len);

    let slack = span - len;
    let offset = if slack >= DUNGEON_ROOM_MARGIN * 2 {
        rng.gen_range(DUNGEON_ROOM_MARGIN..=slack - DUNGEON_ROOM_MARGIN)
    } else {
        rng.gen_range(0..=slack.max(0))
    };
    (offset, len)
}

/// Carve a room strictly inside `leaf`, keeping randomized wall margins.
///
/// The room spans between half and all-but-two cells of each dimension.
/// Partitions too thin for margins still get a room of at least 1×1.
pub fn carve_room(leaf: &Rect, rng: &mut impl Rng) -> Rect {
    if leaf.width < DUNGEON_ROOM_MARGIN * 2 + 1 || leaf.height < DUNGEON_ROOM_MARGIN * 2 + 1 {
        warn!("partition {:?} too small for wall margins, clamping room", leaf);
    }

    let (dx, width) = carve_span(leaf.width.max(1), rng);
    let (dy, height) = carve_span(leaf.height.max(1), rng);
    Rect::new(leaf.x + dx, leaf.y + dy, width, height)
}
