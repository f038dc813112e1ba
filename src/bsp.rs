use crate::carve::carve_room;
use crate::corridor::connect;
use crate::rect::Rect;
use log::trace;
use rand::Rng;

/// Which way a partition was cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitDirection {
    /// Cut along a row: `left` is the top half, `right` the bottom half
    Horizontal,
    /// Cut along a column: `left` and `right` sit side by side
    Vertical,
}

/// Tuning for the recursive splitter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitRules {
    /// No partition side is ever cut below this
    pub min_room_size: i32,
    /// Partitions larger than this on either axis always try to split
    pub max_room_size: i32,
    /// Smaller partitions split anyway when a uniform draw exceeds this
    pub split_threshold: f32,
}

/// A leaf partition together with the room carved inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeafRoom {
    pub region: Rect,
    pub room: Rect,
}

/// A node in the BSP tree. Either a leaf (hosts a room) or an internal node
/// (has two children whose regions exactly tile its own).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubDungeon {
    /// The region this node covers
    pub rect: Rect,
    /// The room carved in this region (only for leaves)
    pub room: Option<Rect>,
    /// Corridors joining the two children (only for internal nodes)
    pub corridors: Vec<Rect>,
    /// Top or left child after split
    pub left: Option<Box<SubDungeon>>,
    /// Bottom or right child after split
    pub right: Option<Box<SubDungeon>>,
    /// How this node was cut, if it was
    pub split: Option<SplitDirection>,
}

impl SubDungeon {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            room: None,
            corridors: Vec::new(),
            left: None,
            right: None,
            split: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Split this leaf into two children.
    ///
    /// A node tries to split when it is larger than `max_room_size` on either
    /// axis, or when a random draw exceeds `split_threshold`. The cut runs
    /// across the longer axis (random for near-square regions), falls back to
    /// the other axis when the preferred one is too short, and lands at a random
    /// offset that keeps both halves at least `min_room_size` wide. Returns
    /// whether children were created; `false` marks this branch as terminal.
    pub fn split(&mut self, rules: &SplitRules, rng: &mut impl Rng) -> bool {
        if !self.is_leaf() {
            return false;
        }

        let oversized =
            self.rect.width > rules.max_room_size || self.rect.height > rules.max_room_size;
        if !oversized && rng.gen::<f32>() <= rules.split_threshold {
            return false;
        }

        let min_span = rules.min_room_size.saturating_mul(2);
        let can_cut_rows = self.rect.height >= min_span;
        let can_cut_cols = self.rect.width >= min_span;

        // Prefer cutting across the longer axis
        let preferred = if self.rect.width as f32 >= self.rect.height as f32 * 1.25 {
            SplitDirection::Vertical
        } else if self.rect.height as f32 >= self.rect.width as f32 * 1.25 {
            SplitDirection::Horizontal
        } else if rng.gen_bool(0.5) {
            SplitDirection::Horizontal
        } else {
            SplitDirection::Vertical
        };

        let direction = match (preferred, can_cut_rows, can_cut_cols) {
            (SplitDirection::Horizontal, true, _) | (SplitDirection::Vertical, true, false) => {
                SplitDirection::Horizontal
            }
            (SplitDirection::Vertical, _, true) | (SplitDirection::Horizontal, false, true) => {
                SplitDirection::Vertical
            }
            _ => {
                trace!("partition {:?} cannot split", self.rect);
                return false;
            }
        };

        let r = self.rect;
        let min = rules.min_room_size;
        let (first, second) = match direction {
            SplitDirection::Horizontal => {
                let split_y = rng.gen_range(min..=r.height - min);
                (
                    Rect::new(r.x, r.y, r.width, split_y),
                    Rect::new(r.x, r.y + split_y, r.width, r.height - split_y),
                )
            }
            SplitDirection::Vertical => {
                let split_x = rng.gen_range(min..=r.width - min);
                (
                    Rect::new(r.x, r.y, split_x, r.height),
                    Rect::new(r.x + split_x, r.y, r.width - split_x, r.height),
                )
            }
        };
        trace!("split {:?} {:?} into {:?} and {:?}", r, direction, first, second);

        self.left = Some(Box::new(SubDungeon::new(first)));
        self.right = Some(Box::new(SubDungeon::new(second)));
        self.split = Some(direction);
        true
    }

    /// Recursively split the space until every branch stops.
    pub fn build(&mut self, rules: &SplitRules, rng: &mut impl Rng) {
        if self.split(rules, rng) {
            if let Some(ref mut left) = self.left {
                left.build(rules, rng);
            }
            if let Some(ref mut right) = self.right {
                right.build(rules, rng);
            }
        }
    }

    /// Carve a room in each leaf and link siblings, children first.
    pub fn create_rooms(&mut self, rng: &mut impl Rng) {
        if self.is_leaf() {
            self.room = Some(carve_room(&self.rect, rng));
            return;
        }

        if let Some(ref mut left) = self.left {
            left.create_rooms(rng);
        }
        if let Some(ref mut right) = self.right {
            right.create_rooms(rng);
        }

        let left_room = self.left.as_ref().and_then(|n| n.get_room(rng));
        let right_room = self.right.as_ref().and_then(|n| n.get_room(rng));
        if let (Some(left_room), Some(right_room)) = (left_room, right_room) {
            self.corridors = connect(&left_room, &right_room, rng);
        }
    }

    /// Get a room from this subtree (used for corridor connection).
    /// Internal nodes pick one of their children's representatives at random.
    pub fn get_room(&self, rng: &mut impl Rng) -> Option<Rect> {
        if self.is_leaf() {
            return self.room;
        }

        let left = self.left.as_ref().and_then(|n| n.get_room(rng));
        let right = self.right.as_ref().and_then(|n| n.get_room(rng));
        match (left, right) {
            (Some(l), Some(r)) => Some(if rng.gen_bool(0.5) { l } else { r }),
            (l, r) => l.or(r),
        }
    }

    /// Collect every leaf room in this subtree, left before right.
    pub fn collect_rooms(&self, rooms: &mut Vec<LeafRoom>) {
        if self.is_leaf() {
            if let Some(room) = self.room {
                rooms.push(LeafRoom {
                    region: self.rect,
                    room,
                });
            }
            return;
        }
        if let Some(ref left) = self.left {
            left.collect_rooms(rooms);
        }
        if let Some(ref right) = self.right {
            right.collect_rooms(rooms);
        }
    }

    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.left.as_ref().map_or(0, |n| n.leaf_count())
            + self.right.as_ref().map_or(0, |n| n.leaf_count())
    }

    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.depth());
        let right = self.right.as_ref().map_or(0, |n| n.depth());
        1 + left.max(right)
    }
}
