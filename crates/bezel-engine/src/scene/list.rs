use crate::coords::BoxEdges;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip box.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Clip box in screen pixels. `None` = no clipping.
    pub clip: Option<BoxEdges>,
}

/// Recorded draw stream for a frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// draw commands to a box. Nested clips intersect with their parent.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// The top is the current effective clip, already intersected with all parents.
    /// `None` entries mark a clip that collapsed to nothing.
    clip_stack: Vec<Option<BoxEdges>>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip from the clip stack. Items pushed
    /// inside a clip that collapsed to nothing are dropped.
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let clip = match self.clip_stack.last() {
            None => None,
            Some(Some(clip)) => Some(*clip),
            Some(None) => {
                log::trace!("dropping {} pushed inside an empty clip", cmd.kind());
                return;
            }
        };

        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(z, order), cmd, clip });
        self.sorted_dirty = true;
    }

    /// Begins a clip region. Commands pushed until the matching
    /// [`pop_clip`](Self::pop_clip) only write pixels inside `clip`
    /// (intersected with any parent clip).
    pub fn push_clip(&mut self, clip: BoxEdges) {
        let effective = match self.clip_stack.last() {
            None => Some(clip),
            Some(None) => None,
            Some(Some(parent)) => parent.intersect(clip),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent clip region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // SortKey includes insertion order, so an unstable sort is deterministic.
        let items = &self.items;
        self.sorted_indices.sort_unstable_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}
