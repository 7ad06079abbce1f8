//! Drawing Gallery Mini-Game
//!
//! Puro shares three of his drawings. Viewing each for the first time earns
//! a little trust; taking the time to see all of them earns a bonus when the
//! gallery closes.

use crate::game::state::GameProgress;

/// Trust gained the first time each drawing is viewed.
pub const VIEW_TRUST: i32 = 3;

/// Bonus for closing the gallery after viewing everything.
pub const FULL_VIEW_BONUS: i32 = 5;

/// One of Puro's drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawing {
    /// Stable id.
    pub id: u32,
    /// Title card.
    pub title: &'static str,
    /// Caption shown under the drawing.
    pub description: &'static str,
    /// The mood Puro was in when he drew it.
    pub emotion: &'static str,
}

/// The gallery contents.
pub static DRAWINGS: &[Drawing] = &[
    Drawing {
        id: 1,
        title: "My First Human",
        description: "Puro's first attempt at drawing a human. The proportions are a bit off, \
                      but it's endearing.",
        emotion: "curious",
    },
    Drawing {
        id: 2,
        title: "The Library",
        description: "A detailed sketch of the library with all the bookshelves and the bonsai \
                      tree.",
        emotion: "peaceful",
    },
    Drawing {
        id: 3,
        title: "Friendship",
        description: "A drawing of two figures sitting together, reading. One is clearly Puro, \
                      the other is you.",
        emotion: "happy",
    },
];

/// Live state of one gallery browse.
#[derive(Debug, Clone)]
pub struct DrawingGallery {
    current: usize,
    viewed: [bool; 3],
}

impl Default for DrawingGallery {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingGallery {
    /// Open the gallery at the first drawing.
    pub fn new() -> Self {
        Self {
            current: 0,
            viewed: [false; 3],
        }
    }

    /// The drawing currently on display.
    pub fn current(&self) -> &'static Drawing {
        &DRAWINGS[self.current]
    }

    /// How many drawings have been viewed.
    pub fn viewed_count(&self) -> usize {
        self.viewed.iter().filter(|v| **v).count()
    }

    /// Mark the current drawing as viewed; first views earn trust.
    pub fn view_current(&mut self, progress: &mut GameProgress) {
        if !self.viewed[self.current] {
            self.viewed[self.current] = true;
            progress.adjust_trust(VIEW_TRUST);
        }
    }

    /// Page forward; stops at the last drawing.
    pub fn next(&mut self) {
        if self.current + 1 < DRAWINGS.len() {
            self.current += 1;
        }
    }

    /// Page backward; stops at the first drawing.
    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Close the gallery. Returns `true` if the full-view bonus applied.
    pub fn finish(self, progress: &mut GameProgress) -> bool {
        let all_viewed = self.viewed.iter().all(|v| *v);
        if all_viewed {
            progress.adjust_trust(FULL_VIEW_BONUS);
        }
        all_viewed
    }
}
