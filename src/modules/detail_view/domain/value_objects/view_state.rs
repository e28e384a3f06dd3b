//! Exclusive view-state machine for the detail view
//!
//! One struct owns the three UI flags the detail screen exposes so the
//! mutual-exclusion rule (trailer modal only under the Details tab, and only
//! when a trailer exists) lives in one place instead of scattered booleans.

use serde::{Deserialize, Serialize};

/// The mutually exclusive content tabs of the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailTab {
    Details,
    Characters,
    Recommendations,
}

impl Default for DetailTab {
    fn default() -> Self {
        DetailTab::Details
    }
}

/// View state for one rendered detail view
///
/// Lifecycle: reset to defaults whenever the identifier changes; mutated only
/// by explicit user actions thereafter. There is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    active_tab: DetailTab,
    trailer_open: bool,
    favorited: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: DetailTab::Details,
            trailer_open: false,
            favorited: false,
        }
    }
}

impl ViewState {
    pub fn active_tab(&self) -> DetailTab {
        self.active_tab
    }

    pub fn trailer_open(&self) -> bool {
        self.trailer_open
    }

    pub fn favorited(&self) -> bool {
        self.favorited
    }

    /// Switch to tab `t`. Never touches the trailer or favorite flags.
    pub fn select_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
    }

    /// Flip the trailer modal.
    ///
    /// Valid only under the Details tab and only when the current detail
    /// actually carries a trailer reference; otherwise a silent no-op.
    pub fn toggle_trailer(&mut self, has_trailer: bool) {
        if self.active_tab == DetailTab::Details && has_trailer {
            self.trailer_open = !self.trailer_open;
        }
    }

    /// Close the trailer modal unconditionally (the modal's own close action).
    pub fn close_trailer(&mut self) {
        self.trailer_open = false;
    }

    /// Flip the favorite flag. Local-only; never affects tab or trailer.
    pub fn toggle_favorite(&mut self) {
        self.favorited = !self.favorited;
    }

    /// Hard reset on identifier change, regardless of current state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the trailer modal should actually render right now.
    pub fn trailer_visible(&self, has_trailer: bool) -> bool {
        self.trailer_open && self.active_tab == DetailTab::Details && has_trailer
    }
}
