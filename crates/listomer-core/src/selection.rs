//! Selected-index bookkeeping for the two managed lists.

use serde::{Deserialize, Serialize};

/// The selection pointers the host keeps in session storage.
///
/// Each index must stay inside `0..len` for its list, or 0 when the list is
/// empty; the host seeds stored indices to 0 and never clears them, so an
/// empty list and "first record selected" share the same stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub previous_index: usize,
    pub isotopomer_index: usize,
    pub method_index: usize,
}

impl SelectionState {
    /// Move the isotopomer selection, remembering where it moved from.
    pub fn select_isotopomer(&mut self, index: usize) {
        self.previous_index = self.isotopomer_index;
        self.isotopomer_index = index;
    }

    /// Move the method selection, remembering where it moved from.
    pub fn select_method(&mut self, index: usize) {
        self.previous_index = self.method_index;
        self.method_index = index;
    }

    /// Clamp both indices after an external reload changed the list lengths.
    pub fn clamp(&mut self, isotopomer_len: usize, method_len: usize) {
        self.isotopomer_index = clamp_index(self.isotopomer_index, isotopomer_len);
        self.method_index = clamp_index(self.method_index, method_len);
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::SelectionState;

    #[test]
    fn select_tracks_the_previous_index() {
        let mut selection = SelectionState::default();
        selection.select_isotopomer(2);
        selection.select_isotopomer(4);
        assert_eq!(selection.previous_index, 2);
        assert_eq!(selection.isotopomer_index, 4);
    }

    #[test]
    fn clamp_pulls_stale_indices_back_in_range() {
        let mut selection = SelectionState {
            previous_index: 0,
            isotopomer_index: 5,
            method_index: 1,
        };
        selection.clamp(3, 0);
        assert_eq!(selection.isotopomer_index, 2);
        assert_eq!(selection.method_index, 0);
    }

    #[test]
    fn clamp_on_empty_lists_pins_to_zero() {
        let mut selection = SelectionState {
            previous_index: 0,
            isotopomer_index: 7,
            method_index: 7,
        };
        selection.clamp(0, 0);
        assert_eq!(selection.isotopomer_index, 0);
        assert_eq!(selection.method_index, 0);
    }
}
