/// Selection and single-row disclosure for the record list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// The one row whose details are expanded, if any.
    open: Option<usize>,
    /// Keyboard cursor.
    selected: usize,
}

impl ListState {
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Expand `index`, collapsing any other row, or collapse it if it is the
    /// row already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Collapse everything and return the cursor to the top; used when the
    /// store is replaced wholesale.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_state() {
        let mut list = ListState::default();
        list.toggle(0);
        list.toggle(0);
        assert_eq!(list, ListState::default());

        list.toggle(2);
        let before = list.clone();
        list.toggle(2);
        assert_eq!(list.open(), None);
        list.toggle(2);
        assert_eq!(list, before);
    }

    #[test]
    fn only_one_row_is_open() {
        let mut list = ListState::default();
        list.toggle(1);
        list.toggle(3);
        assert!(list.is_open(3));
        assert!(!list.is_open(1));
    }

    #[test]
    fn selection_is_clamped() {
        let mut list = ListState::default();
        list.select_prev();
        assert_eq!(list.selected(), 0);
        for _ in 0..10 {
            list.select_next(3);
        }
        assert_eq!(list.selected(), 2);
        list.select_next(0);
        assert_eq!(list.selected(), 2);
        list.select_first();
        assert_eq!(list.selected(), 0);
        list.select_last(5);
        assert_eq!(list.selected(), 4);
    }
}
