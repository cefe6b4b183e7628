pub fn wrap_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}

pub fn wrap_prev(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

pub fn format_counter(index: usize, total: usize) -> String {
    format!("{:02} / {:02}", index + 1, total)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleAction {
    Tick,
    Next,
    Prev,
    Select(usize),
    Pause,
    Resume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selector {
    index: usize,
    len: usize,
    paused: bool,
}

impl Selector {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            paused: false,
        }
    }

    pub fn starting_at(len: usize, index: usize) -> Self {
        let mut selector = Self::new(len);
        selector.index = index % selector.len;
        selector
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn advance(&mut self) {
        self.index = wrap_next(self.index, self.len);
    }

    /// Timer-driven advance; ignored while paused so missed periods are never
    /// replayed after a resume.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.advance();
        true
    }

    pub fn go_next(&mut self) {
        self.advance();
    }

    pub fn go_prev(&mut self) {
        self.index = wrap_prev(self.index, self.len);
    }

    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn apply(&mut self, action: CycleAction) {
        match action {
            CycleAction::Tick => {
                self.tick();
            }
            CycleAction::Next => self.go_next(),
            CycleAction::Prev => self.go_prev(),
            CycleAction::Select(index) => {
                self.set_active(index);
            }
            CycleAction::Pause => self.pause(),
            CycleAction::Resume => self.resume(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedSelector<K> {
    keys: Vec<K>,
    selector: Selector,
}

impl<K: Copy + PartialEq> KeyedSelector<K> {
    pub fn new(keys: Vec<K>) -> Self {
        let selector = Selector::new(keys.len());
        Self { keys, selector }
    }

    pub fn active_key(&self) -> Option<K> {
        self.keys.get(self.selector.index()).copied()
    }

    pub fn is_active(&self, key: K) -> bool {
        self.active_key() == Some(key)
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Unknown keys leave the selection untouched.
    pub fn set_active_key(&mut self, key: K) -> bool {
        match self.keys.iter().position(|candidate| *candidate == key) {
            Some(index) => self.selector.set_active(index),
            None => false,
        }
    }

    pub fn hover(&mut self, key: K) {
        self.selector.pause();
        self.set_active_key(key);
    }

    pub fn leave(&mut self) {
        self.selector.resume();
    }

    pub fn tick(&mut self) -> bool {
        self.selector.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn skills_grid_advances_twice_to_index_two() {
        let mut selector = Selector::new(4);
        selector.tick();
        selector.tick();
        assert_eq!(selector.index(), 2);
    }

    #[test]
    fn carousel_wraps_after_seven_nexts() {
        let mut selector = Selector::new(5);
        for _ in 0..7 {
            selector.go_next();
        }
        assert_eq!(selector.index(), 2);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut selector = Selector::new(5);
        selector.go_prev();
        assert_eq!(selector.index(), 4);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut selector = Selector::starting_at(3, 1);
        assert!(!selector.set_active(3));
        assert_eq!(selector.index(), 1);
    }

    #[test]
    fn single_item_sequence_stays_put() {
        let mut selector = Selector::new(1);
        selector.tick();
        selector.go_prev();
        assert_eq!(selector.index(), 0);
    }

    #[test]
    fn resume_continues_from_current_index() {
        let mut selector = Selector::starting_at(4, 1);
        selector.pause();
        for _ in 0..10 {
            assert!(!selector.tick());
        }
        selector.resume();
        assert!(selector.tick());
        assert_eq!(selector.index(), 2);
    }

    #[test]
    fn hover_pauses_and_selects_key() {
        let mut grid = KeyedSelector::new(vec!["frontend", "backend", "database", "languages"]);
        grid.hover("database");
        assert!(grid.is_active("database"));
        assert!(grid.selector().is_paused());

        grid.tick();
        assert_eq!(grid.active_key(), Some("database"));

        grid.leave();
        grid.tick();
        assert_eq!(grid.active_key(), Some("languages"));
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let mut grid = KeyedSelector::new(vec!["frontend", "backend"]);
        grid.hover("devops");
        assert_eq!(grid.active_key(), Some("frontend"));
    }

    #[test]
    fn counter_is_zero_padded() {
        assert_eq!(format_counter(0, 5), "01 / 05");
        assert_eq!(format_counter(9, 12), "10 / 12");
    }

    proptest! {
        #[test]
        fn k_ticks_land_on_i_plus_k_mod_n(len in 1usize..64, start in 0usize..64, k in 0usize..500) {
            let start = start % len;
            let mut selector = Selector::starting_at(len, start);
            for _ in 0..k {
                selector.tick();
            }
            prop_assert_eq!(selector.index(), (start + k) % len);
        }

        #[test]
        fn paused_selector_never_moves(len in 1usize..64, start in 0usize..64, ticks in 0usize..500) {
            let mut selector = Selector::starting_at(len, start);
            let before = selector.index();
            selector.pause();
            for _ in 0..ticks {
                selector.apply(CycleAction::Tick);
            }
            prop_assert_eq!(selector.index(), before);
        }

        #[test]
        fn index_stays_in_range(len in 1usize..16, actions in proptest::collection::vec(0u8..6, 0..200)) {
            let mut selector = Selector::new(len);
            for (step, action) in actions.into_iter().enumerate() {
                let action = match action {
                    0 => CycleAction::Tick,
                    1 => CycleAction::Next,
                    2 => CycleAction::Prev,
                    3 => CycleAction::Select(step % (len + 2)),
                    4 => CycleAction::Pause,
                    _ => CycleAction::Resume,
                };
                selector.apply(action);
                prop_assert!(selector.index() < selector.len());
            }
        }
    }
}
