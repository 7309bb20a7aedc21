#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Action {
    GoTo(i64),
    ToggleAutoplay,
    Step(Direction), // Manual navigation: move one slide and stop autoplay
    AutoAdvance,     // Autoplay timer tick
}

/// Where the presentation is. Replaced wholesale on every transition.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PresentationState {
    pub index: usize,
    pub autoplaying: bool,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self { index: 0, autoplaying: true }
    }
}

impl PresentationState {
    pub fn go_to(self, target: i64, len: usize) -> Self {
        let len = len.max(1) as i64;
        Self { index: target.rem_euclid(len) as usize, ..self }
    }

    pub fn next(self, len: usize) -> Self {
        self.go_to(self.index as i64 + 1, len)
    }

    pub fn previous(self, len: usize) -> Self {
        self.go_to(self.index as i64 - 1, len)
    }

    pub fn toggle_autoplay(self) -> Self {
        Self { autoplaying: !self.autoplaying, ..self }
    }

    pub fn reduce(self, action: Action, len: usize) -> Self {
        match action {
            Action::GoTo(target) => self.go_to(target, len),
            Action::AutoAdvance => self.next(len),
            Action::ToggleAutoplay => self.toggle_autoplay(),
            Action::Step(Direction::Forward) => Self { autoplaying: false, ..self.next(len) },
            Action::Step(Direction::Backward) => Self { autoplaying: false, ..self.previous(len) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const N: usize = 9;

    fn at(index: usize, autoplaying: bool) -> PresentationState {
        PresentationState { index, autoplaying }
    }

    #[test]
    fn starts_on_first_slide_with_autoplay() {
        assert_eq!(PresentationState::default(), at(0, true));
    }

    #[test]
    fn go_to_wraps_both_ways() {
        let s = PresentationState::default();
        assert_eq!(s.go_to(9, N).index, 0);
        assert_eq!(s.go_to(-1, N).index, 8);
        assert_eq!(s.go_to(-10, N).index, 8);
        assert_eq!(s.go_to(22, N).index, 4);
    }

    #[test]
    fn manual_steps_always_pause() {
        for autoplaying in [true, false] {
            let s = at(3, autoplaying);
            assert_eq!(s.reduce(Action::Step(Direction::Forward), N), at(4, false));
            assert_eq!(s.reduce(Action::Step(Direction::Backward), N), at(2, false));
        }
    }

    #[test]
    fn go_to_action_keeps_autoplay() {
        assert_eq!(at(2, true).reduce(Action::GoTo(-3), N), at(8, true));
        assert_eq!(at(2, false).reduce(Action::GoTo(4), N), at(4, false));
    }

    #[test]
    fn auto_advance_keeps_autoplay() {
        assert_eq!(at(8, true).reduce(Action::AutoAdvance, N), at(0, true));
    }

    #[test]
    fn single_slide_deck_stays_put() {
        assert_eq!(at(0, true).next(1), at(0, true));
        assert_eq!(at(0, true).previous(1), at(0, true));
    }

    #[test]
    fn nine_right_arrows_come_full_circle() {
        let mut s = PresentationState::default();
        for _ in 0..N {
            s = s.reduce(Action::Step(Direction::Forward), N);
        }
        assert_eq!(s, at(0, false));
    }

    #[test]
    fn space_twice_restores_autoplay() {
        let s = PresentationState::default();
        let once = s.reduce(Action::ToggleAutoplay, N);
        assert_eq!(once, at(0, false));
        assert_eq!(once.reduce(Action::ToggleAutoplay, N), s);
    }

    proptest! {
        #[test]
        fn go_to_lands_in_range(start in 0..N, k in any::<i32>()) {
            let s = at(start, true).go_to(start as i64 + k as i64, N);
            prop_assert!(s.index < N);
        }

        #[test]
        fn n_nexts_is_identity(start in 0..N, len in 1usize..32) {
            let origin = at(start % len, true);
            let mut s = origin;
            for _ in 0..len {
                s = s.next(len);
            }
            prop_assert_eq!(s, origin);
        }

        #[test]
        fn previous_and_next_cancel(start in 0..N, autoplaying in any::<bool>()) {
            let s = at(start, autoplaying);
            prop_assert_eq!(s.previous(N).next(N), s);
            prop_assert_eq!(s.next(N).previous(N), s);
        }

        #[test]
        fn toggle_is_an_involution(start in 0..N, autoplaying in any::<bool>()) {
            let s = at(start, autoplaying);
            prop_assert_eq!(s.toggle_autoplay().toggle_autoplay(), s);
        }
    }
}
