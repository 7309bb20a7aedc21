use raylib::prelude::*;
use crate::state::{Action, Direction};

/// Keys the presenter reacts to.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Key {
    ArrowRight,
    PageDown,
    ArrowLeft,
    PageUp,
    Space,
}

/// On-screen buttons in the footer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Control {
    Previous,
    Next,
    PlayPause,
}

const KEY_BINDINGS: [(KeyboardKey, Key); 5] = [
    (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
    (KeyboardKey::KEY_PAGE_DOWN, Key::PageDown),
    (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
    (KeyboardKey::KEY_PAGE_UP, Key::PageUp),
    (KeyboardKey::KEY_SPACE, Key::Space),
];

impl Key {
    pub fn action(self) -> Action {
        match self {
            Key::ArrowRight | Key::PageDown => Action::Step(Direction::Forward),
            Key::ArrowLeft | Key::PageUp => Action::Step(Direction::Backward),
            Key::Space => Action::ToggleAutoplay,
        }
    }
}

impl Control {
    pub fn action(self) -> Action {
        match self {
            Control::Previous => Action::Step(Direction::Backward),
            Control::Next => Action::Step(Direction::Forward),
            Control::PlayPause => Action::ToggleAutoplay,
        }
    }
}

/// Keys pressed since the last frame, in binding order. A held key repeats
/// at the OS auto-repeat rate.
pub fn pressed_keys(rl: &RaylibHandle) -> Vec<Key> {
    triggered_keys(|raylib_key| rl.is_key_pressed(raylib_key) || rl.is_key_pressed_repeat(raylib_key))
}

fn triggered_keys(triggered: impl Fn(KeyboardKey) -> bool) -> Vec<Key> {
    KEY_BINDINGS
        .iter()
        .filter(|(raylib_key, _)| triggered(*raylib_key))
        .map(|(_, key)| *key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_keys_step_forward() {
        assert_eq!(Key::ArrowRight.action(), Action::Step(Direction::Forward));
        assert_eq!(Key::PageDown.action(), Action::Step(Direction::Forward));
    }

    #[test]
    fn backward_keys_step_backward() {
        assert_eq!(Key::ArrowLeft.action(), Action::Step(Direction::Backward));
        assert_eq!(Key::PageUp.action(), Action::Step(Direction::Backward));
    }

    #[test]
    fn space_and_play_button_toggle() {
        assert_eq!(Key::Space.action(), Action::ToggleAutoplay);
        assert_eq!(Control::PlayPause.action(), Action::ToggleAutoplay);
    }

    #[test]
    fn triggered_keys_follow_binding_order() {
        let held = [KeyboardKey::KEY_SPACE, KeyboardKey::KEY_PAGE_DOWN, KeyboardKey::KEY_A];
        assert_eq!(triggered_keys(|k| held.contains(&k)), vec![Key::PageDown, Key::Space]);
        assert!(triggered_keys(|_| false).is_empty());
    }

    #[test]
    fn held_arrow_keeps_advancing() {
        use crate::state::PresentationState;
        // One press followed by two auto-repeat events
        let mut state = PresentationState::default();
        for _ in 0..3 {
            for key in triggered_keys(|k| k == KeyboardKey::KEY_RIGHT) {
                state = state.reduce(key.action(), 9);
            }
        }
        assert_eq!(state, PresentationState { index: 3, autoplaying: false });
    }

    #[test]
    fn buttons_match_arrow_keys() {
        assert_eq!(Control::Next.action(), Key::ArrowRight.action());
        assert_eq!(Control::Previous.action(), Key::ArrowLeft.action());
    }
}
