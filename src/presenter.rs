use tracing::debug;
use crate::autoplay::AutoplayTimer;
use crate::constants::FPS;
use crate::deck::{Deck, Slide};
use crate::state::{Action, PresentationState};
use crate::transition::{Presence, Variants};

/// Presentation controller: owns the slide state, the autoplay timer and the
/// per-layer transitions. Every change goes through `dispatch`.
pub struct Presenter {
    deck: Deck,
    state: PresentationState,
    timer: AutoplayTimer,
    content: Presence,
    image: Presence,
}

impl Presenter {
    pub fn new(deck: Deck, interval: f32, initial: PresentationState) -> Self {
        let state = initial.go_to(initial.index as i64, deck.len());
        let mut timer = AutoplayTimer::new(interval);
        timer.sync(state);
        Self {
            deck,
            state,
            timer,
            content: Presence::new(Variants::content(), state.index),
            image: Presence::new(Variants::image(), state.index),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }

    pub fn current_slide(&self) -> &'static Slide {
        self.deck.get(self.state.index)
    }

    pub fn content(&self) -> &Presence {
        &self.content
    }

    pub fn image(&self) -> &Presence {
        &self.image
    }

    #[cfg(test)]
    pub fn timer(&self) -> &AutoplayTimer {
        &self.timer
    }

    pub fn dispatch(&mut self, action: Action) {
        let next = self.state.reduce(action, self.deck.len());
        if next == self.state {
            return;
        }
        debug!(?action, from = self.state.index, to = next.index, autoplaying = next.autoplaying, "presentation state changed");
        self.state = next;
        self.timer.sync(next);
        self.content.show(next.index);
        self.image.show(next.index);
    }

    /// Advances the autoplay timer and the transitions by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.timer.advance(dt) {
            self.dispatch(Action::AutoAdvance);
        }
        self.content.update(dt);
        self.image.update(dt);
    }

    /// Stops autoplay and hands back where the presentation ended.
    pub fn shutdown(mut self) -> PresentationState {
        self.timer.cancel();
        debug!(index = self.state.index, "presenter torn down");
        self.state
    }
}

/// Frames needed to record every slide once and come back to a settled first slide.
pub fn recording_frames(slides: usize, interval: f32) -> u64 {
    let swap = Variants::content().swap_duration().max(Variants::image().swap_duration());
    ((slides as f32 * interval + swap) * FPS as f32).ceil() as u64
}
