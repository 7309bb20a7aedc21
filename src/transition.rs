//! Enter/exit animation for whatever slide is on screen.
//!
//! Works in "wait" mode: the outgoing slide finishes exiting before the
//! incoming one starts entering, so at most one slide is ever drawn per layer.

use raylib::prelude::*;
use crate::constants::*;

/// Visual offsets applied to a layer. `offset_y` is in render pixels,
/// `rotation` in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
    pub rotation: f32,
}

impl Pose {
    pub const REST: Pose = Pose { opacity: 1.0, offset_y: 0.0, scale: 1.0, rotation: 0.0 };

    pub fn lerp(self, to: Pose, t: f32) -> Pose {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale),
            rotation: mix(self.rotation, to.rotation),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub initial: Pose,
    pub exit: Pose,
    pub enter_duration: f32,
    pub exit_duration: f32,
}

impl Variants {
    /// Time from a target change until the new slide is at rest.
    pub fn swap_duration(&self) -> f32 {
        self.exit_duration + self.enter_duration
    }

    /// Text blocks rise in and drift up on the way out.
    pub fn content() -> Self {
        Self {
            initial: Pose { opacity: 0.0, offset_y: 12.0, ..Pose::REST },
            exit: Pose { opacity: 0.0, offset_y: -18.0, ..Pose::REST },
            enter_duration: CONTENT_ENTER_DURATION,
            exit_duration: CONTENT_EXIT_DURATION,
        }
    }

    /// The image settles from a slight zoom and tilt, then shrinks away.
    pub fn image() -> Self {
        Self {
            initial: Pose { opacity: 0.0, scale: 1.03, rotation: 1.5, ..Pose::REST },
            exit: Pose { opacity: 0.0, scale: 0.96, rotation: -2.0, ..Pose::REST },
            enter_duration: IMAGE_ENTER_DURATION,
            exit_duration: IMAGE_EXIT_DURATION,
        }
    }
}

enum Phase {
    Entering { slide: usize, from: Pose, tween: ease::Tween, elapsed: f32 },
    Shown { slide: usize },
    Exiting { slide: usize, pending: usize, from: Pose, tween: ease::Tween, elapsed: f32 },
}

pub struct Presence {
    variants: Variants,
    phase: Phase,
    pose: Pose,
}

impl Presence {
    /// Starts with `slide` entering, as on first load.
    pub fn new(variants: Variants, slide: usize) -> Self {
        Self {
            variants,
            phase: Self::entering(&variants, slide, variants.initial),
            pose: variants.initial,
        }
    }

    fn entering(variants: &Variants, slide: usize, from: Pose) -> Phase {
        Phase::Entering {
            slide,
            from,
            tween: ease::Tween::new(ease::cubic_out, 0.0, 1.0, variants.enter_duration),
            elapsed: 0.0,
        }
    }

    fn exiting(variants: &Variants, slide: usize, pending: usize, from: Pose) -> Phase {
        Phase::Exiting {
            slide,
            pending,
            from,
            tween: ease::Tween::new(ease::cubic_in, 0.0, 1.0, variants.exit_duration),
            elapsed: 0.0,
        }
    }

    /// Slide currently drawn on this layer (the outgoing one while exiting).
    pub fn shown(&self) -> usize {
        match self.phase {
            Phase::Entering { slide, .. } | Phase::Shown { slide } | Phase::Exiting { slide, .. } => slide,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[cfg(test)]
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Shown { .. })
    }

    /// Requests `target` to be on screen.
    pub fn show(&mut self, target: usize) {
        match &mut self.phase {
            Phase::Exiting { pending, .. } => *pending = target,
            Phase::Entering { slide, .. } | Phase::Shown { slide } => {
                if *slide != target {
                    self.phase = Self::exiting(&self.variants, *slide, target, self.pose);
                }
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        let variants = self.variants;
        match &mut self.phase {
            Phase::Shown { .. } => {
                self.pose = Pose::REST;
            }
            Phase::Entering { slide, from, tween, elapsed } => {
                *elapsed += dt;
                let t = tween.apply(dt).clamp(0.0, 1.0);
                if *elapsed + TIME_EPSILON >= variants.enter_duration {
                    self.pose = Pose::REST;
                    self.phase = Phase::Shown { slide: *slide };
                } else {
                    self.pose = from.lerp(Pose::REST, t);
                }
            }
            Phase::Exiting { pending, from, tween, elapsed, .. } => {
                *elapsed += dt;
                let t = tween.apply(dt).clamp(0.0, 1.0);
                if *elapsed + TIME_EPSILON >= variants.exit_duration {
                    self.pose = variants.initial;
                    self.phase = Self::entering(&variants, *pending, variants.initial);
                } else {
                    self.pose = from.lerp(variants.exit, t);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(presence: &mut Presence) {
        for _ in 0..(3 * FPS) {
            presence.update(FRAME_TIME);
        }
    }

    #[test]
    fn first_slide_fades_in_to_rest() {
        let mut presence = Presence::new(Variants::content(), 0);
        assert_eq!(presence.pose().opacity, 0.0);
        presence.update(0.3);
        let mid = presence.pose();
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.offset_y > 0.0 && mid.offset_y < 12.0);
        settle(&mut presence);
        assert!(presence.is_settled());
        assert_eq!(presence.pose(), Pose::REST);
    }

    #[test]
    fn outgoing_slide_stays_until_exit_completes() {
        let mut presence = Presence::new(Variants::image(), 0);
        settle(&mut presence);
        presence.show(1);
        presence.update(0.25);
        assert_eq!(presence.shown(), 0);
        assert!(presence.pose().scale < 1.0);
        presence.update(0.3);
        assert_eq!(presence.shown(), 1);
        settle(&mut presence);
        assert_eq!(presence.shown(), 1);
        assert_eq!(presence.pose(), Pose::REST);
    }

    #[test]
    fn retarget_while_exiting_keeps_exit_running() {
        let mut presence = Presence::new(Variants::content(), 0);
        settle(&mut presence);
        presence.show(1);
        presence.update(0.3);
        presence.show(2);
        presence.update(0.15);
        assert_eq!(presence.shown(), 2);
        settle(&mut presence);
        assert_eq!(presence.shown(), 2);
    }

    #[test]
    fn swap_completes_on_its_last_frame() {
        let variants = Variants::image();
        let frames = (variants.swap_duration() * FPS as f32).round() as u32;
        let mut presence = Presence::new(variants, 0);
        settle(&mut presence);
        presence.show(1);
        for _ in 0..frames {
            presence.update(FRAME_TIME);
        }
        assert!(presence.is_settled());
        assert_eq!(presence.shown(), 1);
    }

    #[test]
    fn showing_current_slide_is_a_no_op() {
        let mut presence = Presence::new(Variants::content(), 3);
        settle(&mut presence);
        presence.show(3);
        assert!(presence.is_settled());
    }
}
