//! Per-corner radius animation
//!
//! Each corner runs its own track between the square and round radius.
//! Tracks only start when that corner's proximity flag flips, so the
//! detector can be re-run on every pointer move without restarting
//! animations that are already heading the right way.

use std::time::Duration;

use crate::animation::{AnimationTrack, Easing};
use crate::model::{Corner, CornerRadii, Corners, ProximityState};

#[derive(Debug, Clone)]
pub struct RadiusAnimator {
    tracks: Corners<Option<AnimationTrack<f64>>>,
    /// Last evaluated proximity, used only to detect flips
    last: ProximityState,
    square: f64,
    round: f64,
    duration: Duration,
    easing: Easing,
}

impl RadiusAnimator {
    pub fn new(
        initial: ProximityState,
        square: f64,
        round: f64,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            tracks: Corners::default(),
            last: initial,
            square,
            round,
            duration,
            easing,
        }
    }

    /// Radius a corner settles at for the given touching flag
    pub fn target(&self, touching: bool) -> f64 {
        if touching {
            self.square
        } else {
            self.round
        }
    }

    /// Radii matching the initial proximity, with no animation
    pub fn settled_radii(&self) -> CornerRadii {
        self.last.map(|_, touching| self.target(touching))
    }

    pub fn is_animating(&self) -> bool {
        self.tracks.top_left.is_some()
            || self.tracks.top_right.is_some()
            || self.tracks.bottom_left.is_some()
            || self.tracks.bottom_right.is_some()
    }

    /// Feed a fresh proximity evaluation
    ///
    /// Starts a track for every corner whose flag flipped, beginning at the
    /// currently rendered radius. Returns the corners that started.
    pub fn observe(&mut self, proximity: ProximityState, radii: &CornerRadii) -> Vec<Corner> {
        let mut started = Vec::new();
        for corner in Corner::ALL {
            let touching = proximity.get(corner);
            if touching == self.last.get(corner) {
                continue;
            }
            let from = radii.get(corner);
            let to = self.target(touching);
            *self.tracks.get_mut(corner) =
                Some(AnimationTrack::new(from, to, self.duration, self.easing));
            tracing::debug!(
                corner = corner.label(),
                touching,
                from,
                to,
                "corner radius transition"
            );
            started.push(corner);
        }
        self.last = proximity;
        started
    }

    /// Advance all running tracks, writing radii; returns true if any radius changed
    pub fn tick(&mut self, dt: Duration, radii: &mut CornerRadii) -> bool {
        let mut changed = false;
        for corner in Corner::ALL {
            let slot = self.tracks.get_mut(corner);
            let Some(track) = slot.as_mut() else {
                continue;
            };
            let value = track.advance(dt);
            let radius = radii.get_mut(corner);
            if *radius != value {
                *radius = value;
                changed = true;
            }
            if track.is_finished() {
                *slot = None;
            }
        }
        changed
    }
}
