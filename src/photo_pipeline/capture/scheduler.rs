use tracing::{debug, warn};

use crate::photo_pipeline::capture::state::CaptureState;

pub const DEFAULT_SHUTTER_DURATION: f32 = 0.15;

/// Frame-driven shutter state machine.
///
/// `Idle -> ShutterAnimating` on [`take_photo`](Self::take_photo), back to
/// `Idle` once the animation has run its duration. The capture request it
/// latches is independent of the animation and is consumed by whoever owns
/// the frame-complete boundary.
#[derive(Debug, Clone)]
pub struct CaptureScheduler {
    state: CaptureState,
    shutter_duration: f32,
    alpha: f32,
    closed_this_tick: bool,
}

impl Default for CaptureScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_SHUTTER_DURATION)
    }
}

impl CaptureScheduler {
    pub fn new(shutter_duration: f32) -> Self {
        let shutter_duration = if shutter_duration.is_finite() && shutter_duration > 0.0 {
            shutter_duration
        } else {
            warn!(shutter_duration, "Invalid shutter duration, using default");
            DEFAULT_SHUTTER_DURATION
        };
        Self {
            state: CaptureState::default(),
            shutter_duration,
            alpha: 0.0,
            closed_this_tick: false,
        }
    }

    /// Arms the shutter and latches a capture request.
    ///
    /// Returns `false` and does nothing while the shutter is already animating.
    pub fn take_photo(&mut self) -> bool {
        if self.state.shutter_active {
            debug!("Shutter already animating, ignoring take_photo");
            return false;
        }

        self.state = CaptureState {
            shutter_active: true,
            shutter_elapsed: 0.0,
            capture_request_pending: true,
            captured_this_cycle: false,
        };
        self.alpha = 0.0;
        debug!("Shutter armed, capture request latched");
        true
    }

    /// Advances the animation by `dt` seconds and returns the overlay alpha.
    ///
    /// Alpha is a triangle wave over the shutter duration, peaking at 1.0
    /// halfway through.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.closed_this_tick = false;

        if !self.state.shutter_active {
            self.alpha = 0.0;
            return self.alpha;
        }

        self.state.shutter_elapsed += dt.max(0.0);
        let t = self.state.shutter_elapsed / self.shutter_duration;

        if t >= 0.5 && !self.state.captured_this_cycle {
            self.state.captured_this_cycle = true;
            self.closed_this_tick = true;
            debug!(elapsed = self.state.shutter_elapsed, "Shutter closed");
        }

        self.alpha = if t >= 1.0 {
            self.state.shutter_active = false;
            0.0
        } else if t < 0.5 {
            2.0 * t
        } else {
            2.0 * (1.0 - t)
        };

        self.alpha
    }

    pub fn is_capture_request_pending(&self) -> bool {
        self.state.capture_request_pending
    }

    /// Drops a latched request without running it.
    pub fn clear_capture_request(&mut self) {
        self.state.capture_request_pending = false;
    }

    /// Consumes the latched request. Returns `true` exactly once per `take_photo`.
    pub fn take_capture_request(&mut self) -> bool {
        std::mem::replace(&mut self.state.capture_request_pending, false)
    }

    /// Whether the most recent [`advance`](Self::advance) crossed the closed instant.
    pub fn shutter_closed_this_tick(&self) -> bool {
        self.closed_this_tick
    }

    pub fn is_animating(&self) -> bool {
        self.state.shutter_active
    }

    pub fn shutter_alpha(&self) -> f32 {
        self.alpha
    }

    pub fn shutter_duration(&self) -> f32 {
        self.shutter_duration
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }
}
