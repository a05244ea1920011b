//! Timed fade animations for the copy-link confirmation and the theme switch.
//!
//! Both are small pure state machines keyed off a start `Instant`, so the
//! frame loop only has to ask "what do I draw at `now`".

use pastepad_core::constants::{COPY_HOLD_DURATION, FADE_DURATION};
use std::time::{Duration, Instant};

/// Phase of the copy-link confirmation animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CopyPhase {
    /// Original label fading out.
    FadeOut,
    /// "Copied!" confirmation fully visible.
    Hold,
    /// Confirmation fading out again.
    FadeBack,
    /// Original label fading back in.
    Restore,
}

/// One run of the copy-link confirmation. The app guards against re-entry by
/// refusing to start a second run while one exists.
#[derive(Debug, Clone, Copy)]
pub(super) struct CopyAnimation {
    started_at: Instant,
}

impl CopyAnimation {
    pub(super) fn new(now: Instant) -> Self {
        Self { started_at: now }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Phase at `now`, or `None` once the run has finished.
    pub(super) fn phase_at(&self, now: Instant) -> Option<CopyPhase> {
        let elapsed = self.elapsed(now);
        let hold_end = FADE_DURATION + COPY_HOLD_DURATION;
        let fade_back_end = hold_end + FADE_DURATION;
        let restore_end = fade_back_end + FADE_DURATION;
        if elapsed < FADE_DURATION {
            Some(CopyPhase::FadeOut)
        } else if elapsed < hold_end {
            Some(CopyPhase::Hold)
        } else if elapsed < fade_back_end {
            Some(CopyPhase::FadeBack)
        } else if elapsed < restore_end {
            Some(CopyPhase::Restore)
        } else {
            None
        }
    }

    /// Whether the label should read "Copied!" rather than the share path.
    pub(super) fn shows_confirmation(&self, now: Instant) -> bool {
        matches!(
            self.phase_at(now),
            Some(CopyPhase::Hold | CopyPhase::FadeBack)
        )
    }

    /// Opacity multiplier for the share-URL label.
    pub(super) fn opacity_at(&self, now: Instant) -> f32 {
        let elapsed = self.elapsed(now);
        match self.phase_at(now) {
            Some(CopyPhase::FadeOut) => 1.0 - fade_fraction(elapsed, Duration::ZERO),
            Some(CopyPhase::Hold) => 1.0,
            Some(CopyPhase::FadeBack) => {
                1.0 - fade_fraction(elapsed, FADE_DURATION + COPY_HOLD_DURATION)
            }
            Some(CopyPhase::Restore) => {
                fade_fraction(elapsed, FADE_DURATION + COPY_HOLD_DURATION + FADE_DURATION)
            }
            None => 1.0,
        }
    }

    pub(super) fn finished(&self, now: Instant) -> bool {
        self.phase_at(now).is_none()
    }
}

/// Two-stage fade applied to the whole UI when the theme is toggled: fade out,
/// flip the variant at the midpoint, fade back in.
#[derive(Debug, Clone, Copy)]
pub(super) struct ThemeFade {
    started_at: Instant,
    /// Set once the variant flip has been applied.
    pub(super) switched: bool,
}

impl ThemeFade {
    pub(super) fn new(now: Instant) -> Self {
        Self {
            started_at: now,
            switched: false,
        }
    }

    pub(super) fn reached_midpoint(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= FADE_DURATION
    }

    pub(super) fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= FADE_DURATION * 2
    }

    /// Opacity multiplier for every panel while the fade runs.
    pub(super) fn opacity_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed < FADE_DURATION {
            1.0 - fade_fraction(elapsed, Duration::ZERO)
        } else {
            fade_fraction(elapsed, FADE_DURATION)
        }
    }
}

fn fade_fraction(elapsed: Duration, phase_start: Duration) -> f32 {
    let into_phase = elapsed.saturating_sub(phase_start);
    (into_phase.as_secs_f32() / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}
