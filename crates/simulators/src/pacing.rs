//! Optional real-time pacing of simulated stages.

use llm_contrast_core::PacingMode;
use std::thread;
use std::time::Duration;
use tracing::trace;

/// Block for `seconds` when pacing is live; return immediately otherwise.
///
/// One call per stage, made in stage order. Non-finite or non-positive
/// durations never sleep.
pub fn pause(mode: PacingMode, stage: &str, seconds: f64) {
    if mode != PacingMode::Live || !seconds.is_finite() || seconds <= 0.0 {
        return;
    }
    trace!(stage, seconds, "Pacing stage");
    thread::sleep(Duration::from_secs_f64(seconds));
}
