//! Best-effort match feedback.
//!
//! A found pair may be celebrated with a short sound. Producing it is the
//! job of a `MatchFeedback` collaborator (a browser audio context, a desktop
//! sound server, nothing at all). Its failures are logged and swallowed:
//! feedback never affects the round.

use log::warn;
use thiserror::Error;

use crate::cards::Profession;

/// Feedback errors
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// The platform has no way to play audio
    #[error("Audio output not supported")]
    Unsupported,

    /// The output device refused or failed
    #[error("Audio device error: {0}")]
    Device(String),
}

/// Collaborator notified when a pair locks in.
pub trait MatchFeedback {
    /// Play the match cue for a profession.
    fn pair_found(&mut self, profession: &Profession) -> Result<(), FeedbackError>;
}

/// Feedback that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl MatchFeedback for Silent {
    fn pair_found(&mut self, _profession: &Profession) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Run the feedback, logging instead of propagating any failure.
///
/// Returns whether the cue played.
pub fn play_best_effort(feedback: &mut dyn MatchFeedback, profession: &Profession) -> bool {
    match feedback.pair_found(profession) {
        Ok(()) => true,
        Err(err) => {
            warn!("Could not play match feedback for {}: {}", profession.id, err);
            false
        }
    }
}
