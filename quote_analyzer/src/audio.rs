//! Audio feedback collaborator.
//!
//! The analyzer never decodes or plays audio itself; it only decides which of the
//! three cues fits and hands that decision to an `AudioFeedback` implementation.
use strum::{Display, EnumString};

/// The sounds an [`AudioFeedback`] can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AudioCue {
    /// Price moved up by at least one percent.
    Happy,
    /// Price moved down by at least one percent.
    Sad,
    /// The quote could not be fetched.
    Error,
}

/// Fire-and-forget sound player.
pub trait AudioFeedback {
    /// Play the happy sound.
    fn play_happy(&mut self);

    /// Play the sad sound.
    fn play_sad(&mut self);

    /// Play the error sound.
    fn play_error(&mut self);

    /// Dispatch `cue` to the matching method.
    fn play(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::Happy => self.play_happy(),
            AudioCue::Sad => self.play_sad(),
            AudioCue::Error => self.play_error(),
        }
    }
}
