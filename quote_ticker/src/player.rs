//! Console audio player.
//!
//! `ConsolePlayer::start` spawns a thread that consumes `AudioCue`s from a
//! `crossbeam_channel` and renders them on the terminal: a log line per cue and,
//! unless disabled, the terminal bell. The analyzer talks to the thread through
//! [`ChannelAudio`], its `AudioFeedback` end of the channel. The thread exits once
//! every `ChannelAudio` has been dropped.
use std::io::Write;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Sender, unbounded};
use log::{error, info, warn};
use quote_analyzer::{AudioCue, AudioFeedback};

/// Sending half of the player; plugs into the analyzer as its audio feedback.
#[derive(Clone)]
pub struct ChannelAudio {
    tx: Sender<AudioCue>,
}

impl ChannelAudio {
    fn send(&self, cue: AudioCue) {
        if let Err(e) = self.tx.send(cue) {
            error!("Audio player is gone, dropping {} cue: {}", cue, e);
        }
    }
}

impl AudioFeedback for ChannelAudio {
    fn play_happy(&mut self) {
        self.send(AudioCue::Happy);
    }

    fn play_sad(&mut self) {
        self.send(AudioCue::Sad);
    }

    fn play_error(&mut self) {
        self.send(AudioCue::Error);
    }
}

/// Terminal renderer for audio cues.
pub struct ConsolePlayer;

impl ConsolePlayer {
    /// Start the player thread and return its feedback handle.
    pub fn start(bell: bool) -> (ChannelAudio, JoinHandle<()>) {
        let (tx, rx) = unbounded::<AudioCue>();

        let handle = thread::spawn(move || {
            for cue in rx.iter() {
                match cue {
                    AudioCue::Error => warn!("Sound: {}", cue),
                    _ => info!("Sound: {}", cue),
                }
                if bell {
                    let mut stdout = std::io::stdout();
                    if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
                        error!("Failed to ring the bell: {}", e);
                    }
                }
            }
            info!("Audio player stopping...");
        });

        (ChannelAudio { tx }, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_reach_the_channel_in_order() {
        let (tx, rx) = unbounded();
        let mut audio = ChannelAudio { tx };
        audio.play_sad();
        audio.play_happy();
        audio.play_error();
        drop(audio);
        assert_eq!(
            rx.iter().collect::<Vec<_>>(),
            vec![AudioCue::Sad, AudioCue::Happy, AudioCue::Error]
        );
    }

    #[test]
    fn sending_to_a_closed_player_does_not_panic() {
        let (tx, rx) = unbounded();
        drop(rx);
        let mut audio = ChannelAudio { tx };
        audio.play_happy();
    }

    #[test]
    fn player_thread_stops_when_handles_drop() {
        let (mut audio, handle) = ConsolePlayer::start(false);
        audio.play_happy();
        drop(audio);
        assert!(handle.join().is_ok());
    }
}
