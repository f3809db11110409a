use crate::constants::DEFAULT_MUSIC_VOLUME;

/// What the keyboard and the control bar can ask of background music.
pub trait MusicControl {
    fn toggle(&mut self);
    fn adjust_volume(&mut self, delta: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MusicState {
    pub playing: bool,
    pub volume: f32,
    /// Bumped on every toggle; a play attempt is identified by the value
    /// current when it started.
    generation: u64,
}

impl Default for MusicState {
    fn default() -> Self {
        Self {
            playing: false,
            volume: DEFAULT_MUSIC_VOLUME,
            generation: 0,
        }
    }
}

impl MusicState {
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A play attempt started at `generation` failed. Reverts `playing` only
    /// when no toggle happened since; returns whether anything changed.
    pub fn play_rejected(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.playing {
            return false;
        }
        self.playing = false;
        true
    }
}

impl MusicControl for MusicState {
    fn toggle(&mut self) {
        self.playing = !self.playing;
        self.generation = self.generation.wrapping_add(1);
    }

    fn adjust_volume(&mut self, delta: f32) {
        self.set_volume(self.volume + delta);
    }
}
