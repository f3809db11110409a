//! Keyboard shortcuts.
//!
//! | key                   | action                                   |
//! |-----------------------|------------------------------------------|
//! | `g`                   | gallery                                  |
//! | `m`                   | minimap and background music             |
//! | `n`                   | navigation menu                          |
//! | `c`                   | control bar                              |
//! | `f`                   | fullscreen                               |
//! | `h`                   | hide all overlays / bring them back      |
//! | `Escape`              | close info panel, else like `h`          |
//! | `i`                   | info panel                               |
//! | `ArrowLeft` / `a`     | previous node                            |
//! | `ArrowRight` / `d`    | next node                                |
//! | `ArrowUp`/`ArrowDown` | music volume                             |
//! | `ctrl+r`              | reset everything, after confirmation     |

use crate::constants::MUSIC_VOLUME_STEP;
use crate::music::MusicControl;
use crate::state::TourStore;
use smallvec::{smallvec, SmallVec};

pub const RESET_CONFIRM_MESSAGE: &str =
    "Reset the tour? This returns to the first panorama and clears saved view settings.";

/// Platform-neutral view of a keydown event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    /// Focus is inside an input, textarea, select or contenteditable.
    pub in_text_input: bool,
}

impl KeyInput {
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            ctrl: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleGallery,
    ToggleMinimap,
    ToggleMusic,
    ToggleNavigationMenu,
    ToggleControls,
    ToggleFullscreen,
    ToggleOverlays,
    Escape,
    ToggleInfoPanel,
    PreviousNode,
    NextNode,
    VolumeUp,
    VolumeDown,
    ResetWithConfirmation,
}

pub type Commands = SmallVec<[Command; 2]>;

/// Commands bound to a key combination. Empty when nothing is bound.
pub fn commands_for_key(input: &KeyInput) -> Commands {
    if input.in_text_input {
        return Commands::new();
    }
    let key = input.key.as_str();
    if input.ctrl || input.meta {
        return match key {
            "r" | "R" if !input.alt => smallvec![Command::ResetWithConfirmation],
            _ => Commands::new(),
        };
    }
    if input.alt {
        return Commands::new();
    }
    match key {
        "g" | "G" => smallvec![Command::ToggleGallery],
        "m" | "M" => smallvec![Command::ToggleMinimap, Command::ToggleMusic],
        "n" | "N" => smallvec![Command::ToggleNavigationMenu],
        "c" | "C" => smallvec![Command::ToggleControls],
        "f" | "F" => smallvec![Command::ToggleFullscreen],
        "h" | "H" => smallvec![Command::ToggleOverlays],
        "Escape" => smallvec![Command::Escape],
        "i" | "I" => smallvec![Command::ToggleInfoPanel],
        "ArrowLeft" | "a" | "A" => smallvec![Command::PreviousNode],
        "ArrowRight" | "d" | "D" => smallvec![Command::NextNode],
        "ArrowUp" => smallvec![Command::VolumeUp],
        "ArrowDown" => smallvec![Command::VolumeDown],
        _ => Commands::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    /// Acted on; the browser default should be suppressed.
    Handled,
}

/// Everything a shortcut may touch.
pub struct ShortcutTargets<'a> {
    pub store: &'a mut TourStore,
    pub music: &'a mut dyn MusicControl,
    /// Asks the user to confirm a destructive action.
    pub confirm: &'a mut dyn FnMut(&str) -> bool,
}

/// Routes key presses to store and music operations. Owns the info panel
/// flag, which is not part of the navigation state.
#[derive(Debug, Default)]
pub struct ShortcutDispatcher {
    info_open: bool,
}

impl ShortcutDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info_open(&self) -> bool {
        self.info_open
    }

    pub fn set_info_open(&mut self, open: bool) {
        self.info_open = open;
    }

    pub fn dispatch(&mut self, input: &KeyInput, targets: ShortcutTargets<'_>) -> KeyOutcome {
        let commands = commands_for_key(input);
        if commands.is_empty() {
            return KeyOutcome::Ignored;
        }
        let ShortcutTargets {
            store,
            music,
            confirm,
        } = targets;
        for command in commands {
            match command {
                Command::ToggleGallery => store.toggle_gallery(),
                Command::ToggleMinimap => store.toggle_minimap(),
                Command::ToggleMusic => music.toggle(),
                Command::ToggleNavigationMenu => store.toggle_navigation_menu(),
                Command::ToggleControls => store.toggle_controls(),
                Command::ToggleFullscreen => store.toggle_fullscreen(),
                Command::ToggleOverlays => store.toggle_all_overlays(),
                Command::Escape => {
                    if self.info_open {
                        self.info_open = false;
                    } else {
                        store.toggle_all_overlays();
                    }
                }
                Command::ToggleInfoPanel => self.info_open = !self.info_open,
                Command::PreviousNode => store.go_previous(),
                Command::NextNode => store.go_next(),
                Command::VolumeUp => music.adjust_volume(MUSIC_VOLUME_STEP),
                Command::VolumeDown => music.adjust_volume(-MUSIC_VOLUME_STEP),
                Command::ResetWithConfirmation => {
                    if confirm(RESET_CONFIRM_MESSAGE) {
                        store.clear_persisted_state();
                    } else {
                        log::info!("[keys] reset cancelled");
                    }
                }
            }
        }
        log::debug!("[keys] '{}' handled", input.key);
        KeyOutcome::Handled
    }
}
