// Host-side tests for shortcut mapping and dispatch.

mod common;

use common::make_store;
use tour_core::{
    commands_for_key, Command, KeyInput, KeyOutcome, MusicState, NavigationState,
    ShortcutDispatcher, ShortcutTargets, TourStore,
};

const THREE: [&str; 3] = ["kawasan-1", "kawasan-2", "kawasan-3"];

fn press(
    dispatcher: &mut ShortcutDispatcher,
    store: &mut TourStore,
    music: &mut MusicState,
    input: KeyInput,
    answer: bool,
) -> (KeyOutcome, Vec<String>) {
    let mut asked = Vec::new();
    let mut confirm = |msg: &str| {
        asked.push(msg.to_owned());
        answer
    };
    let outcome = dispatcher.dispatch(
        &input,
        ShortcutTargets {
            store,
            music,
            confirm: &mut confirm,
        },
    );
    (outcome, asked)
}

#[test]
fn letter_bindings_match_case_insensitively() {
    for (lower, upper, cmd) in [
        ("g", "G", Command::ToggleGallery),
        ("n", "N", Command::ToggleNavigationMenu),
        ("c", "C", Command::ToggleControls),
        ("f", "F", Command::ToggleFullscreen),
        ("h", "H", Command::ToggleOverlays),
        ("i", "I", Command::ToggleInfoPanel),
        ("a", "A", Command::PreviousNode),
        ("d", "D", Command::NextNode),
    ] {
        assert_eq!(commands_for_key(&KeyInput::plain(lower)).as_slice(), &[cmd]);
        assert_eq!(commands_for_key(&KeyInput::plain(upper)).as_slice(), &[cmd]);
    }
}

#[test]
fn m_is_bound_to_minimap_and_music() {
    assert_eq!(
        commands_for_key(&KeyInput::plain("m")).as_slice(),
        &[Command::ToggleMinimap, Command::ToggleMusic]
    );
}

#[test]
fn arrows_and_escape() {
    assert_eq!(
        commands_for_key(&KeyInput::plain("ArrowLeft")).as_slice(),
        &[Command::PreviousNode]
    );
    assert_eq!(
        commands_for_key(&KeyInput::plain("ArrowRight")).as_slice(),
        &[Command::NextNode]
    );
    assert_eq!(
        commands_for_key(&KeyInput::plain("ArrowUp")).as_slice(),
        &[Command::VolumeUp]
    );
    assert_eq!(
        commands_for_key(&KeyInput::plain("ArrowDown")).as_slice(),
        &[Command::VolumeDown]
    );
    assert_eq!(
        commands_for_key(&KeyInput::plain("Escape")).as_slice(),
        &[Command::Escape]
    );
}

#[test]
fn unbound_keys_and_modifiers_are_ignored() {
    for key in ["", "x", "1", "Enter", " ", "r"] {
        assert!(commands_for_key(&KeyInput::plain(key)).is_empty(), "{key:?}");
    }
    assert!(commands_for_key(&KeyInput::with_ctrl("g")).is_empty());
    let alt_g = KeyInput {
        alt: true,
        ..KeyInput::plain("g")
    };
    assert!(commands_for_key(&alt_g).is_empty());
    let meta_r = KeyInput {
        meta: true,
        ..KeyInput::plain("r")
    };
    assert_eq!(
        commands_for_key(&meta_r).as_slice(),
        &[Command::ResetWithConfirmation]
    );
    assert_eq!(
        commands_for_key(&KeyInput::with_ctrl("R")).as_slice(),
        &[Command::ResetWithConfirmation]
    );
}

#[test]
fn keys_inside_text_inputs_are_ignored() {
    let (mut store, _, _) = make_store(&THREE);
    let mut music = MusicState::default();
    let mut dispatcher = ShortcutDispatcher::new();
    let before = store.state().clone();
    for key in ["g", "m", "ArrowRight", "Escape"] {
        let input = KeyInput {
            in_text_input: true,
            ..KeyInput::plain(key)
        };
        let (outcome, _) = press(&mut dispatcher, &mut store, &mut music, input, true);
        assert_eq!(outcome, KeyOutcome::Ignored);
    }
    let typed_reset = KeyInput {
        in_text_input: true,
        ..KeyInput::with_ctrl("r")
    };
    let (outcome, asked) = press(&mut dispatcher, &mut store, &mut music, typed_reset, true);
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert!(asked.is_empty());
    assert_eq!(store.state(), &before);
    assert!(!music.playing);
}

#[test]
fn dispatch_drives_store_and_music() {
    let (mut store, _, _) = make_store(&THREE);
    let mut music = MusicState::default();
    let mut d = ShortcutDispatcher::new();

    press(&mut d, &mut store, &mut music, KeyInput::plain("g"), false);
    assert!(store.state().show_gallery);

    press(&mut d, &mut store, &mut music, KeyInput::plain("m"), false);
    assert!(!store.state().show_minimap);
    assert!(music.playing);

    press(&mut d, &mut store, &mut music, KeyInput::plain("ArrowRight"), false);
    assert_eq!(store.current_node_id(), "kawasan-2");
    press(&mut d, &mut store, &mut music, KeyInput::plain("a"), false);
    press(&mut d, &mut store, &mut music, KeyInput::plain("a"), false);
    assert_eq!(store.current_node_id(), "kawasan-3");

    press(&mut d, &mut store, &mut music, KeyInput::plain("ArrowUp"), false);
    assert!((music.volume - 0.55).abs() < 1e-6);

    let (outcome, _) = press(&mut d, &mut store, &mut music, KeyInput::plain("f"), false);
    assert_eq!(outcome, KeyOutcome::Handled);
    assert!(store.state().fullscreen);
}

#[test]
fn escape_closes_info_panel_before_touching_overlays() {
    let (mut store, _, _) = make_store(&THREE);
    let mut music = MusicState::default();
    let mut d = ShortcutDispatcher::new();

    press(&mut d, &mut store, &mut music, KeyInput::plain("i"), false);
    assert!(d.info_open());

    press(&mut d, &mut store, &mut music, KeyInput::plain("Escape"), false);
    assert!(!d.info_open());
    assert!(store.state().show_minimap);

    press(&mut d, &mut store, &mut music, KeyInput::plain("Escape"), false);
    assert!(store.state().all_overlays_hidden());

    press(&mut d, &mut store, &mut music, KeyInput::plain("Escape"), false);
    assert!(store.state().show_minimap);
}

#[test]
fn h_hides_overlays_without_touching_controls() {
    let (mut store, _, _) = make_store(&THREE);
    let mut music = MusicState::default();
    let mut d = ShortcutDispatcher::new();
    press(&mut d, &mut store, &mut music, KeyInput::plain("n"), false);
    press(&mut d, &mut store, &mut music, KeyInput::plain("h"), false);
    assert!(store.state().all_overlays_hidden());
    assert!(store.state().show_controls);
}

#[test]
fn hidden_control_bar_comes_back_from_the_keyboard() {
    let (mut store, _, _) = make_store(&THREE);
    let mut music = MusicState::default();
    let mut d = ShortcutDispatcher::new();

    press(&mut d, &mut store, &mut music, KeyInput::plain("c"), false);
    assert!(!store.state().show_controls);

    press(&mut d, &mut store, &mut music, KeyInput::plain("h"), false);
    press(&mut d, &mut store, &mut music, KeyInput::plain("h"), false);
    assert!(!store.state().show_controls);

    let (outcome, asked) = press(&mut d, &mut store, &mut music, KeyInput::plain("C"), false);
    assert_eq!(outcome, KeyOutcome::Handled);
    assert!(asked.is_empty());
    assert!(store.state().show_controls);
}

#[test]
fn reset_requires_confirmation() {
    let (mut store, _, _) = make_store(&THREE);
    let mut music = MusicState::default();
    let mut d = ShortcutDispatcher::new();
    store.set_current_node("kawasan-3");
    store.toggle_gallery();
    let before = store.state().clone();

    let (outcome, asked) = press(&mut d, &mut store, &mut music, KeyInput::with_ctrl("r"), false);
    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(asked.len(), 1);
    assert_eq!(store.state(), &before);

    let (_, asked) = press(&mut d, &mut store, &mut music, KeyInput::with_ctrl("r"), true);
    assert_eq!(asked.len(), 1);
    assert_eq!(store.state(), &NavigationState::initial("kawasan-1"));
}
