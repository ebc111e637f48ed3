//! Well-known remote-control key identifiers.
//!
//! The control channel accepts any string as a key identifier and the TV
//! silently ignores ones it does not recognise, so this table is advisory:
//! it exists for CLI help output and for catching typos before a command is
//! sent.  The identifiers are the ones the physical Samsung remote produces.
//!
//! The table is not exhaustive — model-specific keys (ambient mode, art
//! mode, voice) exist and can be sent as free-form strings.

/// Power toggle.
pub const KEY_POWER: &str = "KEY_POWER";
/// Volume up.
pub const KEY_VOLUP: &str = "KEY_VOLUP";
/// Volume down.
pub const KEY_VOLDOWN: &str = "KEY_VOLDOWN";
/// Mute toggle.
pub const KEY_MUTE: &str = "KEY_MUTE";
/// Channel up.
pub const KEY_CHUP: &str = "KEY_CHUP";
/// Channel down.
pub const KEY_CHDOWN: &str = "KEY_CHDOWN";
/// Home menu.
pub const KEY_HOME: &str = "KEY_HOME";
/// On-screen menu.
pub const KEY_MENU: &str = "KEY_MENU";
/// Input source selection.
pub const KEY_SOURCE: &str = "KEY_SOURCE";
/// Programme guide.
pub const KEY_GUIDE: &str = "KEY_GUIDE";
/// Tools overlay.
pub const KEY_TOOLS: &str = "KEY_TOOLS";
/// Info overlay.
pub const KEY_INFO: &str = "KEY_INFO";
/// Navigation up.
pub const KEY_UP: &str = "KEY_UP";
/// Navigation down.
pub const KEY_DOWN: &str = "KEY_DOWN";
/// Navigation left.
pub const KEY_LEFT: &str = "KEY_LEFT";
/// Navigation right.
pub const KEY_RIGHT: &str = "KEY_RIGHT";
/// Confirm / OK.
pub const KEY_ENTER: &str = "KEY_ENTER";
/// Back.
pub const KEY_RETURN: &str = "KEY_RETURN";
/// Exit to live TV.
pub const KEY_EXIT: &str = "KEY_EXIT";
/// Digit 0.
pub const KEY_0: &str = "KEY_0";
/// Digit 1.
pub const KEY_1: &str = "KEY_1";
/// Digit 2.
pub const KEY_2: &str = "KEY_2";
/// Digit 3.
pub const KEY_3: &str = "KEY_3";
/// Digit 4.
pub const KEY_4: &str = "KEY_4";
/// Digit 5.
pub const KEY_5: &str = "KEY_5";
/// Digit 6.
pub const KEY_6: &str = "KEY_6";
/// Digit 7.
pub const KEY_7: &str = "KEY_7";
/// Digit 8.
pub const KEY_8: &str = "KEY_8";
/// Digit 9.
pub const KEY_9: &str = "KEY_9";
/// Playback: play.
pub const KEY_PLAY: &str = "KEY_PLAY";
/// Playback: pause.
pub const KEY_PAUSE: &str = "KEY_PAUSE";
/// Playback: stop.
pub const KEY_STOP: &str = "KEY_STOP";
/// Playback: rewind.
pub const KEY_REWIND: &str = "KEY_REWIND";
/// Playback: fast forward.
pub const KEY_FF: &str = "KEY_FF";

/// Every identifier in this table, for CLI listings.
pub const ALL: &[&str] = &[
    KEY_POWER, KEY_VOLUP, KEY_VOLDOWN, KEY_MUTE, KEY_CHUP, KEY_CHDOWN, KEY_HOME, KEY_MENU,
    KEY_SOURCE, KEY_GUIDE, KEY_TOOLS, KEY_INFO, KEY_UP, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_ENTER,
    KEY_RETURN, KEY_EXIT, KEY_0, KEY_1, KEY_2, KEY_3, KEY_4, KEY_5, KEY_6, KEY_7, KEY_8, KEY_9,
    KEY_PLAY, KEY_PAUSE, KEY_STOP, KEY_REWIND, KEY_FF,
];

/// Returns `true` if `key` is in the well-known table.
///
/// A `false` result does not mean the key is invalid — only that it is not
/// one of the standard remote keys.
pub fn is_well_known(key: &str) -> bool {
    ALL.contains(&key)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
