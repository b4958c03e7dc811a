//! Keyboard shortcuts mapped onto sampler commands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use eframe::egui;

use crate::command::Command;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlShift => "Ctrl+Shift",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            ' ' => "Space".to_string(),
            other => other.to_string(),
        };
        if self.modifier == Modifier::None {
            write!(f, "{}", key)
        } else {
            write!(f, "{}+{}", self.modifier, key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty hotkey".to_string());
        }
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let (last, mods) = match parts.split_last() {
            Some(split) => split,
            None => return Err("invalid hotkey".to_string()),
        };
        let key = if last.eq_ignore_ascii_case("space") {
            ' '
        } else {
            let mut chars = last.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_ascii_uppercase(),
                (None, _) => return Err("no key char".to_string()),
                (Some(_), Some(_)) => return Err(format!("unknown key '{}'", last)),
            }
        };
        let mut lowers: Vec<String> = mods.iter().map(|m| m.to_lowercase()).collect();
        lowers.sort();
        let modifier = match lowers.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            [] => Modifier::None,
            ["ctrl"] | ["control"] => Modifier::Ctrl,
            ["alt"] => Modifier::Alt,
            ["shift"] => Modifier::Shift,
            ["ctrl", "shift"] => Modifier::CtrlShift,
            other => return Err(format!("unknown modifier combo '{:?}'", other)),
        };
        Ok(Hotkey { modifier, key })
    }
}

/// Shortcut per command. `None` disables a binding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub pause: Option<Hotkey>,
    pub reset: Option<Hotkey>,
    pub export_tabular: Option<Hotkey>,
    pub export_vector: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            pause: Some(Hotkey::new(Modifier::None, ' ')),
            reset: Some(Hotkey::new(Modifier::None, 'R')),
            export_tabular: Some(Hotkey::new(Modifier::Ctrl, 'S')),
            export_vector: Some(Hotkey::new(Modifier::Ctrl, 'E')),
        }
    }
}

impl Hotkeys {
    /// First command whose shortcut was pressed this frame.
    pub fn command_for(&self, input: &egui::InputState) -> Option<Command> {
        if is_hotkey_pressed(self.pause.as_ref(), input) {
            Some(Command::TogglePause)
        } else if is_hotkey_pressed(self.reset.as_ref(), input) {
            Some(Command::Reset)
        } else if is_hotkey_pressed(self.export_tabular.as_ref(), input) {
            Some(Command::ExportTabular)
        } else if is_hotkey_pressed(self.export_vector.as_ref(), input) {
            Some(Command::ExportVector)
        } else {
            None
        }
    }
}

/// `"Save [Ctrl+S]"`, or just the description when unbound.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

fn key_from_char(c: char) -> Option<egui::Key> {
    match c.to_ascii_uppercase() {
        ' ' => Some(egui::Key::Space),
        other => egui::Key::from_name(&other.to_string()),
    }
}

fn modifiers_match(mods: &egui::Modifiers, modifier: Modifier) -> bool {
    let ctrl = mods.ctrl || mods.command;
    let alt = mods.alt;
    let shift = mods.shift;
    match modifier {
        Modifier::None => !ctrl && !alt && !shift,
        Modifier::Ctrl => ctrl && !alt && !shift,
        Modifier::Alt => alt && !ctrl,
        Modifier::Shift => shift && !ctrl && !alt,
        Modifier::CtrlShift => ctrl && shift && !alt,
    }
}

fn is_hotkey_pressed(hk: Option<&Hotkey>, input: &egui::InputState) -> bool {
    let Some(hk) = hk else { return false };
    let Some(key) = key_from_char(hk.key) else {
        return false;
    };
    if !modifiers_match(&input.modifiers, hk.modifier) {
        return false;
    }
    input.key_pressed(key)
}
