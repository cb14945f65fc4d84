// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard handling for the search box, minus the DOM.
//!
//! The host reports key presses and the current number of result links; the
//! state machine says what to focus, open, show or hide. Focus is either the
//! input or a link index in `0..links`.

/// Where keyboard focus is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Link(usize),
}

/// The keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    /// `/`, which toggles the box from anywhere on the page.
    Slash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

/// What the host should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Show the box, clear the input and focus it.
    Show,
    /// Hide the box and drop focus.
    Hide,
    /// Follow result link `n`, then hide the box.
    Open(usize),
    /// Move focus.
    Focus(Focus),
    Ignore,
}

/// Visibility and focus of the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    visible: bool,
    focus: Focus,
    links: usize,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn links(&self) -> usize {
        self.links
    }

    /// New results were rendered. Focus on a link that no longer exists
    /// goes back to the input.
    pub fn set_links(&mut self, links: usize) {
        self.links = links;
        if matches!(self.focus, Focus::Link(i) if i >= links) {
            self.focus = Focus::Input;
        }
    }

    /// The user clicked outside the box.
    pub fn dismiss(&mut self) -> Action {
        self.hide()
    }

    pub fn handle(&mut self, press: KeyPress) -> Action {
        match press.key {
            Key::Slash => {
                if self.visible {
                    self.hide()
                } else {
                    self.show()
                }
            }
            Key::Escape => self.hide(),
            Key::Enter => self.enter(),
            Key::Down | Key::Up => self.arrow(press),
        }
    }

    fn show(&mut self) -> Action {
        self.visible = true;
        self.focus = Focus::Input;
        Action::Show
    }

    fn hide(&mut self) -> Action {
        self.visible = false;
        self.focus = Focus::Input;
        Action::Hide
    }

    fn enter(&mut self) -> Action {
        if !self.visible {
            return Action::Ignore;
        }
        let target = match self.focus {
            Focus::Input if self.links > 0 => Some(0),
            Focus::Input => None,
            Focus::Link(i) => Some(i),
        };
        self.hide();
        target.map_or(Action::Hide, Action::Open)
    }

    fn arrow(&mut self, press: KeyPress) -> Action {
        if !self.visible || self.links == 0 {
            return Action::Ignore;
        }
        let last = self.links - 1;

        let next = match (press.key, press.ctrl, self.focus) {
            (Key::Down, true, _) => Focus::Link(last),
            // The first result is what Enter opens, so Down skips to the second
            (Key::Down, false, Focus::Input) => Focus::Link(1.min(last)),
            (Key::Down, false, Focus::Link(i)) => Focus::Link((i + 1).min(last)),
            (Key::Up, true, _) => Focus::Input,
            (Key::Up, false, Focus::Input | Focus::Link(0)) => Focus::Input,
            (Key::Up, false, Focus::Link(i)) => Focus::Link(i - 1),
            _ => return Action::Ignore,
        };

        self.focus = next;
        Action::Focus(next)
    }
}
