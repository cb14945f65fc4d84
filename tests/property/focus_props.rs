//! Keyboard focus never points past the rendered links.

use blockfind::shell::{Focus, Key, KeyPress};
use blockfind::FocusState;
use proptest::prelude::*;

fn press_strategy() -> impl Strategy<Value = KeyPress> {
    (
        prop::sample::select(vec![Key::Up, Key::Down, Key::Enter, Key::Escape, Key::Slash]),
        any::<bool>(),
    )
        .prop_map(|(key, ctrl)| KeyPress { key, ctrl })
}

#[derive(Debug, Clone)]
enum Event {
    Press(KeyPress),
    Links(usize),
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => press_strategy().prop_map(Event::Press),
        1 => (0usize..6).prop_map(Event::Links),
    ]
}

proptest! {
    #[test]
    fn prop_focus_stays_in_bounds(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut state = FocusState::new();
        for event in events {
            match event {
                Event::Press(press) => {
                    state.handle(press);
                }
                Event::Links(n) => state.set_links(n),
            }
            if let Focus::Link(i) = state.focus() {
                prop_assert!(i < state.links());
                prop_assert!(state.is_visible());
            }
        }
    }

    #[test]
    fn prop_arrows_without_links_do_nothing(presses in prop::collection::vec(press_strategy(), 0..20)) {
        let mut state = FocusState::new();
        state.handle(KeyPress::plain(Key::Slash));
        for press in presses.into_iter().filter(|p| matches!(p.key, Key::Up | Key::Down)) {
            state.handle(press);
            prop_assert_eq!(state.focus(), Focus::Input);
        }
    }
}
