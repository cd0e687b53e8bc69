use raylib::prelude::*;

use cwe_slideshow::layout::{PageLayout, Point, to_canvas};
use cwe_slideshow::{Action, App, Screen, Side, SlideAction};

const DIGITS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

// Keys that work on every screen.
const GLOBAL_KEYS: [(KeyboardKey, Action); 5] = [
    (KeyboardKey::KEY_Q, Action::Quit),
    (KeyboardKey::KEY_PAGE_DOWN, Action::NextPage),
    (KeyboardKey::KEY_PAGE_UP, Action::PreviousPage),
    (KeyboardKey::KEY_R, Action::RandomPage),
    (KeyboardKey::KEY_ESCAPE, Action::Home),
];

const INDEX_KEYS: [(KeyboardKey, Action); 3] = [
    (KeyboardKey::KEY_UP, Action::SelectUp),
    (KeyboardKey::KEY_DOWN, Action::SelectDown),
    (KeyboardKey::KEY_ENTER, Action::Open),
];

const PAGE_KEYS: [(KeyboardKey, Action); 5] = [
    (KeyboardKey::KEY_LEFT, Action::Slide(SlideAction::Previous(Side::Good))),
    (KeyboardKey::KEY_RIGHT, Action::Slide(SlideAction::Next(Side::Good))),
    (KeyboardKey::KEY_A, Action::Slide(SlideAction::Previous(Side::Bad))),
    (KeyboardKey::KEY_D, Action::Slide(SlideAction::Next(Side::Bad))),
    (KeyboardKey::KEY_BACKSPACE, Action::Home),
];

/// Collect the actions triggered by this frame's keyboard and mouse input.
pub fn poll(rl: &RaylibHandle, app: &App, layout: &PageLayout) -> Vec<Action> {
    let mut actions: Vec<Action> = GLOBAL_KEYS
        .iter()
        .filter(|(key, _)| rl.is_key_pressed(*key))
        .map(|(_, action)| *action)
        .collect();

    match app.screen() {
        Screen::Index { .. } => {
            actions.extend(
                INDEX_KEYS
                    .iter()
                    .filter(|(key, _)| rl.is_key_pressed(*key))
                    .map(|(_, action)| *action),
            );
        }
        Screen::Page(view) => {
            actions.extend(
                PAGE_KEYS
                    .iter()
                    .filter(|(key, _)| rl.is_key_pressed(*key))
                    .map(|(_, action)| *action),
            );

            let shift = rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT)
                || rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT);
            let side = if shift { Side::Bad } else { Side::Good };
            for (i, key) in DIGITS.iter().enumerate() {
                if rl.is_key_pressed(*key) {
                    actions.push(Action::Slide(SlideAction::Jump(side, i)));
                }
            }

            if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                let mouse = rl.get_mouse_position();
                let p = to_canvas(
                    Point::new(mouse.x, mouse.y),
                    rl.get_screen_width() as f32,
                    rl.get_screen_height() as f32,
                );
                let good = view.slideshow(Side::Good).len();
                let bad = view.slideshow(Side::Bad).len();
                if let Some(slide) = layout.hit_test(p, good, bad) {
                    actions.push(Action::Slide(slide));
                }
            }
        }
    }
    actions
}
