use crate::{runtime::controller::ProgressController, scene::viewport::ViewportBounds};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    Digit(u8),
    /// Steps through the post-processing modes.
    CycleEffect,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` value.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "Space" => Self::Space,
            "KeyG" => Self::CycleEffect,
            _ => code
                .strip_prefix("Digit")
                .and_then(|d| d.parse::<u8>().ok())
                .filter(|d| *d <= 9)
                .map_or(Self::Other, Self::Digit),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// The event was dispatched to the page body rather than an input control.
    pub target_is_body: bool,
}

impl KeyEvent {
    pub fn on_body(key: Key) -> Self {
        Self {
            key,
            target_is_body: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyResponse {
    pub handled: bool,
    /// The host should suppress the key's default action (page scroll for space).
    pub prevent_default: bool,
}

impl KeyResponse {
    const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };
    const HANDLED: Self = Self {
        handled: true,
        prevent_default: false,
    };
}

/// Apply a key press to the controller. Keys are ignored while the scene is off screen.
pub fn handle_key(
    controller: &mut ProgressController,
    event: KeyEvent,
    bounds: ViewportBounds,
) -> KeyResponse {
    if !bounds.is_within_y_range() {
        return KeyResponse::IGNORED;
    }
    match event.key {
        Key::Left => {
            controller.speed_down();
            KeyResponse::HANDLED
        }
        Key::Right => {
            controller.speed_up();
            KeyResponse::HANDLED
        }
        Key::Space if event.target_is_body => {
            let moving = controller.toggle_moving();
            tracing::debug!(moving, "drive toggled");
            KeyResponse {
                handled: true,
                prevent_default: true,
            }
        }
        Key::Space => KeyResponse::IGNORED,
        Key::Digit(d) => match controller.jump_to_digit(d) {
            Ok(()) => KeyResponse::HANDLED,
            Err(_) => KeyResponse::IGNORED,
        },
        Key::CycleEffect => {
            let effect = controller.cycle_effect();
            tracing::debug!(?effect, "post effect changed");
            KeyResponse::HANDLED
        }
        Key::Other => KeyResponse::IGNORED,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/input.rs"]
mod tests;
