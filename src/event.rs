//! Event vocabulary shared by the describer and example programs

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held while an input event fired
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Mods: u32 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const SUPER = 0b1000;
    }
}

/// One window event, one variant per kind
///
/// Coordinates are window-relative pixels. `keycode` is the raw hardware
/// code, `key`/`character` are Unicode codepoints.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Placeholder event, never printed
    Nothing,
    /// Key press
    KeyPress { keycode: u32, key: u32 },
    /// Key release
    KeyRelease { keycode: u32, key: u32 },
    /// Text entry, with the UTF-8 form of the character
    Text {
        keycode: u32,
        character: u32,
        text: String,
    },
    /// Mouse button press
    ButtonPress {
        button: u32,
        x: f64,
        y: f64,
        mods: Mods,
    },
    /// Mouse button release
    ButtonRelease {
        button: u32,
        x: f64,
        y: f64,
        mods: Mods,
    },
    /// Scroll wheel or touchpad scroll
    Scroll {
        dx: f64,
        dy: f64,
        x: f64,
        y: f64,
        mods: Mods,
    },
    /// Pointer entered the window
    PointerEnter { x: f64, y: f64 },
    /// Pointer left the window
    PointerLeave { x: f64, y: f64 },
    /// Window gained keyboard focus
    FocusIn { grab: bool },
    /// Window lost keyboard focus
    FocusOut { grab: bool },
    /// Window moved or resized
    Configure {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Region needs redrawing
    Expose {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Window close requested
    Close,
    /// Pointer motion
    Motion { x: f64, y: f64 },
    /// Backend event we have no variant for, with its numeric type tag
    Unknown { kind: u32 },
}

impl Event {
    /// Whether this event carries user input (always printed by the
    /// describer, regardless of verbosity)
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Event::KeyPress { .. }
                | Event::KeyRelease { .. }
                | Event::Text { .. }
                | Event::ButtonPress { .. }
                | Event::ButtonRelease { .. }
                | Event::Scroll { .. }
                | Event::PointerEnter { .. }
                | Event::PointerLeave { .. }
                | Event::FocusIn { .. }
                | Event::FocusOut { .. }
        )
    }
}
