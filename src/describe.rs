//! Diagnostic event printing
//!
//! Each event becomes at most one line on the sink, column-aligned so a
//! stream of events stays readable. Input events are always printed; window
//! housekeeping (configure, expose, close, motion) and unrecognized events
//! only appear when verbose output is requested.

use std::io::{self, Write};

use crate::event::{Event, Mods};

/// Names of the held modifier keys, in fixed order
///
/// Absent modifiers contribute nothing, so shift+ctrl renders as
/// `Modifiers: Shift Ctrl`.
fn mods_fragment(mods: Mods) -> String {
    format!(
        "Modifiers:{}{}{}{}",
        if mods.contains(Mods::SHIFT) { " Shift" } else { "" },
        if mods.contains(Mods::CTRL) { " Ctrl" } else { "" },
        if mods.contains(Mods::ALT) { " Alt" } else { "" },
        if mods.contains(Mods::SUPER) { " Super" } else { "" },
    )
}

/// Render the description line, or None when the event is suppressed
fn render(event: &Event, prefix: &str, verbose: bool) -> Option<String> {
    let line = match event {
        Event::Nothing => return None,
        Event::KeyPress { keycode, key } => {
            format!("{}Key press   code {:3} key  U+{:04X}\n", prefix, keycode, key)
        }
        Event::KeyRelease { keycode, key } => {
            format!("{}Key release code {:3} key  U+{:04X}\n", prefix, keycode, key)
        }
        Event::Text { keycode, character, text } => {
            format!(
                "{}Text entry  code {:3} char U+{:04X} ({})\n",
                prefix, keycode, character, text
            )
        }
        Event::ButtonPress { button, x, y, mods }
        | Event::ButtonRelease { button, x, y, mods } => {
            let state = if matches!(event, Event::ButtonPress { .. }) {
                "down"
            } else {
                "up  "
            };
            format!(
                "{}Mouse {} {} at {:6.1} {:6.1} {}\n",
                prefix,
                button,
                state,
                x,
                y,
                mods_fragment(*mods)
            )
        }
        Event::Scroll { dx, dy, x, y, mods } => {
            format!(
                "{}Scroll {:5.1} {:5.1} at {:6.1} {:6.1} {}\n",
                prefix,
                dx,
                dy,
                x,
                y,
                mods_fragment(*mods)
            )
        }
        Event::PointerEnter { x, y } => {
            format!("{}Mouse enter  at {:6.1} {:6.1}\n", prefix, x, y)
        }
        Event::PointerLeave { x, y } => {
            format!("{}Mouse leave  at {:6.1} {:6.1}\n", prefix, x, y)
        }
        Event::FocusIn { grab } => {
            format!("{}Focus in{}\n", prefix, if *grab { " (grab)" } else { "" })
        }
        Event::FocusOut { grab } => {
            format!("{}Focus out{}\n", prefix, if *grab { " (ungrab)" } else { "" })
        }

        // Housekeeping events, only shown when verbose
        Event::Configure { x, y, width, height } if verbose => {
            format!(
                "{}Configure {:6.1} {:6.1} {:6.1} {:6.1}\n",
                prefix, x, y, width, height
            )
        }
        Event::Expose { x, y, width, height } if verbose => {
            format!(
                "{}Expose    {:6.1} {:6.1} {:6.1} {:6.1}\n",
                prefix, x, y, width, height
            )
        }
        Event::Close if verbose => format!("{}Close\n", prefix),
        Event::Motion { x, y } if verbose => {
            format!("{}Mouse motion at {:6.1} {:6.1}\n", prefix, x, y)
        }
        Event::Unknown { kind } if verbose => {
            format!("{}Unknown event type {}\n", prefix, kind)
        }
        _ => return None,
    };

    Some(line)
}

/// Write a one-line description of `event` to `out`
///
/// Returns the number of bytes written, 0 when the event is suppressed.
/// Write failures propagate from the sink.
pub fn write_event<W: Write>(
    out: &mut W,
    event: &Event,
    prefix: &str,
    verbose: bool,
) -> io::Result<usize> {
    match render(event, prefix, verbose) {
        Some(line) => {
            out.write_all(line.as_bytes())?;
            Ok(line.len())
        }
        None => Ok(0),
    }
}

/// Describe `event` on stderr, where all diagnostics go
pub fn describe_event(event: &Event, prefix: &str, verbose: bool) -> io::Result<usize> {
    write_event(&mut io::stderr().lock(), event, prefix, verbose)
}
