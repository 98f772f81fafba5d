use anyhow::Result;
use log::{debug, info};

use winspect::event::{Event, Mods};
use winspect::{describe_event, options, print_usage};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (opts, next) = options::parse_args(&args);

    if opts.help {
        print_usage(&args[0], "[PREFIX]");
        return Ok(());
    }

    // Initialize logging
    let log_level = if opts.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Starting winspect v{}", env!("CARGO_PKG_VERSION"));
    debug!("Options: {:#?}", opts);

    let prefix = args.get(next).map(String::as_str).unwrap_or("");
    if args.len() > next + 1 {
        debug!("Ignoring extra positional arguments: {:?}", &args[next + 1..]);
    }

    // Replay a scripted event sequence so the output can be eyeballed;
    // housekeeping events only show up with -v
    for event in sample_events() {
        describe_event(&event, prefix, opts.verbose)?;
    }

    Ok(())
}

/// A fixed sequence covering every event kind
fn sample_events() -> Vec<Event> {
    vec![
        Event::Configure {
            x: 100.0,
            y: 100.0,
            width: 640.0,
            height: 480.0,
        },
        Event::Expose {
            x: 0.0,
            y: 0.0,
            width: 640.0,
            height: 480.0,
        },
        Event::FocusIn { grab: false },
        Event::KeyPress { keycode: 38, key: 0x61 },
        Event::Text {
            keycode: 38,
            character: 0x61,
            text: "a".to_string(),
        },
        Event::KeyRelease { keycode: 38, key: 0x61 },
        Event::PointerEnter { x: 320.0, y: 240.0 },
        Event::Motion { x: 321.5, y: 240.5 },
        Event::ButtonPress {
            button: 1,
            x: 321.5,
            y: 240.5,
            mods: Mods::empty(),
        },
        Event::ButtonRelease {
            button: 1,
            x: 321.5,
            y: 240.5,
            mods: Mods::empty(),
        },
        Event::Scroll {
            dx: 0.0,
            dy: 1.0,
            x: 321.5,
            y: 240.5,
            mods: Mods::SHIFT | Mods::CTRL,
        },
        Event::PointerLeave { x: 640.0, y: 240.5 },
        Event::FocusOut { grab: false },
        Event::Unknown { kind: 42 },
        Event::Close,
    ]
}
