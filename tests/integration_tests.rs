use anyhow::Result;
use winspect::event::{Event, Mods};
use winspect::options::{parse_args, Options, Toggle};
use winspect::write_event;

fn argv(tokens: &[&str]) -> Vec<String> {
    std::iter::once("example")
        .chain(tokens.iter().copied())
        .map(String::from)
        .collect()
}

fn describe_to_string(event: &Event, prefix: &str, verbose: bool) -> Result<String> {
    let mut buf = Vec::new();
    write_event(&mut buf, event, prefix, verbose)?;
    Ok(String::from_utf8(buf)?)
}

#[test]
fn test_integration_full_flag_set() -> Result<()> {
    let args = argv(&["-a", "-c", "-d", "-e", "-f", "-i", "-r", "-v"]);
    let (opts, next) = parse_args(&args);

    assert_eq!(opts.samples, 4);
    assert!(opts.continuous);
    assert_eq!(opts.double_buffer, Toggle::On);
    assert!(opts.error_checking);
    assert_eq!(opts.vsync, Toggle::Off);
    assert!(opts.ignore_key_repeat);
    assert!(opts.resizable);
    assert!(opts.verbose);
    assert!(!opts.help);
    assert_eq!(next, args.len());

    Ok(())
}

#[test]
fn test_integration_flags_feed_describer_verbosity() -> Result<()> {
    // The verbose flag from the parser is what gates housekeeping output
    let (opts, _) = parse_args(&argv(&["-v"]));
    let configure = Event::Configure {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 600.0,
    };

    let shown = describe_to_string(&configure, "", opts.verbose)?;
    assert_eq!(shown, "Configure    0.0    0.0  800.0  600.0\n");

    let (opts, _) = parse_args(&argv(&[]));
    let hidden = describe_to_string(&configure, "", opts.verbose)?;
    assert_eq!(hidden, "");

    Ok(())
}

#[test]
fn test_integration_positional_arguments_survive() -> Result<()> {
    let args = argv(&["-c", "-v", "scene.obj", "extra"]);
    let (opts, next) = parse_args(&args);

    assert!(opts.continuous && opts.verbose);
    assert_eq!(&args[next..], ["scene.obj", "extra"]);

    Ok(())
}

#[test]
fn test_integration_help_short_circuits() -> Result<()> {
    let args = argv(&["-h", "scene.obj"]);
    let (opts, next) = parse_args(&args);

    assert!(opts.help);
    assert_eq!(opts, Options { help: true, ..Default::default() });
    assert_eq!(next, 2);

    Ok(())
}

#[test]
fn test_integration_unknown_flag_keeps_scanning() -> Result<()> {
    let (opts, next) = parse_args(&argv(&["-z", "-r", "-q", "-s"]));

    assert!(opts.help);
    assert!(opts.resizable);
    assert_eq!(opts.vsync, Toggle::On);
    assert_eq!(next, 5);

    Ok(())
}

#[test]
fn test_integration_event_stream_output() -> Result<()> {
    // A short interaction, printed quietly: only input events appear
    let events = [
        Event::Configure {
            x: 0.0,
            y: 0.0,
            width: 640.0,
            height: 480.0,
        },
        Event::FocusIn { grab: false },
        Event::KeyPress { keycode: 24, key: 0x71 },
        Event::KeyRelease { keycode: 24, key: 0x71 },
        Event::Motion { x: 10.0, y: 10.0 },
        Event::Close,
    ];

    let mut buf = Vec::new();
    let mut total = 0;
    for event in &events {
        total += write_event(&mut buf, event, "", false)?;
    }

    let out = String::from_utf8(buf)?;
    assert_eq!(
        out,
        "Focus in\n\
         Key press   code  24 key  U+0071\n\
         Key release code  24 key  U+0071\n"
    );
    assert_eq!(total, out.len());

    Ok(())
}

#[test]
fn test_integration_verbose_event_stream_output() -> Result<()> {
    let events = [
        Event::Nothing,
        Event::Expose {
            x: 0.0,
            y: 0.0,
            width: 640.0,
            height: 480.0,
        },
        Event::ButtonPress {
            button: 2,
            x: 12.0,
            y: 34.0,
            mods: Mods::SUPER,
        },
        Event::Unknown { kind: 7 },
        Event::Close,
    ];

    let mut buf = Vec::new();
    for event in &events {
        write_event(&mut buf, event, "ex: ", true)?;
    }

    let out = String::from_utf8(buf)?;
    assert_eq!(
        out,
        "ex: Expose       0.0    0.0  640.0  480.0\n\
         ex: Mouse 2 down at   12.0   34.0 Modifiers: Super\n\
         ex: Unknown event type 7\n\
         ex: Close\n"
    );

    Ok(())
}

#[test]
fn test_integration_column_alignment() -> Result<()> {
    // Coordinates of different magnitudes land in the same columns
    let near = describe_to_string(&Event::Motion { x: 1.0, y: 2.0 }, "", true)?;
    let far = describe_to_string(&Event::Motion { x: 1000.5, y: 999.9 }, "", true)?;

    assert_eq!(near, "Mouse motion at    1.0    2.0\n");
    assert_eq!(far, "Mouse motion at 1000.5  999.9\n");
    assert_eq!(near.len(), far.len());

    Ok(())
}
