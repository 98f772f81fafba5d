//! Command-line option scanning for example programs
//!
//! Flags are a fixed set of single characters scanned left to right. The
//! scan stops at the first token that does not start with `-`, leaving it
//! and everything after it for the caller as positional arguments. An
//! unrecognized `-x` flag is reported on stderr and sets the help flag,
//! but scanning continues; `-h` returns immediately instead.

/// Tri-state for options the backend may also leave unspecified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    /// No preference, backend decides
    #[default]
    DontCare,
    /// Explicitly disabled
    Off,
    /// Explicitly enabled
    On,
}

/// Options shared by all example programs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// Antialiasing sample count, 0 disables
    pub samples: u32,
    /// Double-buffered drawing
    pub double_buffer: Toggle,
    /// Vertical sync
    pub vsync: Toggle,
    /// Continuously animate and draw
    pub continuous: bool,
    /// Help requested, or an unknown flag was seen
    pub help: bool,
    /// Ignore key repeat events
    pub ignore_key_repeat: bool,
    /// Resizable window
    pub resizable: bool,
    /// Verbose event output
    pub verbose: bool,
    /// Platform error checking
    pub error_checking: bool,
}

/// Scan `args` (program name first) for flags
///
/// Returns the populated options and the index of the first unconsumed
/// token, so the caller can pick up positional arguments from there. On
/// `-h` the scan returns at once, consuming only the `-h` token itself.
pub fn parse_args(args: &[String]) -> (Options, usize) {
    let mut opts = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-a" => opts.samples = 4,
            "-c" => opts.continuous = true,
            "-d" => opts.double_buffer = Toggle::On,
            "-e" => opts.error_checking = true,
            "-f" => opts.vsync = Toggle::Off,
            "-h" => {
                opts.help = true;
                return (opts, i + 1);
            }
            "-i" => opts.ignore_key_repeat = true,
            "-r" => opts.resizable = true,
            "-s" => opts.vsync = Toggle::On,
            "-v" => opts.verbose = true,
            arg if !arg.starts_with('-') => break,
            arg => {
                opts.help = true;
                eprintln!("error: Unknown option: {}", arg);
            }
        }
        i += 1;
    }

    (opts, i)
}

/// Print usage for an example program to stdout
///
/// `pos_help` describes the program's positional arguments, e.g. `"[FILE]"`.
pub fn print_usage(prog: &str, pos_help: &str) {
    println!("Usage: {} [OPTION]... {}", prog, pos_help);
    println!();
    println!("  -a  Enable anti-aliasing");
    println!("  -c  Continuously animate and draw");
    println!("  -d  Enable double-buffering");
    println!("  -e  Enable platform error-checking");
    println!("  -f  Fast drawing, explicitly disable vertical sync");
    println!("  -h  Display this help");
    println!("  -i  Ignore key repeat");
    println!("  -v  Print verbose output");
    println!("  -r  Resizable window");
    println!("  -s  Explicitly enable vertical sync");
}
