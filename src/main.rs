//! MoodMirror CLI
//!
//! Usage:
//!   moodmirror --frame '{"expressions":{"happy":0.8}}'   # Single evaluation
//!   moodmirror --replay session.jsonl                    # Replay a recording
//!   moodmirror                                           # Read JSONL frames from stdin
//!   moodmirror --replay session.jsonl --json             # JSON output per cycle

use std::io::{self, BufReader};

use clap::Parser;
use colored::Colorize;

use moodmirror::core::{
    parse_frame_line, run_mirror, DisplaySink, Frame, MirrorEngine, ReplaySource, SystemClock,
};
use moodmirror::types::{CycleOutput, GateVerdict};
use moodmirror::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "moodmirror",
    version = VERSION,
    about = "Turn facial expression readings into a stable emoji display",
    long_about = "MoodMirror consumes per-frame expression probability records\n\
                  (as produced by a face inference stack) and decides which\n\
                  emoji to display, with neutral override, raised-brow confused\n\
                  detection, compound blends, glyph cycling and flicker gating.\n\n\
                  Frames are JSON objects, one per line; a literal null means\n\
                  no face was found that frame."
)]
struct Args {
    /// Evaluate a single detection record and exit
    #[arg(short, long)]
    frame: Option<String>,

    /// Replay a JSONL recording of detection frames
    #[arg(short, long)]
    replay: Option<String>,

    /// Output every cycle as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show the per-component breakdown for each cycle
    #[arg(long)]
    verbose: bool,
}

/// Terminal display sink: prints the glyph whenever it changes
struct TerminalSink {
    quiet: bool,
}

impl DisplaySink for TerminalSink {
    fn set_glyph(&mut self, glyph: &'static str) {
        if !self.quiet {
            println!("{}  {}", glyph, "on display".dimmed());
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let result = if let Some(ref record) = args.frame {
        run_single(record, &args)
    } else if let Some(ref path) = args.replay {
        match ReplaySource::open(path) {
            Ok(mut source) => run_loop(&mut source, &args).await,
            Err(e) => Err(e),
        }
    } else {
        let mut source = ReplaySource::new(BufReader::new(io::stdin()));
        run_loop(&mut source, &args).await
    };

    if let Err(e) = result {
        eprintln!("moodmirror: {}", e);
        std::process::exit(1);
    }
}

/// Evaluate one record, print the decision, exit
fn run_single(record: &str, args: &Args) -> io::Result<()> {
    let frame = parse_frame_line(record.trim())?;
    let mut engine = MirrorEngine::new();

    match frame {
        Frame::NoFace => {
            println!("no face in frame; display stays {}", engine.current_glyph());
        }
        Frame::Face(detection) => {
            let output = engine.cycle(&detection, 0);
            print_cycle(&output, args);
        }
    }
    Ok(())
}

/// Run the detect loop over a frame source until it is exhausted
async fn run_loop<S>(source: &mut S, args: &Args) -> io::Result<()>
where
    S: moodmirror::core::ExpressionSource,
{
    let mut engine = MirrorEngine::new();
    let mut sink = TerminalSink { quiet: args.json };
    let clock = SystemClock::new();

    let detail = args.json || args.verbose;
    run_mirror(source, &mut sink, &clock, &mut engine, |output| {
        if detail {
            print_cycle(output, args);
        }
    })
    .await?;

    if !args.json {
        println!(
            "{} cycles, final display {}",
            engine.cycle_count(),
            engine.current_glyph()
        );
    }
    Ok(())
}

/// Print one cycle in the selected format
fn print_cycle(output: &CycleOutput, args: &Args) {
    if args.json {
        println!("{}", serde_json::to_string(output).unwrap());
    } else if args.verbose {
        print_verbose(output);
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

/// Per-component breakdown for one cycle
fn print_verbose(output: &CycleOutput) {
    println!("{}", output.to_terminal_string());
    println!(
        "  primary    {} ({:.3})",
        output.primary.to_string().bold(),
        output.confidence
    );
    println!(
        "  secondary  {} ({:.3})",
        output.secondary, output.secondary_confidence
    );
    if output.overrode_from_neutral {
        println!("  {}", "neutral override fired (bar lowered to 0.20)".yellow());
    }
    if output.show_confused {
        println!("  {}", "raised brow: confused palette forced".yellow());
    }
    match output.verdict {
        GateVerdict::Committed => {
            println!("  {} {}", "committed".green(), output.glyph)
        }
        GateVerdict::LowConfidence => {
            println!("  {}", "dropped: confidence below bar".red())
        }
        GateVerdict::Held => {
            println!("  {}", "held: same glyph inside hold window".yellow())
        }
    }
}
