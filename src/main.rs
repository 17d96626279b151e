use std::{fs, io::BufRead, path::PathBuf};

use clap::Parser;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use sigil::source::Source;

/// sigil is a tiny arithmetic expression language with `$`-prefixed
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to evaluate. Without one, sigil starts an interactive
    /// prompt (or evaluates each line piped to stdin).
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    init_logging();

    if let Some(path) = args.script {
        let text = fs::read_to_string(&path).unwrap_or_else(|_| {
                       eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                 path.display());
                       std::process::exit(1);
                   });

        execute(&Source::new(path.display().to_string(), text));
    } else if atty::is(atty::Stream::Stdin) {
        repl();
    } else {
        pipe();
    }
}

/// Evaluates one source, printing the value to stdout or the full
/// diagnostic report to stderr.
fn execute(source: &Source) {
    match sigil::run(source) {
        Ok(value) => println!("{value}"),
        Err(error) => eprintln!("{}", error.report(source)),
    }
}

/// The interactive prompt. Each submitted line is one program; bindings do
/// not survive between lines, only the preloaded globals do.
fn repl() {
    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::new(DefaultPromptSegment::Basic("RUNTIME".to_string()),
                                    DefaultPromptSegment::Empty);

    loop {
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                execute(&Source::new("<stdin>", line));
            },
            Ok(Signal::CtrlC | Signal::CtrlD) => break,
            Err(error) => {
                eprintln!("Failed to read input: {error}");
                break;
            },
        }
    }
}

/// Non-interactive stdin: evaluate each line as one program.
fn pipe() {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        execute(&Source::new("<stdin>", line));
    }
}

/// Routes `tracing` events to stderr, filtered by `RUST_LOG` and quiet
/// (warnings only) by default.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))
                                                  .unwrap_or_default();

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}
