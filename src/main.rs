//! Gamebar - game shortcut manager
//!
//! Shortcut paths given on the command line are imported, then commands
//! are read from stdin one per line. Type `help` for the list.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{error, info, warn};

use gamebar::adapters::controllers::{CommandError, ConsoleCommand, ShellEvent, HELP};
use gamebar::adapters::views::ConsoleView;
use gamebar::infrastructure::CompositionRoot;
use gamebar::shared::{logging, Config};

fn main() {
    // Logging needs the config, so config errors are reported after init
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Some(path) = logging::init(&config.log) {
        eprintln!("Logging to {}", path.display());
    }
    info!("main() starting");
    if let Some(e) = config_error {
        warn!("Failed to load config: {}, using defaults", e);
        eprintln!("warning: {}, using defaults", e);
    }

    let mut root = CompositionRoot::with_config(config);
    let mut view = ConsoleView::new(io::stdout());

    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if !args.is_empty() {
        root.controller.dispatch(ShellEvent::Import(args), &mut view);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
            None => break,
        };

        match ConsoleCommand::parse(&line) {
            Ok(ConsoleCommand::Event(event)) => root.controller.dispatch(event, &mut view),
            Ok(ConsoleCommand::List) => view.print_list(),
            Ok(ConsoleCommand::Help) => view.line(HELP),
            Ok(ConsoleCommand::Quit) => break,
            Err(CommandError::Empty) => {}
            Err(e) => view.line(&format!("error: {}", e)),
        }
    }

    info!("Exiting with {} shortcut(s)", root.controller.registry().len());
}
