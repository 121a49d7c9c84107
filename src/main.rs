//! fzjump CLI application entry point
//!
//! Runs the fuzzy-jump commands against the invoking terminal. The chosen
//! path is printed on stdout so shell functions can act on it; editors
//! opened by `grep` take over the terminal until they exit.
//!
//! # Usage
//!
//! ```bash
//! # Pick a file or directory (default command)
//! fzjump
//! fzjump pick
//!
//! # Jump to a directory
//! cd "$(fzjump dirs)"
//!
//! # Search contents and open the hit in $VISUAL/$EDITOR
//! fzjump grep 'fn main'
//!
//! # Show the effective configuration
//! fzjump config show
//!
//! # Shell completions
//! fzjump completions zsh > _fzjump
//! ```
//!
//! # Configuration
//!
//! Read from the user's config directory (`~/.config/fzjump/config.toml`
//! on Linux); defaults apply when the file is absent.

use std::io::{self, Write};
use std::process::ExitCode;

use fzjump::{
    FzjumpError,
    cli::{Cli, Commands, ConfigCommands, generate_completions},
    commands::{self, CommandContext, Outcome},
    config::FzjumpConfig,
    logging::{self, Verbosity},
    ui::{OutputWriter, StderrWriter, TerminalHost},
};

type Result<T> = std::result::Result<T, FzjumpError>;

/// Handle `config` subcommands
fn handle_config_command(config: &FzjumpConfig, command: &ConfigCommands) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match command {
        ConfigCommands::Show => write!(stdout, "{}", config.to_toml()?)?,
        ConfigCommands::Path => writeln!(stdout, "{}", FzjumpConfig::config_path()?.display())?,
    }
    stdout.flush()?;
    Ok(())
}

/// Map a command outcome to the process exit status
fn exit_status(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::ToolMissing(_) => ExitCode::FAILURE,
        Outcome::ChangedDirectory(_)
        | Outcome::SelectedFile(_)
        | Outcome::OpenedEditor(_)
        | Outcome::NoSelection => ExitCode::SUCCESS,
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let command = cli.get_command();

    if let Commands::Completions { shell } = &command {
        generate_completions(*shell, &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let config = FzjumpConfig::load()?;
    if let Commands::Config { command } = &command {
        handle_config_command(&config, command)?;
        return Ok(ExitCode::SUCCESS);
    }

    let ctx = CommandContext::from(&config);
    let writer: Box<dyn OutputWriter> = if cli.quiet {
        Box::new(StderrWriter::quiet())
    } else {
        Box::new(StderrWriter::new())
    };
    let host = TerminalHost::with_output(writer);

    let outcome = match &command {
        Commands::Pick => commands::pick(&host, &ctx),
        Commands::Dirs => commands::pick_dir(&host, &ctx),
        Commands::Grep { .. } => {
            let pattern = command.grep_pattern().unwrap_or_default();
            commands::grep(&host, &ctx, &pattern)
        }
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!(),
    };
    tracing::debug!(?outcome, "command finished");

    Ok(exit_status(&outcome))
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            StderrWriter::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
