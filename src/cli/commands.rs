//! Command dispatch: resolves table paths, opens the input streams and hands
//! already-open readers to the library core.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::errors::TreeError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::FromRoot {
            company_id,
            relations,
            ownership,
        }) => render(
            company_id,
            relations.as_deref(),
            ownership.as_deref(),
            Mode::FromRoot,
        ),
        Some(Commands::Expand {
            company_id,
            relations,
            ownership,
        }) => render(
            company_id,
            relations.as_deref(),
            ownership.as_deref(),
            Mode::Expand,
        ),
        Some(Commands::Config { command }) => config_command(command),
        Some(Commands::Completion { shell }) => {
            completions(*shell);
            Ok(())
        }
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    FromRoot,
    Expand,
}

#[instrument(level = "debug")]
fn render(
    company_id: &str,
    relations: Option<&Path>,
    ownership: Option<&Path>,
    mode: Mode,
) -> CliResult<()> {
    let settings = Settings::load()?;
    let relations_path = resolve(relations, settings.relations_path());
    let ownership_path = resolve(ownership, settings.ownership_path());
    debug!(
        "relations: {:?}, ownership: {:?}",
        relations_path, ownership_path
    );

    let relations_file = open_input(&relations_path)?;
    let ownership_file = open_input(&ownership_path)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match mode {
        Mode::FromRoot => crate::from_root(company_id, relations_file, ownership_file, &mut writer)?,
        Mode::Expand => crate::expand(company_id, relations_file, ownership_file, &mut writer)?,
    }
    writer.flush().map_err(TreeError::Io)?;

    Ok(())
}

fn resolve(flag: Option<&Path>, configured: PathBuf) -> PathBuf {
    flag.map(Path::to_path_buf).unwrap_or(configured)
}

fn open_input(path: &Path) -> CliResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CliError::OpenInput {
            path: path.to_path_buf(),
            source,
        })
}

fn config_command(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&toml::to_string_pretty(&settings)?);
        }
        ConfigCommands::Path => match Settings::global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::info("no config directory available"),
        },
    }
    Ok(())
}

fn completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
