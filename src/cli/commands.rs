//! Command dispatch: one function per subcommand

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::report;
use crate::application::services::LoadReport;
use crate::application::Session;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::menu::Menu;
use crate::cli::{output, CliError, CliResult};
use crate::config::{self, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("get current directory", e))?,
    };
    let settings = Settings::load(Some(&config_dir))?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::List { file, json, strict }) => {
            cmd_list(&container, file.as_deref(), *json, *strict)
        }
        Some(Commands::Show { course, file, json }) => {
            cmd_show(&container, course, file.as_deref(), *json)
        }
        Some(Commands::Menu { file }) => cmd_menu(&container, file.as_deref()),
        None => cmd_menu(&container, None),
        Some(Commands::Tree { file }) => cmd_tree(&container, file.as_deref()),
        Some(Commands::Config { command }) => cmd_config(&container, command, &config_dir),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn catalog_path(container: &ServiceContainer, file: Option<&Path>) -> PathBuf {
    file.map(Path::to_path_buf)
        .unwrap_or_else(|| container.settings.catalog_file.clone())
}

/// Load the catalog into a fresh session, reporting rejected lines as warnings.
fn load_session(container: &ServiceContainer, file: Option<&Path>) -> CliResult<(Session, LoadReport)> {
    let path = catalog_path(container, file);
    let mut session = Session::new();
    let report = container.catalog.load(&path, &mut session)?;
    for rejected in &report.rejected {
        output::warning(&format!(
            "line {}: {}: {}",
            rejected.line_number, rejected.error, rejected.content
        ));
    }
    Ok((session, report))
}

#[instrument(level = "debug", skip(container))]
fn cmd_list(
    container: &ServiceContainer,
    file: Option<&Path>,
    json: bool,
    strict: bool,
) -> CliResult<()> {
    let (session, report) = load_session(container, file)?;
    if strict && report.has_rejections() {
        return Err(CliError::RejectedLines {
            count: report.rejected.len(),
        });
    }

    if json {
        let courses: Vec<_> = session.courses().collect();
        return print_json(&courses);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for course in session.courses() {
        writeln!(out, "{}", report::course_details(course))
            .map_err(|e| InfraError::io("write course list", e))?;
    }
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_show(
    container: &ServiceContainer,
    course: &str,
    file: Option<&Path>,
    json: bool,
) -> CliResult<()> {
    if course.is_empty() {
        return Err(CliError::InvalidArgs("course identifier is empty".into()));
    }
    let (session, _) = load_session(container, file)?;
    let found = session
        .lookup(course)
        .ok_or_else(|| CliError::CourseNotFound(course.to_string()))?;

    if json {
        return print_json(found);
    }
    output::info(&report::course_details(found));
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_menu(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let path = catalog_path(container, file);
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut menu = Menu::new(&container.catalog, &path, stdin.lock(), io::stdout());
    menu.run(&mut session)?;
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_tree(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let (session, _) = load_session(container, file)?;
    let index = session.index();
    output::header(&format!(
        "{} course(s), depth {}",
        index.len(),
        index.depth()
    ));
    output::info(&index.to_tree_string());
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    config_dir: &Path,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match config::global_config_path() {
                Some(p) => output::detail(&format!("global: {}", p.display())),
                None => output::detail(&"global: <unavailable>"),
            }
            output::detail(&format!(
                "local:  {}",
                config::local_config_path(config_dir).display()
            ));
        }
        ConfigCommands::Init { force } => {
            let path = config::local_config_path(config_dir);
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("Created {}", path.display()));
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| InfraError::io("serialize json", e.into()))?;
    output::info(&text);
    Ok(())
}
