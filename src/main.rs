mod cli;

use cli::Args;
use dependency_hierarchy::adapters::outbound::console::{
    SilentProgressReporter, StderrProgressReporter,
};
use dependency_hierarchy::adapters::outbound::filesystem::FileSystemAssetsReader;
use dependency_hierarchy::application::dto::{HierarchyRequest, HierarchyResponse};
use dependency_hierarchy::application::factories::{
    FormatterFactory, FormatterType, PresenterFactory, PresenterType,
};
use dependency_hierarchy::application::use_cases::ShowHierarchyUseCase;
use dependency_hierarchy::config::{self, ConfigFile, LoadedConfig};
use dependency_hierarchy::ports::outbound::{HierarchyFormatter, ProgressReporter};
use dependency_hierarchy::shared::error::{ExitCode, HierarchyError};
use dependency_hierarchy::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tokio_util::sync::CancellationToken;

/// Effective options after merging the config file with the command line
#[derive(Debug, Default, PartialEq, Eq)]
struct Settings {
    filter: Option<String>,
    no_color: bool,
    quiet: bool,
}

impl Settings {
    /// Command-line values win; boolean flags can only switch a setting on
    fn merge(args: &Args, config: Option<&ConfigFile>) -> Self {
        Self {
            filter: args
                .filter
                .clone()
                .or_else(|| config.and_then(|c| c.filter.clone())),
            no_color: args.no_color || config.and_then(|c| c.no_color).unwrap_or(false),
            quiet: args.quiet || config.and_then(|c| c.quiet).unwrap_or(false),
        }
    }
}

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            ExitCode::ApplicationError
        }
    };
    process::exit(exit_code.as_i32());
}

fn print_error(e: &anyhow::Error) {
    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let loaded = config::load(args.config.as_deref(), Path::new("."))?;
    let settings = Settings::merge(&args, loaded.as_ref().map(|loaded| &loaded.config));

    if let Some(package) = &args.depends_on {
        if package.trim().is_empty() {
            return Err(HierarchyError::Validation {
                message: "--depends-on requires a package id".to_string(),
            }
            .into());
        }
    }

    let project_dirs = args.project_dirs();
    let project_count = project_dirs.len();
    let checked: Vec<Result<HierarchyRequest>> = project_dirs
        .into_iter()
        .map(|dir| -> Result<HierarchyRequest> {
            validate_project_path(&dir)?;
            Ok(HierarchyRequest::new(dir, settings.filter.clone()))
        })
        .collect();
    let requests: Vec<HierarchyRequest> = checked
        .iter()
        .filter_map(|request| request.as_ref().ok().cloned())
        .collect();

    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let loaded_results = if settings.quiet {
        load_all(SilentProgressReporter, loaded.as_ref(), &requests, &cancel).await
    } else {
        let reporter = StderrProgressReporter::new();
        load_all(reporter, loaded.as_ref(), &requests, &cancel).await
    };

    let mut responses = Vec::new();
    let mut failed = false;
    for result in in_argument_order(checked, loaded_results) {
        match result {
            Ok(response) => responses.push(response),
            Err(e) => {
                print_error(&e);
                failed = true;
            }
        }
    }

    // Nothing was loaded, so an existing output file is left untouched
    if responses.is_empty() && failed {
        return Ok(ExitCode::ApplicationError);
    }

    let presenter_type = PresenterType::from_output(args.output.clone());
    let use_color = !settings.no_color && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(FormatterType::select(
        !use_color,
        presenter_type.is_file(),
    ));

    let output = match &args.depends_on {
        Some(package) => list_dependents(&responses, package),
        None => render_all(formatter.as_ref(), &responses, project_count > 1)?,
    };

    PresenterFactory::create(presenter_type).present(&output)?;

    Ok(if failed {
        ExitCode::ApplicationError
    } else {
        ExitCode::Success
    })
}

/// Reports the config file notices, then loads every valid project
async fn load_all<PR: ProgressReporter>(
    progress_reporter: PR,
    config: Option<&LoadedConfig>,
    requests: &[HierarchyRequest],
    cancel: &CancellationToken,
) -> Vec<Result<HierarchyResponse>> {
    if let Some(loaded) = config {
        progress_reporter.report(&format!(
            "📄 Loaded config from: {}",
            loaded.path.display()
        ));
        for key in loaded.config.unknown_field_names() {
            progress_reporter.report_error(&format!(
                "⚠️  Warning: Unknown config field '{}' will be ignored.",
                key
            ));
        }
    }

    let use_case = ShowHierarchyUseCase::new(FileSystemAssetsReader::new(), progress_reporter);
    use_case.execute_all(requests, cancel).await
}

/// Puts path validation failures back between the loaded projects
fn in_argument_order(
    checked: Vec<Result<HierarchyRequest>>,
    loaded: Vec<Result<HierarchyResponse>>,
) -> Vec<Result<HierarchyResponse>> {
    let mut loaded = loaded.into_iter();
    checked
        .into_iter()
        .filter_map(|request| match request {
            Ok(_) => loaded.next(),
            Err(e) => Some(Err(e)),
        })
        .collect()
}

/// Formats each tree in project order; several projects get a `# <dir>` header
fn render_all(
    formatter: &dyn HierarchyFormatter,
    responses: &[HierarchyResponse],
    with_headers: bool,
) -> Result<String> {
    let mut output = String::new();
    for (i, response) in responses.iter().enumerate() {
        if with_headers {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&format!("# {}\n", response.project_path.display()));
        }
        output.push_str(&formatter.format(&response.tree)?);
    }
    Ok(output)
}

/// One line per project whose graph contains the package
fn list_dependents(responses: &[HierarchyResponse], package: &str) -> String {
    responses
        .iter()
        .filter(|response| response.depends_on(package))
        .map(|response| format!("{}\n", response.project_path.display()))
        .collect()
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(invalid_project_path(path, "Directory does not exist"));
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| {
        invalid_project_path(path, &format!("Failed to read path metadata: {}", e))
    })?;

    if metadata.is_symlink() {
        return Err(invalid_project_path(
            path,
            "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.",
        ));
    }

    if !path.is_dir() {
        return Err(invalid_project_path(path, "Not a directory"));
    }

    Ok(())
}

fn invalid_project_path(path: &Path, reason: &str) -> anyhow::Error {
    HierarchyError::InvalidProjectPath {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
    .into()
}
