use std::{
    fmt::Write as _,
    io,
    path::{Path, PathBuf},
};

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use crate::{
    app,
    config::PageConfig,
    content::default_portfolio,
    domain::{CategoryFilter, Portfolio, ProjectRecord},
    error::{FolioError, Result},
    logging,
    page::{PagerState, ProjectFilter, available_categories},
    storage,
};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Personal portfolio in the terminal", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, help = "Page config file")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Portfolio content file")]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "List projects the way the page shows them")]
    Projects {
        #[arg(long, short, help = "Category label, or 'all'")]
        category: Option<String>,

        #[arg(long, short, help = "How many projects to show")]
        limit: Option<usize>,
    },

    #[command(about = "List the category filters")]
    Categories,

    #[command(about = "Export projects")]
    Export {
        #[arg(long, value_enum, help = "Export format")]
        format: ExportFormat,

        #[arg(long, short, help = "Output path")]
        out: Option<PathBuf>,
    },

    #[command(about = "Import projects from a .json or .csv file")]
    Import {
        #[arg(help = "File to import")]
        path: PathBuf,
    },

    #[command(about = "Write the built-in content file")]
    Init,

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// The listing the page would show for `category`, `limit` projects at a time.
pub fn project_listing(
    portfolio: &Portfolio,
    category: Option<&str>,
    limit: usize,
) -> Result<String> {
    let options = available_categories(&portfolio.projects);
    let filter = match category {
        Some(input) => CategoryFilter::resolve(input, &options)?,
        None => CategoryFilter::All,
    };

    let mut paginator = ProjectFilter::new(limit);
    paginator.on_filter_change(filter);
    let view = paginator.view(&portfolio.projects);

    let mut out = String::new();
    if view.filtered().is_empty() {
        let _ = writeln!(out, "No hay proyectos en esta categoría");
        return Ok(out);
    }

    let id_width = view
        .visible()
        .iter()
        .map(|project| project.id.chars().count())
        .max()
        .unwrap_or(0);

    for project in view.visible() {
        let featured = if project.is_featured() { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:<width$}  {} [{}]{}",
            project.id,
            project.title,
            project.category_key().label(),
            featured,
            width = id_width
        );
    }

    if view.state() == PagerState::Collapsed {
        let _ = writeln!(out, "... {} restantes", view.remaining());
    }
    Ok(out)
}

pub fn category_listing(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    for option in available_categories(&portfolio.projects) {
        let count = portfolio
            .projects
            .iter()
            .filter(|project| option.matches(project))
            .count();
        let _ = writeln!(out, "{:<20} {}", option.label(), count);
    }
    out
}

/// Imported projects replace existing ones with the same id; the rest are
/// appended in file order. Returns `(added, replaced)`.
pub fn merge_projects(
    existing: &mut Vec<ProjectRecord>,
    imported: Vec<ProjectRecord>,
) -> (usize, usize) {
    let mut added = 0;
    let mut replaced = 0;

    for project in imported {
        match existing.iter_mut().find(|known| known.id == project.id) {
            Some(slot) => {
                *slot = project;
                replaced += 1;
            }
            None => {
                existing.push(project);
                added += 1;
            }
        }
    }

    (added, replaced)
}

fn export_projects(
    portfolio: &Portfolio,
    format: ExportFormat,
    out_path: Option<PathBuf>,
) -> Result<()> {
    let payload = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&portfolio.projects)
            .map_err(|e| FolioError::Encode(e.to_string()))?,
        ExportFormat::Csv => storage::projects_to_csv(&portfolio.projects)?,
    };

    match out_path {
        Some(path) => {
            storage::atomic_write(&path, &payload)?;
            info!(path = %path.display(), count = portfolio.projects.len(), "exported projects");
            println!("Exported to {}", path.display());
        }
        None => println!("{}", payload),
    }
    Ok(())
}

fn import_projects(content_path: &Path, source: &Path) -> Result<()> {
    let imported = storage::load_projects_file(source)?;
    let mut portfolio = storage::load_portfolio(content_path)?;

    let (added, replaced) = merge_projects(&mut portfolio.projects, imported);
    storage::save_portfolio(content_path, &portfolio)?;

    info!(
        source = %source.display(),
        added,
        replaced,
        "imported projects"
    );
    println!(
        "Imported {} new and {} updated projects into {}",
        added,
        replaced,
        content_path.display()
    );
    Ok(())
}

fn init_content(content_path: &Path) -> Result<()> {
    if content_path.exists() {
        println!("Content file already exists at {}", content_path.display());
        return Ok(());
    }

    storage::save_portfolio(content_path, &default_portfolio())?;
    info!(path = %content_path.display(), "wrote default content");
    println!("Wrote {}", content_path.display());
    Ok(())
}

pub fn print_completions(shell: &str) -> Result<()> {
    use clap_complete::Shell;
    let shell = match shell {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        _ => return Err(FolioError::UnsupportedShell(shell.to_string())),
    };
    clap_complete::generate(shell, &mut Cli::command(), "folio", &mut io::stdout());
    Ok(())
}

fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(storage::get_config_path);
    let content_path = cli.content.unwrap_or_else(storage::get_content_path);

    match cli.command {
        None => {
            let config = PageConfig::load(&config_path)?;
            let portfolio = storage::load_portfolio(&content_path)?;
            app::run_ui(portfolio, config)
        }
        Some(Command::Projects { category, limit }) => {
            let config = PageConfig::load(&config_path)?;
            let portfolio = storage::load_portfolio(&content_path)?;
            let limit = limit.unwrap_or(config.page_size);
            print!("{}", project_listing(&portfolio, category.as_deref(), limit)?);
            Ok(())
        }
        Some(Command::Categories) => {
            let portfolio = storage::load_portfolio(&content_path)?;
            print!("{}", category_listing(&portfolio));
            Ok(())
        }
        Some(Command::Export { format, out }) => {
            let portfolio = storage::load_portfolio(&content_path)?;
            export_projects(&portfolio, format, out)
        }
        Some(Command::Import { path }) => import_projects(&content_path, &path),
        Some(Command::Init) => init_content(&content_path),
        Some(Command::Completions { shell }) => print_completions(&shell),
    }
}

pub fn run_cli() {
    let cli = Cli::parse();

    // Completions go to stdout and must not touch the log directory.
    let _guard = if matches!(cli.command, Some(Command::Completions { .. })) {
        None
    } else {
        match logging::init_tracing(&storage::get_log_dir()) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: {}", e);
                None
            }
        }
    };

    if let Err(e) = dispatch(cli) {
        error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project;

    fn portfolio_with(projects: Vec<ProjectRecord>) -> Portfolio {
        Portfolio {
            projects,
            ..default_portfolio()
        }
    }

    #[test]
    fn test_listing_shows_slice_and_remaining() {
        let portfolio = portfolio_with(
            (0..5)
                .map(|i| project(&format!("p{}", i), Some("Backend")))
                .collect(),
        );

        let listing = project_listing(&portfolio, None, 3).unwrap();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("p0"));
        assert_eq!(lines[3], "... 2 restantes");
    }

    #[test]
    fn test_listing_filters_by_category_label() {
        let portfolio = portfolio_with(vec![
            project("a", Some("Backend")),
            project("b", None),
            project("c", Some("Frontend")),
        ]);

        let listing = project_listing(&portfolio, Some("otros"), 6).unwrap();
        assert_eq!(listing.lines().count(), 1);
        assert!(listing.starts_with("b"));

        let err = project_listing(&portfolio, Some("Mobile"), 6).unwrap_err();
        assert!(matches!(err, FolioError::UnknownCategory(_)));
    }

    #[test]
    fn test_category_listing_counts_projects() {
        let portfolio = portfolio_with(vec![
            project("a", Some("Backend")),
            project("b", Some("Backend")),
            project("c", None),
        ]);

        let listing = category_listing(&portfolio);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Todos") && lines[0].ends_with('3'));
        assert!(lines[1].starts_with("Backend") && lines[1].ends_with('2'));
        assert!(lines[2].starts_with("Otros") && lines[2].ends_with('1'));
    }

    #[test]
    fn test_merge_replaces_by_id_and_appends_new() {
        let mut existing = vec![project("a", None), project("b", None)];
        let mut updated = project("b", Some("Backend"));
        updated.title = "Nuevo".to_string();

        let (added, replaced) = merge_projects(&mut existing, vec![updated, project("c", None)]);
        assert_eq!((added, replaced), (1, 1));
        assert_eq!(existing.len(), 3);
        assert_eq!(existing[1].title, "Nuevo");
        assert_eq!(existing[2].id, "c");
    }

    #[test]
    fn test_unknown_shell_is_rejected() {
        let err = print_completions("powershell").unwrap_err();
        assert!(matches!(err, FolioError::UnsupportedShell(_)));
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["folio", "projects", "--category", "Backend", "-l", "3"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Projects { limit: Some(3), .. })
        ));

        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
    }
}
