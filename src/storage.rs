use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::{
    constants::FILE_NAMES,
    content::default_portfolio,
    domain::{Portfolio, ProjectRecord, ensure_category_names_allowed, ensure_unique_ids},
    error::{FolioError, Result},
};

const MAX_BACKUPS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "folio", "folio")
}

pub fn get_data_dir() -> PathBuf {
    if Path::new(".").join(FILE_NAMES.content).exists() {
        return PathBuf::from(".");
    }

    if let Some(proj_dirs) = project_dirs() {
        let data_dir = proj_dirs.data_dir().to_path_buf();
        fs::create_dir_all(&data_dir).ok();
        data_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_state_dir() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        if let Some(state_dir) = proj_dirs.state_dir() {
            let dir = state_dir.to_path_buf();
            fs::create_dir_all(&dir).ok();
            return dir;
        }
    }
    get_data_dir()
}

pub fn get_content_path() -> PathBuf {
    get_data_dir().join(FILE_NAMES.content)
}

pub fn get_config_path() -> PathBuf {
    get_data_dir().join(FILE_NAMES.config)
}

pub fn get_log_dir() -> PathBuf {
    get_state_dir().join("logs")
}

/// Loads page content, falling back to the built-in portfolio when the file
/// does not exist.
pub fn load_portfolio(path: &Path) -> Result<Portfolio> {
    if !path.exists() {
        info!(path = %path.display(), "no content file, using built-in portfolio");
        return Ok(default_portfolio());
    }

    let portfolio: Portfolio = read_json(path)?;
    portfolio.validate()?;
    info!(
        path = %path.display(),
        projects = portfolio.projects.len(),
        "loaded portfolio"
    );
    Ok(portfolio)
}

pub fn save_portfolio(path: &Path, portfolio: &Portfolio) -> Result<()> {
    portfolio.validate()?;
    write_json_atomic(path, portfolio)
}

#[derive(Debug, Serialize, Deserialize)]
struct ProjectCsvRow {
    id: String,
    title: String,
    description: String,
    technologies: String,
    category: Option<String>,
    github_url: Option<String>,
    demo_url: Option<String>,
    image_url: Option<String>,
    featured: Option<bool>,
    completed_date: Option<String>,
}

impl From<ProjectCsvRow> for ProjectRecord {
    fn from(row: ProjectCsvRow) -> Self {
        ProjectRecord {
            id: row.id,
            title: row.title,
            description: row.description,
            technologies: row
                .technologies
                .split(';')
                .map(str::trim)
                .filter(|tech| !tech.is_empty())
                .map(ToString::to_string)
                .collect(),
            category: row.category,
            github_url: row.github_url,
            demo_url: row.demo_url,
            image_url: row.image_url,
            featured: row.featured,
            completed_date: row.completed_date,
        }
    }
}

impl From<&ProjectRecord> for ProjectCsvRow {
    fn from(project: &ProjectRecord) -> Self {
        ProjectCsvRow {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.join(";"),
            category: project.category.clone(),
            github_url: project.github_url.clone(),
            demo_url: project.demo_url.clone(),
            image_url: project.image_url.clone(),
            featured: project.featured,
            completed_date: project.completed_date.clone(),
        }
    }
}

pub fn read_projects_csv(path: &Path) -> Result<Vec<ProjectRecord>> {
    let csv_error = |source| FolioError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
    let mut projects = Vec::new();
    for row in reader.deserialize::<ProjectCsvRow>() {
        projects.push(ProjectRecord::from(row.map_err(csv_error)?));
    }
    Ok(projects)
}

pub fn projects_to_csv(projects: &[ProjectRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for project in projects {
        writer
            .serialize(ProjectCsvRow::from(project))
            .map_err(|e| FolioError::Encode(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FolioError::Encode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FolioError::Encode(e.to_string()))
}

/// Reads a project collection from a `.json` array or a `.csv` file.
pub fn load_projects_file(path: &Path) -> Result<Vec<ProjectRecord>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let projects = match extension.as_deref() {
        Some("json") => read_json::<Vec<ProjectRecord>>(path)?,
        Some("csv") => read_projects_csv(path)?,
        _ => return Err(FolioError::UnsupportedFormat(path.to_path_buf())),
    };

    ensure_unique_ids(&projects)?;
    ensure_category_names_allowed(&projects)?;
    Ok(projects)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| FolioError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| FolioError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| FolioError::Encode(e.to_string()))?;
    atomic_write(path, &json)
}

pub fn create_backup(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let backup_dir = path.parent().unwrap_or(Path::new(".")).join("backups");
    fs::create_dir_all(&backup_dir).map_err(|e| FolioError::io(&backup_dir, e))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S%.6f");
    let filename = format!(
        "{}.{}",
        path.file_name().unwrap_or_default().to_string_lossy(),
        timestamp
    );
    let mut backup_path = backup_dir.join(&filename);
    let mut attempt = 1;
    while backup_path.exists() {
        backup_path = backup_dir.join(format!("{}-{}", filename, attempt));
        attempt += 1;
    }
    fs::copy(path, &backup_path).map_err(|e| FolioError::io(&backup_path, e))?;

    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    if let Ok(entries) = fs::read_dir(&backup_dir) {
        let mut backups: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(&*stem))
            .collect();
        backups.sort_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()));

        let excess = backups.len().saturating_sub(MAX_BACKUPS);
        for oldest in backups.iter().take(excess) {
            if let Err(e) = fs::remove_file(oldest.path()) {
                warn!(path = %oldest.path().display(), error = %e, "could not prune backup");
            }
        }
    }

    Ok(())
}

pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        create_backup(path)?;
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FolioError::io(parent, e))?;
    }

    let tmp_path = path.with_extension("tmp");
    let mut tmp_file = File::create(&tmp_path).map_err(|e| FolioError::io(&tmp_path, e))?;
    tmp_file
        .write_all(content.as_bytes())
        .map_err(|e| FolioError::io(&tmp_path, e))?;
    tmp_file
        .sync_all()
        .map_err(|e| FolioError::io(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| FolioError::io(path, e))?;
    Ok(())
}
