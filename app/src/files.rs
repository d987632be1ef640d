use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::*;

const PACKAGE_NAME: &str = "panteleyev.org";
const APP_NAME: &str = "Sapper";

/// Files the application keeps between runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AppFile {
    /// Last used board size, lives in the config directory
    Settings,
    /// Best times, lives in the data directory
    Scores,
}

impl AppFile {
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Settings => "settings.xml",
            Self::Scores => "scores.xml",
        }
    }
}

/// Locates and accesses [`AppFile`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppFiles {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl AppFiles {
    pub fn with_dirs(config_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            data_dir: data_dir.into(),
        }
    }

    /// XDG base directories on Linux, `~/.sapper` elsewhere.
    pub fn from_env() -> Self {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .unwrap_or_default();

        if cfg!(target_os = "linux") {
            let base = |var: &str, fallback: &[&str]| {
                std::env::var_os(var)
                    .map(PathBuf::from)
                    .filter(|path| path.is_absolute())
                    .unwrap_or_else(|| {
                        fallback.iter().fold(home.clone(), |path, part| path.join(part))
                    })
                    .join(PACKAGE_NAME)
                    .join(APP_NAME)
            };
            Self::with_dirs(
                base("XDG_CONFIG_HOME", &[".config"]),
                base("XDG_DATA_HOME", &[".local", "share"]),
            )
        } else {
            let dir = home.join(".sapper");
            Self::with_dirs(dir.clone(), dir)
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, file: AppFile) -> PathBuf {
        let dir = match file {
            AppFile::Settings => &self.config_dir,
            AppFile::Scores => &self.data_dir,
        };
        dir.join(file.file_name())
    }

    /// Creates the config and data directories if needed.
    pub fn initialize(&self) -> Result<()> {
        for dir in [&self.config_dir, &self.data_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::Io {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Contents of `file`, or `None` when it does not exist yet.
    pub fn read(&self, file: AppFile) -> Result<Option<String>> {
        let path = self.path(file);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                log::debug!("Read {}", path.display());
                Ok(Some(contents))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No {} yet", path.display());
                Ok(None)
            }
            Err(source) => Err(AppError::Io { path, source }),
        }
    }

    pub fn write(&self, file: AppFile, contents: &str) -> Result<()> {
        let path = self.path(file);
        fs::write(&path, contents).map_err(|source| AppError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("Wrote {}", path.display());
        Ok(())
    }
}
