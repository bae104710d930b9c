use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::error::LoadError;
use crate::input::parse_events;
use crate::model::event::Event;
use crate::repository::traits::EventRepository;

const DEFAULT_FILE_NAME: &str = ".birthday";

#[derive(Clone, Debug)]
pub struct FileEventRepository {
    file_path: PathBuf,
}

impl FileEventRepository {
    pub fn new(file_path: Option<PathBuf>) -> Result<Self> {
        let file_path = match file_path {
            Some(path) => expand_home(&path)?,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_FILE_NAME)
            }
        };
        Ok(FileEventRepository { file_path })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl EventRepository for FileEventRepository {
    fn list(&self) -> Result<Vec<Event>> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Could not open {}", self.file_path.display()))?;
        let parsed = parse_events(BufReader::new(file))
            .with_context(|| format!("Could not read {}", self.file_path.display()))?;

        if !parsed.errors.is_empty() {
            return Err(LoadError::Invalid {
                path: self.file_path.clone(),
                errors: parsed.errors,
            }
            .into());
        }

        log::debug!("Loaded {} events from {}", parsed.events.len(), self.file_path.display());
        Ok(parsed.events)
    }
}

/// Resolves a leading `~` against the home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            Ok(home_dir.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_list_valid_file() {
        let file = write_file("1990-05-17 Alice\n# comment\n\n12-24 Christmas Eve # yearly\n");
        let repo = FileEventRepository::new(Some(file.path().to_path_buf())).unwrap();

        let events = repo.list().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].description, "Alice");
        assert_eq!(events[1].description, "Christmas Eve");
    }

    #[test]
    fn test_list_fails_on_malformed_line() {
        let file = write_file("1990-05-17 Alice\nnotadate Bob\n");
        let repo = FileEventRepository::new(Some(file.path().to_path_buf())).unwrap();

        let err = repo.list().unwrap_err();
        let load_err = err.downcast_ref::<LoadError>().expect("LoadError");
        let LoadError::Invalid { errors, .. } = load_err;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 2);
        assert_eq!(load_err.diagnostics().len(), 1);
        assert!(load_err.diagnostics()[0].ends_with(":2: Malformed date: \"notadate\""));
    }

    #[test]
    fn test_list_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileEventRepository::new(Some(dir.path().join("missing"))).unwrap();

        let err = repo.list().unwrap_err();
        assert!(err.downcast_ref::<LoadError>().is_none());
        assert!(err.to_string().starts_with("Could not open"));
    }

    #[test]
    fn test_expand_home() {
        let plain = PathBuf::from("/etc/birthdays");
        assert_eq!(expand_home(&plain).unwrap(), plain);

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/.birthday")).unwrap(), home.join(".birthday"));
        }
    }
}
