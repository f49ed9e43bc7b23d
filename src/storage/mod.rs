//! Task file persistence
//!
//! The whole list is rewritten on every save. Writes go to a temporary file
//! next to the target which is then renamed over it, so a failed save leaves
//! the previous file intact.

pub mod error;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::task::{codec, TaskList};

pub use error::{Result, StorageError};

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw lines of the task file, or nothing if it does not exist yet
    pub fn load_lines(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            debug!("No task file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Replace the task file with `lines`, creating parent directories as needed.
    pub fn save_lines(&self, lines: &[String]) -> Result<()> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(write_err)?;

        let mut file = NamedTempFile::new_in(&parent).map_err(write_err)?;
        for line in lines {
            writeln!(file, "{}", line).map_err(write_err)?;
        }
        file.as_file().sync_all().map_err(write_err)?;
        file.persist(&self.path)
            .map_err(|e| write_err(e.error))?;

        debug!("Wrote {} line(s) to {}", lines.len(), self.path.display());
        Ok(())
    }

    /// Decode every non-blank line. Any bad line fails the whole load.
    pub fn load(&self) -> Result<TaskList> {
        let lines = self.load_lines()?;
        let mut tasks = Vec::with_capacity(lines.len());

        for (i, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let task = codec::decode(line).map_err(|source| StorageError::Decode {
                path: self.path.clone(),
                line: i + 1,
                source,
            })?;
            tasks.push(task);
        }

        info!("Loaded {} task(s) from {}", tasks.len(), self.path.display());
        Ok(TaskList::from_tasks(tasks))
    }

    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let lines: Vec<String> = tasks.all().iter().map(codec::encode).collect();
        self.save_lines(&lines)
    }
}
