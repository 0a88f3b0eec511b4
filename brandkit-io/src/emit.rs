use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use brandkit_core::variant::Artifact;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Destination for finished artifacts.
pub trait Emitter {
    fn emit(&mut self, artifact: &Artifact) -> Result<(), EmitError>;
}

/// Writes artifacts into a directory, replacing existing files.
#[derive(Debug, Clone)]
pub struct DirEmitter {
    dir: PathBuf,
}

impl DirEmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Emitter for DirEmitter {
    fn emit(&mut self, artifact: &Artifact) -> Result<(), EmitError> {
        fs::create_dir_all(&self.dir).map_err(|source| EmitError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join(&artifact.filename);
        fs::write(&path, artifact.markup.as_bytes()).map_err(|source| EmitError::Io { path, source })
    }
}

/// Keeps artifacts in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmitter {
    pub artifacts: Vec<Artifact>,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.filename.as_str()).collect()
    }

    pub fn get(&self, filename: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.filename == filename)
    }
}

impl Emitter for MemoryEmitter {
    fn emit(&mut self, artifact: &Artifact) -> Result<(), EmitError> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}
