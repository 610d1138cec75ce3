//! Destinations for a rendered document

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// Where a finished export goes
pub trait Sink {
    /// Deliver `document`; returns the written path when the sink is a file
    fn deliver(&mut self, document: &str, filename: &str) -> Result<Option<PathBuf>>;
}

/// Writes the document to any `Write`, e.g. stdout or a clipboard pipe
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn deliver(&mut self, document: &str, _filename: &str) -> Result<Option<PathBuf>> {
        self.writer.write_all(document.as_bytes())?;
        self.writer.flush()?;
        Ok(None)
    }
}

/// Writes `dir/filename`, creating `dir` if needed
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl Sink for FileSink {
    fn deliver(&mut self, document: &str, filename: &str) -> Result<Option<PathBuf>> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, document)?;
        info!(path = %path.display(), bytes = document.len(), "wrote export");
        Ok(Some(path))
    }
}
