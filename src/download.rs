//! Downloads
//!
//! Exports leave the store through a [`DownloadSink`]: a named, typed byte payload handed to
//! whatever the surrounding environment offers as a download. Delivering never touches the slots.

use std::{
    ffi::OsStr,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use mockall::automock;
use thiserror::Error;
use tracing::info;

/// Content type of catalog exports.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Content type of ledger exports.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A file offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name
    pub filename: String,

    /// MIME type of the body
    pub content_type: &'static str,

    /// File contents
    pub body: Vec<u8>,
}

impl Download {
    /// Creates a download with an explicit content type.
    pub fn new(
        filename: impl Into<String>,
        content_type: &'static str,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            body: body.into(),
        }
    }

    /// A `text/csv` download.
    pub fn csv(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(filename, CSV_CONTENT_TYPE, text.into())
    }

    /// An `application/json` download.
    pub fn json(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(filename, JSON_CONTENT_TYPE, text.into())
    }
}

/// Download delivery errors
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Writing the payload failed
    #[error("failed to deliver download: {0}")]
    Io(#[from] io::Error),

    /// The file name is empty or carries directory components
    #[error("invalid download file name: {0:?}")]
    InvalidFilename(String),
}

/// Destination for downloads.
#[automock]
pub trait DownloadSink {
    /// Hands `download` to the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be written.
    fn deliver(&self, download: &Download) -> Result<(), DownloadError>;
}

/// Writes downloads as files in a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `dir`, created on first delivery.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where `download` will be written.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::InvalidFilename`] unless the file name is a single path component.
    pub fn path_for(&self, download: &Download) -> Result<PathBuf, DownloadError> {
        let name = Path::new(&download.filename);

        if name.file_name() != Some(OsStr::new(&download.filename)) {
            return Err(DownloadError::InvalidFilename(download.filename.clone()));
        }

        Ok(self.dir.join(name))
    }

    /// Writes `download` into the directory, returning the file's path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file name is not a single path component or the write fails.
    pub fn write(&self, download: &Download) -> Result<PathBuf, DownloadError> {
        let path = self.path_for(download)?;

        fs::create_dir_all(&self.dir)?;
        fs::write(&path, &download.body)?;

        info!(
            path = %path.display(),
            content_type = download.content_type,
            bytes = download.body.len(),
            "download written"
        );

        Ok(path)
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, download: &Download) -> Result<(), DownloadError> {
        self.write(download).map(drop)
    }
}

/// Writes download bodies to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DownloadSink for StdoutSink {
    fn deliver(&self, download: &Download) -> Result<(), DownloadError> {
        let mut stdout = io::stdout().lock();

        stdout.write_all(&download.body)?;
        stdout.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn constructors_set_content_type() {
        assert_eq!(Download::csv("a.csv", "x").content_type, "text/csv");
        assert_eq!(
            Download::json("a.json", "[]").content_type,
            "application/json"
        );
    }

    #[test]
    fn directory_sink_writes_file() -> TestResult {
        let dir = tempdir()?;
        let sink = DirectorySink::new(dir.path().join("exports"));

        sink.deliver(&Download::csv("products.csv", "a,b\n"))?;

        assert_eq!(
            fs::read_to_string(dir.path().join("exports").join("products.csv"))?,
            "a,b\n"
        );

        Ok(())
    }

    #[test]
    fn directory_sink_write_reports_path() -> TestResult {
        let dir = tempdir()?;
        let sink = DirectorySink::new(dir.path());

        let path = sink.write(&Download::json("invoices.json", "[]"))?;

        assert_eq!(path, dir.path().join("invoices.json"));
        assert_eq!(fs::read_to_string(path)?, "[]");

        Ok(())
    }

    #[test]
    fn directory_sink_rejects_paths() -> TestResult {
        let dir = tempdir()?;
        let sink = DirectorySink::new(dir.path());

        for filename in ["", "../escape.csv", "nested/file.csv", ".."] {
            let result = sink.deliver(&Download::csv(filename, "x"));

            assert!(
                matches!(result, Err(DownloadError::InvalidFilename(_))),
                "expected {filename:?} to be rejected, got {result:?}"
            );
        }

        Ok(())
    }
}
