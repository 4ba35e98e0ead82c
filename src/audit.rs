/*!
 * Audit log of translated passages.
 *
 * Every translated paragraph is appended to a plain-text log next to the
 * output document. The file is opened and closed per write rather than held
 * open for the whole job: a crash mid-job leaves a valid, truncated log
 * instead of a corrupt one, at the cost of repeated open/close overhead.
 */

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

/// Width of the `=` separator under the log header.
const SEPARATOR_WIDTH: usize = 50;

/// Appender for the translation audit log.
#[derive(Debug)]
pub struct AuditLogger {
    /// Path of the log file
    path: PathBuf,
}

impl AuditLogger {
    /// Create the log file at `path`, truncating any previous run's log, and
    /// write the job header: document name, start timestamp and a separator.
    pub fn create<P: AsRef<Path>>(path: P, document_name: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let header = format!(
            "PPT file: {}\nTranslated at: {}\n{}\n\n",
            document_name,
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(SEPARATOR_WIDTH),
        );
        std::fs::write(&path, header)
            .with_context(|| format!("Failed to create audit log: {:?}", path))?;

        Ok(Self { path })
    }

    /// Append one translation record and close the file again.
    ///
    /// The record is a slide marker line, the original text line, the
    /// translated text line and a blank separator line, in that order.
    pub fn append_record(
        &self,
        slide_number: usize,
        original_text: &str,
        translated_text: &str,
    ) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open audit log: {:?}", self.path))?;

        writeln!(file, "Slide #{}", slide_number)?;
        writeln!(file, "{}", original_text)?;
        writeln!(file, "{}", translated_text)?;
        writeln!(file)?;

        Ok(())
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
