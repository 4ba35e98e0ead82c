/*!
 * Translation job orchestration.
 *
 * A job walks an opened presentation, classifies each paragraph, translates
 * candidates, collapses the paragraph runs around the translated text, records
 * each passage in the audit log and reports progress after every slide, then
 * persists the rewritten document.
 *
 * A job moves through `Idle -> Running -> {Completed, Failed}`. Construction
 * validates credentials and the input path synchronously; a job that fails
 * validation never starts. Once started, the job runs to a terminal state on
 * its own background task with exclusive ownership of the document, and the
 * caller observes it purely through the event channel. There is no
 * cancellation and a finished job cannot be restarted; a new run needs a new
 * job.
 */

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::app_config::Config;
use crate::audit::AuditLogger;
use crate::document::{DocumentWalker, ParagraphAddress, Presentation};
use crate::errors::{AppError, ValidationError};
use crate::language::is_translation_candidate;
use crate::providers::baidu::Baidu;
use crate::translation::TranslationService;

/// Credentials used to sign every request of one job.
///
/// Supplied once per job and never persisted beyond it.
#[derive(Debug, Clone)]
pub struct JobCredentials {
    /// Application ID issued by the translation provider
    pub app_id: String,
    /// Secret key paired with the app ID
    pub secret_key: String,
}

impl JobCredentials {
    /// Create credentials from an app ID and secret key.
    pub fn new(app_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            secret_key: secret_key.into(),
        }
    }
}

/// Notifications sent from the running job to the caller.
///
/// The worker pushes these into an unbounded channel and never blocks waiting
/// for them to be observed; the caller drains the channel on its own schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum JobEvent {
    /// A slide has been fully processed
    Progress {
        /// Slides processed so far
        completed_slides: usize,
        /// Total slides in the document
        total_slides: usize,
    },
    /// The job finished and both output files are on disk
    Completed {
        /// Path of the translated document
        output_path: PathBuf,
        /// Path of the audit log
        log_path: PathBuf,
    },
    /// The job aborted on a document error
    Failed {
        /// Description of the failure
        error: String,
    },
}

impl JobEvent {
    /// Completion percentage for progress events, `None` otherwise.
    pub fn percent(&self) -> Option<f64> {
        match self {
            JobEvent::Progress {
                completed_slides,
                total_slides,
            } if *total_slides > 0 => {
                Some(*completed_slides as f64 / *total_slides as f64 * 100.0)
            }
            _ => None,
        }
    }
}

/// Reports fractional completion after each fully processed slide.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    events: UnboundedSender<JobEvent>,
}

impl ProgressReporter {
    /// Create a reporter feeding the given event channel.
    pub fn new(events: UnboundedSender<JobEvent>) -> Self {
        Self { events }
    }

    /// Report that `completed_slides` of `total_slides` are done.
    ///
    /// Send failures mean the caller dropped its receiver; the job keeps
    /// running regardless.
    pub fn report_slide_complete(&self, completed_slides: usize, total_slides: usize) {
        let _ = self.events.send(JobEvent::Progress {
            completed_slides,
            total_slides,
        });
    }
}

/// Handle onto a started job.
pub struct JobHandle {
    /// Event stream from the worker
    pub events: UnboundedReceiver<JobEvent>,
    /// The worker task itself
    pub task: JoinHandle<()>,
}

/// A validated, not-yet-started translation job.
pub struct TranslationJob {
    input_path: PathBuf,
    service: TranslationService,
}

impl TranslationJob {
    /// Validate inputs and prepare a job using the Baidu provider.
    ///
    /// Blank credentials or a missing input file are rejected here,
    /// synchronously, and the job never starts.
    pub fn new(
        credentials: JobCredentials,
        input_path: PathBuf,
        config: &Config,
    ) -> Result<Self, ValidationError> {
        let provider = Baidu::new(
            credentials.app_id.clone(),
            credentials.secret_key.clone(),
            config.endpoint.clone(),
        );
        let service = TranslationService::new(
            Box::new(provider),
            config.source_language.clone(),
            config.target_language.clone(),
        );
        Self::with_service(credentials, input_path, service)
    }

    /// Validate inputs and prepare a job around an explicit service.
    ///
    /// This is the seam tests use to inject a mock provider.
    pub fn with_service(
        credentials: JobCredentials,
        input_path: PathBuf,
        service: TranslationService,
    ) -> Result<Self, ValidationError> {
        if credentials.app_id.trim().is_empty() || credentials.secret_key.trim().is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if !input_path.is_file() {
            return Err(ValidationError::InputNotFound(input_path));
        }

        Ok(Self {
            input_path,
            service,
        })
    }

    /// Start the job on a background task.
    ///
    /// The returned handle carries the event channel; the final event is
    /// always `Completed` or `Failed`.
    pub fn start(self) -> JobHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let events = tx.clone();

        let task = tokio::spawn(async move {
            match self.run(&tx).await {
                Ok((output_path, log_path)) => {
                    let _ = events.send(JobEvent::Completed {
                        output_path,
                        log_path,
                    });
                }
                Err(e) => {
                    let _ = events.send(JobEvent::Failed {
                        error: e.to_string(),
                    });
                }
            }
        });

        JobHandle { events: rx, task }
    }

    /// The running phase: walk, classify, translate, collapse, log, report,
    /// then persist. Only document and audit-log errors escape; translation
    /// failures are absorbed by the fail-open service.
    async fn run(
        &self,
        events: &UnboundedSender<JobEvent>,
    ) -> Result<(PathBuf, PathBuf), AppError> {
        info!("Opening presentation: {}", self.input_path.display());
        let mut document = Presentation::open(&self.input_path)?;

        let output_path = derive_output_path(&self.input_path);
        let log_path = derive_log_path(&self.input_path);
        let document_name = self
            .input_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.input_path.display().to_string());

        let audit = AuditLogger::create(&log_path, &document_name)?;
        let reporter = ProgressReporter::new(events.clone());
        let total_slides = document.slide_count();
        info!("Translating {} slides", total_slides);

        // Group the walk by slide up front so each slide's paragraphs can be
        // mutated while the slide boundary still drives progress reporting.
        let mut by_slide: Vec<Vec<ParagraphAddress>> = vec![Vec::new(); total_slides];
        for (slide_number, address) in DocumentWalker::new(&document) {
            by_slide[slide_number - 1].push(address);
        }

        for (idx, addresses) in by_slide.into_iter().enumerate() {
            let slide_number = idx + 1;

            for address in addresses {
                let original_text = document.paragraph(&address).text();
                if !is_translation_candidate(&original_text) {
                    continue;
                }

                let outcome = self.service.translate_or_original(&original_text).await;
                if !outcome.succeeded {
                    warn!(
                        "Slide {}: keeping original text for one paragraph after a failed translation",
                        slide_number
                    );
                }

                audit.append_record(slide_number, &original_text, &outcome.text)?;
                document
                    .paragraph_mut(&address)
                    .collapse_into_first_run(&outcome.text);
                debug!("Slide {}: translated {:?}", slide_number, original_text);
            }

            reporter.report_slide_complete(slide_number, total_slides);
        }

        document.save(&output_path)?;
        info!("Translated document saved to {}", output_path.display());
        info!("Translation log saved to {}", log_path.display());

        Ok((output_path, log_path))
    }
}

/// Output document path: `<inputBaseName>_translated.<ext>`.
pub fn derive_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());

    let file_name = match input_path.extension() {
        Some(ext) => format!("{}_translated.{}", stem, ext.to_string_lossy()),
        None => format!("{}_translated", stem),
    };

    input_path.with_file_name(file_name)
}

/// Audit log path: `<inputBaseName>_translation_log.txt`.
pub fn derive_log_path(input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());

    input_path.with_file_name(format!("{}_translation_log.txt", stem))
}
