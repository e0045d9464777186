//! The public entry point: one configured pipeline, any number of exports.

use crate::assembler::lay_out;
use crate::error::ExportError;
use crate::filename::suggested_filename;
use folio_render_core::{Artifact, DocumentBackend};
use folio_render_html::HtmlBackend;
use folio_render_lopdf::PdfBackend;
use folio_style::{resolve_options, ExportOptions, ExportOverrides};
use folio_types::{ResumeData, UserType};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    /// Word-compatible HTML.
    Word,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Word => "doc",
        }
    }

    /// The message shown to users when an export of this kind fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "Failed to generate PDF. Please try again.",
            ExportFormat::Word => "Failed to generate Word document. Please try again.",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Word => "Word",
        })
    }
}

/// Progress of a single export call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Validating,
    LayingOut,
    Finalizing,
    Completed,
    Failed,
}

/// Receives status transitions as an export runs.
pub trait StatusObserver: Send + Sync {
    fn on_status(&self, format: ExportFormat, status: RenderStatus);
}

impl<F> StatusObserver for F
where
    F: Fn(ExportFormat, RenderStatus) + Send + Sync,
{
    fn on_status(&self, format: ExportFormat, status: RenderStatus) {
        self(format, status)
    }
}

/// Configures an `ExportPipeline`.
#[derive(Default)]
pub struct ExportPipelineBuilder {
    overrides: Option<ExportOverrides>,
    user_type: UserType,
    observer: Option<Arc<dyn StatusObserver>>,
}

impl ExportPipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Partial options merged over the defaults when the pipeline is built.
    pub fn with_overrides(mut self, overrides: ExportOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }

    pub fn with_observer(mut self, observer: impl StatusObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn build(self) -> ExportPipeline {
        let options = resolve_options(self.overrides.as_ref());
        for field in options.out_of_range() {
            log::warn!("Export option '{}' is outside its documented range", field);
        }
        ExportPipeline {
            options,
            user_type: self.user_type,
            observer: self.observer,
        }
    }
}

/// Renders resumes to PDF or Word with one resolved set of options.
///
/// Each call builds its own backend, so a pipeline can be shared and used
/// from several threads at once.
#[derive(Clone)]
pub struct ExportPipeline {
    options: ExportOptions,
    user_type: UserType,
    observer: Option<Arc<dyn StatusObserver>>,
}

impl ExportPipeline {
    pub fn builder() -> ExportPipelineBuilder {
        ExportPipelineBuilder::new()
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn render_pdf(&self, data: &ResumeData) -> Result<Vec<u8>, ExportError> {
        self.run(ExportFormat::Pdf, data, PdfBackend::new)
    }

    pub fn render_html(&self, data: &ResumeData) -> Result<String, ExportError> {
        self.run(ExportFormat::Word, data, HtmlBackend::new)
    }

    pub fn render(&self, data: &ResumeData, format: ExportFormat) -> Result<Artifact, ExportError> {
        match format {
            ExportFormat::Pdf => self.render_pdf(data).map(Artifact::Pdf),
            ExportFormat::Word => self.render_html(data).map(Artifact::Word),
        }
    }

    /// File name for the artifact, from the resume's name and target role.
    pub fn suggested_filename(&self, data: &ResumeData, format: ExportFormat) -> String {
        suggested_filename(&data.name, data.target_role.as_deref(), format.extension())
    }

    fn notify(&self, format: ExportFormat, status: RenderStatus) {
        if let Some(observer) = &self.observer {
            observer.on_status(format, status);
        }
    }

    fn run<B, F>(
        &self,
        format: ExportFormat,
        data: &ResumeData,
        make_backend: F,
    ) -> Result<B::Output, ExportError>
    where
        B: DocumentBackend,
        F: FnOnce(ExportOptions) -> B,
    {
        self.notify(format, RenderStatus::Validating);
        if data.name.trim().is_empty() {
            self.notify(format, RenderStatus::Failed);
            return Err(ExportError::InvalidInput(
                "A name is required to export a resume".to_string(),
            ));
        }

        self.notify(format, RenderStatus::LayingOut);
        let mut backend = make_backend(self.options.clone());
        let outcome = lay_out(&mut backend, data, self.user_type).and_then(|()| {
            self.notify(format, RenderStatus::Finalizing);
            backend.finalize()
        });

        match outcome {
            Ok(output) => {
                self.notify(format, RenderStatus::Completed);
                log::info!("{} export completed for {}", format, self.user_type);
                Ok(output)
            }
            Err(source) => {
                self.notify(format, RenderStatus::Failed);
                log::error!("{} export failed: {}", format, source);
                Err(ExportError::RenderFailure {
                    message: format.failure_message().to_string(),
                    source,
                })
            }
        }
    }
}

/// One-shot PDF export.
pub fn render_pdf(
    data: &ResumeData,
    user_type: UserType,
    overrides: Option<ExportOverrides>,
) -> Result<Vec<u8>, ExportError> {
    pipeline(user_type, overrides).render_pdf(data)
}

/// One-shot Word export.
pub fn render_html(
    data: &ResumeData,
    user_type: UserType,
    overrides: Option<ExportOverrides>,
) -> Result<String, ExportError> {
    pipeline(user_type, overrides).render_html(data)
}

fn pipeline(user_type: UserType, overrides: Option<ExportOverrides>) -> ExportPipeline {
    let mut builder = ExportPipeline::builder().with_user_type(user_type);
    if let Some(overrides) = overrides {
        builder = builder.with_overrides(overrides);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn resume(name: &str) -> ResumeData {
        ResumeData {
            name: name.into(),
            summary: Some("Builds reliable systems.".into()),
            ..Default::default()
        }
    }

    #[test]
    fn blank_name_is_rejected_before_layout() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let pipeline = ExportPipeline::builder()
            .with_observer(move |_: ExportFormat, status: RenderStatus| {
                sink.lock().unwrap().push(status)
            })
            .build();

        let err = pipeline.render_pdf(&resume("   ")).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(
            *seen.lock().unwrap(),
            vec![RenderStatus::Validating, RenderStatus::Failed]
        );
    }

    #[test]
    fn observer_sees_every_stage_of_a_successful_export() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let pipeline = ExportPipeline::builder()
            .with_observer(move |format: ExportFormat, status: RenderStatus| {
                sink.lock().unwrap().push((format, status))
            })
            .build();

        let html = pipeline.render_html(&resume("Jane Doe")).unwrap();
        assert!(html.contains("JANE DOE"));
        let statuses: Vec<RenderStatus> = seen.lock().unwrap().iter().map(|(_, s)| *s).collect();
        assert_eq!(
            statuses,
            vec![
                RenderStatus::Validating,
                RenderStatus::LayingOut,
                RenderStatus::Finalizing,
                RenderStatus::Completed
            ]
        );
        assert!(seen.lock().unwrap().iter().all(|(f, _)| *f == ExportFormat::Word));
    }

    #[test]
    fn render_wraps_outputs_in_artifacts() {
        let pipeline = ExportPipeline::builder().build();
        let data = resume("Jane Doe");
        let pdf = pipeline.render(&data, ExportFormat::Pdf).unwrap();
        assert_eq!(pdf.mime_type(), "application/pdf");
        assert!(pdf.as_bytes().starts_with(b"%PDF"));
        let word = pipeline.render(&data, ExportFormat::Word).unwrap();
        assert_eq!(word.mime_type(), "application/vnd.ms-word");
        assert_eq!(word.extension(), "doc");
    }

    #[test]
    fn overrides_are_merged_over_defaults() {
        let pipeline = ExportPipeline::builder()
            .with_overrides(ExportOverrides {
                body_text_size: Some(11.0),
                ..Default::default()
            })
            .build();
        assert_eq!(pipeline.options().body_text_size, 11.0);
        assert_eq!(pipeline.options().name_size, 26.0);
    }
}
