//! Loading inputs from disk and writing finished artifacts.

mod common;

use common::fixtures::experienced_resume;
use common::{init_logging, GeneratedPdf, TestResult};
use folio::{
    load_overrides, load_resume, save_artifact, ExportFormat, ExportPipeline, TemplateId,
    UserType,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_pipeline_output_saves_under_the_suggested_name() -> TestResult {
    init_logging();
    let dir = TempDir::new()?;
    let data = experienced_resume();
    let pipeline = ExportPipeline::builder()
        .with_user_type(UserType::Experienced)
        .build();

    for format in [ExportFormat::Pdf, ExportFormat::Word] {
        let artifact = pipeline.render(&data, format)?;
        let name = pipeline.suggested_filename(&data, format);
        let path = save_artifact(dir.path(), &name, &artifact)?;
        assert_eq!(fs::read(&path)?, artifact.as_bytes());
    }

    let pdf_path = dir.path().join("Jane_Doe_Senior_Engineer_Resume.pdf");
    let pdf = GeneratedPdf::from_bytes(fs::read(pdf_path)?)?;
    assert_pdf_page_count!(pdf, 1);
    assert!(dir.path().join("Jane_Doe_Senior_Engineer_Resume.doc").exists());
    Ok(())
}

#[test]
fn test_save_creates_missing_directories() -> TestResult {
    init_logging();
    let dir = TempDir::new()?;
    let nested = dir.path().join("out").join("resumes");
    let artifact = ExportPipeline::builder()
        .build()
        .render(&experienced_resume(), ExportFormat::Word)?;

    let path = save_artifact(&nested, "resume.doc", &artifact)?;
    assert!(path.starts_with(&nested));
    assert!(fs::read_to_string(path)?.contains("Word.Document"));
    Ok(())
}

#[test]
fn test_loads_resume_and_options_from_json_files() -> TestResult {
    init_logging();
    let dir = TempDir::new()?;
    let resume_path = dir.path().join("resume.json");
    fs::write(
        &resume_path,
        r#"{
            "name": "Jane Doe",
            "email": "jane@example.com",
            "targetRole": "Staff Engineer",
            "skills": [{ "category": "Languages", "list": ["Python", "Go", "Rust"] }],
            "certifications": ["CKA", { "title": "AWS", "issuer": "Amazon" }]
        }"#,
    )?;
    let options_path = dir.path().join("options.json");
    fs::write(&options_path, r#"{ "template": "minimalist", "bodyTextSize": 11 }"#)?;

    let data = load_resume(&resume_path)?;
    assert_eq!(data.name, "Jane Doe");
    assert_eq!(data.certifications.len(), 2);
    assert_eq!(data.certifications[1].display_text(), "AWS - Amazon");

    let overrides = load_overrides(&options_path)?;
    assert_eq!(overrides.template, Some(TemplateId::Minimalist));
    assert_eq!(overrides.body_text_size, Some(11.0));
    assert_eq!(overrides.name_size, None);
    Ok(())
}

#[test]
fn test_malformed_json_is_reported() -> TestResult {
    init_logging();
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"name\": ")?;
    assert!(matches!(load_resume(&path), Err(folio::ExportError::Json(_))));
    assert!(matches!(
        load_resume(dir.path().join("missing.json")),
        Err(folio::ExportError::Io(_))
    ));
    Ok(())
}
