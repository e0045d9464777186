//! End-to-end PDF exports, checked through lopdf.

mod common;

use common::fixtures::*;
use common::pdf_assertions::{extract_link_uris, get_page_dimensions, info_entry, page_text};
use common::{generate_pdf, init_logging, GeneratedPdf, TestResult};
use folio::{ExportFormat, ExportOverrides, ExportPipeline, ResumeData, TemplateId, UserType};

#[test]
fn test_experienced_resume_fits_on_one_page() -> TestResult {
    init_logging();
    let data = experienced_resume();
    let pdf = generate_pdf(&data, UserType::Experienced, None)?;

    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "JANE DOE");
    assert_pdf_contains_text!(pdf, "PROFESSIONAL SUMMARY");
    assert_pdf_contains_text!(pdf, "EXPERIENCE");
    assert_pdf_contains_text!(pdf, "TECHNICAL SKILLS");
    assert_pdf_contains_text!(pdf, "EDUCATION");
    assert_pdf_contains_text!(pdf, "Page 1 of 1");
    assert_pdf_not_contains_text!(pdf, "PROJECTS");
    assert_pdf_not_contains_text!(pdf, "CERTIFICATIONS");

    let pipeline = ExportPipeline::builder().build();
    assert_eq!(
        pipeline.suggested_filename(&data, ExportFormat::Pdf),
        "Jane_Doe_Senior_Engineer_Resume.pdf"
    );
    Ok(())
}

#[test]
fn test_sections_follow_the_experienced_order() -> TestResult {
    init_logging();
    let pdf = generate_pdf(&experienced_resume(), UserType::Experienced, None)?;
    let text = pdf.text();

    let positions: Vec<usize> = ["PROFESSIONAL SUMMARY", "EXPERIENCE", "TECHNICAL SKILLS", "EDUCATION"]
        .iter()
        .map(|heading| text.find(heading).ok_or(format!("missing {}", heading)))
        .collect::<Result<_, _>>()?;
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    Ok(())
}

#[test]
fn test_blank_name_is_rejected() {
    init_logging();
    let data = ResumeData {
        name: "   ".into(),
        ..experienced_resume()
    };
    for format in [ExportFormat::Pdf, ExportFormat::Word] {
        let err = ExportPipeline::builder()
            .build()
            .render(&data, format)
            .expect_err("blank name must fail");
        assert!(err.is_invalid_input(), "{:?}", err);
    }
}

#[test]
fn test_sections_without_content_are_omitted() -> TestResult {
    init_logging();
    let mut data = experienced_resume();
    for entry in &mut data.work_experience {
        entry.role = " ".into();
    }
    data.summary = Some("".into());

    let pdf = generate_pdf(&data, UserType::Experienced, None)?;
    assert_pdf_not_contains_text!(pdf, "EXPERIENCE");
    assert_pdf_not_contains_text!(pdf, "PROFESSIONAL SUMMARY");
    assert_pdf_not_contains_text!(pdf, "Acme Corp");
    assert_pdf_contains_text!(pdf, "TECHNICAL SKILLS");
    Ok(())
}

#[test]
fn test_student_sees_only_the_career_objective() -> TestResult {
    init_logging();
    let pdf = generate_pdf(&student_resume(), UserType::Student, None)?;

    assert_pdf_contains_text!(pdf, "CAREER OBJECTIVE");
    assert_pdf_contains_text!(pdf, "Aspiring systems programmer");
    assert_pdf_not_contains_text!(pdf, "PROFESSIONAL SUMMARY");
    assert_pdf_not_contains_text!(pdf, "Seasoned professional summary");
    assert_pdf_contains_text!(pdf, "ACADEMIC PROJECTS");
    assert_pdf_contains_text!(pdf, "3.8/4.0");
    Ok(())
}

#[test]
fn test_skill_category_renders_as_one_labelled_line() -> TestResult {
    init_logging();
    let pdf = generate_pdf(&experienced_resume(), UserType::Experienced, None)?;
    assert_pdf_contains_text!(pdf, "Languages: Python, Go, Rust");
    assert_pdf_contains_text!(pdf, "Infrastructure: Kubernetes, Terraform, AWS");
    Ok(())
}

#[test]
fn test_focused_templates_render_skill_cards() -> TestResult {
    init_logging();
    let overrides = ExportOverrides {
        template: Some(TemplateId::Functional),
        ..Default::default()
    };
    let pdf = generate_pdf(&experienced_resume(), UserType::Experienced, Some(overrides))?;
    assert_pdf_contains_text!(pdf, "KEY SKILLS");
    assert_pdf_contains_text!(pdf, "Languages");
    assert_pdf_contains_text!(pdf, "WORK HISTORY");
    assert_pdf_not_contains_text!(pdf, "Languages: Python");
    Ok(())
}

#[test]
fn test_zero_spacing_still_renders() -> TestResult {
    init_logging();
    let overrides = ExportOverrides {
        section_spacing: Some(0.0),
        entry_spacing: Some(0.0),
        ..Default::default()
    };
    let pdf = generate_pdf(&full_resume(), UserType::Experienced, Some(overrides))?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "ACHIEVEMENTS");
    Ok(())
}

#[test]
fn test_contact_segments_become_link_annotations() -> TestResult {
    init_logging();
    let pdf = generate_pdf(&experienced_resume(), UserType::Experienced, None)?;
    let uris = extract_link_uris(&pdf.doc);

    assert!(uris.contains(&"mailto:jane@example.com".to_string()), "{:?}", uris);
    assert!(uris.contains(&"tel:+15550102000".to_string()), "{:?}", uris);
    assert!(uris.contains(&"https://linkedin.com/in/janedoe".to_string()), "{:?}", uris);
    assert!(uris.contains(&"https://github.com/janedoe".to_string()), "{:?}", uris);
    assert!(!uris.iter().any(|u| u.contains("Berlin")));
    Ok(())
}

#[test]
fn test_project_urls_are_linked() -> TestResult {
    init_logging();
    let pdf = generate_pdf(&full_resume(), UserType::Experienced, None)?;
    let uris = extract_link_uris(&pdf.doc);
    assert!(uris.contains(&"https://github.com/janedoe/queue".to_string()), "{:?}", uris);
    Ok(())
}

#[test]
fn test_document_info_names_the_owner() -> TestResult {
    init_logging();
    let pdf = generate_pdf(&experienced_resume(), UserType::Experienced, None)?;
    assert_eq!(info_entry(&pdf.doc, "Title").as_deref(), Some("Jane Doe - Resume"));
    assert_eq!(info_entry(&pdf.doc, "Author").as_deref(), Some("Jane Doe"));
    assert!(info_entry(&pdf.doc, "Producer").is_some_and(|p| p.starts_with("folio")));
    Ok(())
}

#[test]
fn test_certifications_show_lead_and_detail() -> TestResult {
    init_logging();
    let pdf = generate_pdf(&full_resume(), UserType::Experienced, None)?;
    assert_pdf_contains_text!(pdf, "AWS");
    assert_pdf_contains_text!(pdf, "Cloud cert");
    assert_pdf_contains_text!(pdf, "Certified Kubernetes Administrator");
    Ok(())
}

#[test]
fn test_long_resume_spills_onto_more_pages() -> TestResult {
    init_logging();
    let pdf = generate_pdf(&long_resume(), UserType::Experienced, None)?;
    assert_pdf_min_pages!(pdf, 2);

    let total = pdf.page_count();
    for page in 1..=total {
        let text = page_text(&pdf.doc, page as u32);
        let footer = format!("Page {} of {}", page, total);
        assert!(text.contains(&footer), "page {} lacks '{}'", page, footer);
    }
    // The heading is drawn once, not repeated on continuation pages.
    assert_eq!(pdf.text().matches("EXPERIENCE").count(), 1);
    assert_pdf_contains_text!(pdf, "Engineer 14");
    Ok(())
}

#[test]
fn test_every_template_produces_a_loadable_pdf() -> TestResult {
    init_logging();
    for template in TemplateId::ALL {
        for user_type in [UserType::Student, UserType::Fresher, UserType::Experienced] {
            let overrides = ExportOverrides {
                template: Some(template),
                ..Default::default()
            };
            let pdf = generate_pdf(&full_resume(), user_type, Some(overrides))?;
            assert!(pdf.page_count() >= 1, "{} / {}", template, user_type);
        }
    }
    Ok(())
}

#[test]
fn test_output_is_deterministic() -> TestResult {
    init_logging();
    let first = generate_pdf(&full_resume(), UserType::Experienced, None)?;
    let second = generate_pdf(&full_resume(), UserType::Experienced, None)?;
    assert_eq!(first.bytes, second.bytes);
    Ok(())
}

#[test]
fn test_bytes_start_with_pdf_header() -> TestResult {
    init_logging();
    let bytes = folio::render_pdf(&experienced_resume(), UserType::Experienced, None)?;
    assert!(bytes.starts_with(b"%PDF-1.7"));
    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert_pdf_page_count!(pdf, 1);

    let (width, height) = get_page_dimensions(&pdf.doc, 1).ok_or("no MediaBox")?;
    assert!((width - 595.28).abs() < 0.5, "width {}", width);
    assert!((height - 841.89).abs() < 0.5, "height {}", height);
    Ok(())
}
