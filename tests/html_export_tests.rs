//! End-to-end Word (HTML) exports.

mod common;

use common::fixtures::*;
use common::{generate_html, init_logging, TestResult};
use folio::{ExportOverrides, FontFamily, TemplateId, UserType};

#[test]
fn test_document_is_word_compatible_html() -> TestResult {
    init_logging();
    let html = generate_html(&experienced_resume(), UserType::Experienced, None)?;

    assert!(html.starts_with("<html xmlns:o=\"urn:schemas-microsoft-com:office:office\""));
    assert!(html.contains("<meta name=\"ProgId\" content=\"Word.Document\">"));
    assert!(html.contains("<title>Jane Doe - Resume</title>"));
    assert!(html.contains("@page Section1"));
    assert!(html.contains("<div class=\"Section1\">"));
    assert!(html.trim_end().ends_with("</html>"));
    Ok(())
}

#[test]
fn test_headings_and_sections_in_order() -> TestResult {
    init_logging();
    let html = generate_html(&experienced_resume(), UserType::Experienced, None)?;

    let positions: Vec<usize> = [
        "<h1>JANE DOE</h1>",
        "<h2 class=\"section-title\">PROFESSIONAL SUMMARY</h2>",
        "<h2 class=\"section-title\">EXPERIENCE</h2>",
        "<h2 class=\"section-title\">TECHNICAL SKILLS</h2>",
        "<h2 class=\"section-title\">EDUCATION</h2>",
    ]
    .iter()
    .map(|needle| html.find(needle).ok_or(format!("missing {}", needle)))
    .collect::<Result<_, _>>()?;
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    assert!(!html.contains("PROJECTS"));
    Ok(())
}

#[test]
fn test_contacts_are_anchors() -> TestResult {
    init_logging();
    let html = generate_html(&experienced_resume(), UserType::Experienced, None)?;
    assert!(html.contains("<a href=\"mailto:jane@example.com\">jane@example.com</a>"));
    assert!(html.contains("<a href=\"https://github.com/janedoe\">github.com/janedoe</a>"));
    assert!(html.contains("Berlin, Germany"));
    assert!(!html.contains("href=\"Berlin"));
    Ok(())
}

#[test]
fn test_minimalist_keeps_title_case_headings() -> TestResult {
    init_logging();
    let overrides = ExportOverrides {
        template: Some(TemplateId::Minimalist),
        ..Default::default()
    };
    let html = generate_html(&experienced_resume(), UserType::Experienced, Some(overrides))?;
    assert!(html.contains("<h2 class=\"section-title minimal\">Professional Summary</h2>"));
    assert!(!html.contains("PROFESSIONAL SUMMARY"));
    Ok(())
}

#[test]
fn test_two_column_template_uses_a_table() -> TestResult {
    init_logging();
    let overrides = ExportOverrides {
        template: Some(TemplateId::TwoColumnSafe),
        ..Default::default()
    };
    let html = generate_html(&full_resume(), UserType::Experienced, Some(overrides))?;

    let main = html.find("<td class=\"main\">").ok_or("no main column")?;
    let sidebar = html.find("<td class=\"sidebar\">").ok_or("no sidebar column")?;
    let skills = html.find("TECHNICAL SKILLS").ok_or("no skills heading")?;
    let experience = html.find("EXPERIENCE").ok_or("no experience heading")?;
    assert!(main < experience && experience < sidebar && sidebar < skills);
    Ok(())
}

#[test]
fn test_user_text_is_escaped() -> TestResult {
    init_logging();
    let mut data = experienced_resume();
    data.name = "Jane <Doe> & Co".into();
    data.summary = Some("Uses <script> & \"quotes\"".into());

    let html = generate_html(&data, UserType::Experienced, None)?;
    assert!(html.contains("JANE &lt;DOE&gt; &amp; CO"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
    Ok(())
}

#[test]
fn test_font_family_reaches_the_stylesheet() -> TestResult {
    init_logging();
    let overrides = ExportOverrides {
        font_family: Some(FontFamily::Georgia),
        ..Default::default()
    };
    let html = generate_html(&experienced_resume(), UserType::Experienced, Some(overrides))?;
    assert!(html.contains(&FontFamily::Georgia.css_stack()));
    Ok(())
}

#[test]
fn test_student_objective_only() -> TestResult {
    init_logging();
    let html = generate_html(&student_resume(), UserType::Student, None)?;
    assert!(html.contains("CAREER OBJECTIVE"));
    assert!(!html.contains("Seasoned professional summary"));
    Ok(())
}

#[test]
fn test_blank_name_fails_before_rendering() {
    init_logging();
    let mut data = experienced_resume();
    data.name = String::new();
    let err = generate_html(&data, UserType::Experienced, None).expect_err("must fail");
    assert!(err.is_invalid_input());
}
