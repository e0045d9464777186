use itertools::Itertools;

/// `{Name}_{TargetRole}_Resume.{ext}` with whitespace runs collapsed to one
/// underscore. Path separators are dropped so the result is a bare file name.
pub fn suggested_filename(name: &str, target_role: Option<&str>, extension: &str) -> String {
    let stem = [Some(name), target_role]
        .into_iter()
        .flatten()
        .map(file_segment)
        .filter(|s| !s.is_empty())
        .chain(std::iter::once("Resume".to_string()))
        .join("_");
    format!("{}.{}", stem, extension.trim_start_matches('.'))
}

fn file_segment(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| word.chars().filter(|c| !matches!(c, '/' | '\\')).collect::<String>())
        .filter(|word| !word.is_empty())
        .join("_")
}
