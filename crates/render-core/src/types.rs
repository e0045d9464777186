use folio_layout::TextStyle;

/// A finished export. Only ever produced by a successful `finalize`.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Pdf(Vec<u8>),
    /// Word-compatible HTML.
    Word(String),
}

impl Artifact {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Artifact::Pdf(_) => "application/pdf",
            Artifact::Word(_) => "application/vnd.ms-word",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Artifact::Pdf(_) => "pdf",
            Artifact::Word(_) => "doc",
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Artifact::Pdf(bytes) => bytes,
            Artifact::Word(html) => html.as_bytes(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Artifact::Pdf(bytes) => bytes,
            Artifact::Word(html) => html.into_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    LinkedIn,
    GitHub,
}

/// One segment of the pipe-separated contact line under the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub text: String,
}

impl ContactItem {
    pub fn new(kind: ContactKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The link target for this segment. Locations are not linked.
    pub fn href(&self) -> Option<String> {
        let text = self.text.trim();
        match self.kind {
            ContactKind::Email => Some(format!("mailto:{}", text)),
            ContactKind::Phone => {
                let dialable: String = text
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .collect();
                (!dialable.is_empty()).then(|| format!("tel:{}", dialable))
            }
            ContactKind::Location => None,
            ContactKind::LinkedIn | ContactKind::GitHub => Some(web_href(text)),
        }
    }
}

/// Prefixes `https://` unless the value already carries a scheme.
pub fn web_href(value: &str) -> String {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    }
}

/// A label on the left and a value flush right on the same baseline, as in
/// "Role - Company ........ 2021 - Present".
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    pub label: &'a str,
    pub label_style: TextStyle,
    pub value: &'a str,
    pub value_style: TextStyle,
    pub value_href: Option<String>,
}

/// A boxed skill category in the focused skills grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Main,
    Sidebar,
}
