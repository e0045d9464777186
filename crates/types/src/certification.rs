use crate::non_blank;
use serde::{Deserialize, Serialize};

/// A certification entry as supplied upstream: either a ready display string
/// or a loose record whose fields may be partially filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Certification {
    Plain(String),
    Structured {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        issuer: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

const SEPARATOR: &str = " - ";

impl Certification {
    /// Collapses the entry into its single display string.
    ///
    /// Plain strings pass through verbatim. Structured entries try, in order:
    /// title + description, title + issuer, name, title, description, and
    /// finally every present value joined together.
    pub fn display_text(&self) -> String {
        match self {
            Certification::Plain(text) => text.clone(),
            Certification::Structured { .. } => {
                let (lead, detail) = self.parts();
                match detail {
                    Some(detail) => format!("{}{}{}", lead, SEPARATOR, detail),
                    None => lead,
                }
            }
        }
    }

    /// Splits the entry into a bold lead and an optional trailing detail.
    pub fn parts(&self) -> (String, Option<String>) {
        match self {
            Certification::Plain(text) => (text.trim().to_string(), None),
            Certification::Structured {
                title,
                description,
                issuer,
                name,
            } => {
                let title = non_blank(title.as_deref());
                let description = non_blank(description.as_deref());
                let issuer = non_blank(issuer.as_deref());
                let name = non_blank(name.as_deref());

                match (title, description, issuer, name) {
                    (Some(t), Some(d), _, _) => (t.to_string(), Some(d.to_string())),
                    (Some(t), None, Some(i), _) => (t.to_string(), Some(i.to_string())),
                    (_, _, _, Some(n)) => (n.to_string(), None),
                    (Some(t), _, _, _) => (t.to_string(), None),
                    (None, Some(d), _, _) => (d.to_string(), None),
                    (None, None, issuer, None) => (issuer.unwrap_or_default().to_string(), None),
                }
            }
        }
    }

    pub fn is_present(&self) -> bool {
        !self.display_text().trim().is_empty()
    }
}

impl From<&str> for Certification {
    fn from(value: &str) -> Self {
        Certification::Plain(value.to_string())
    }
}
