use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// Returns the numeric weight value on the CSS 100-900 scale.
    pub fn numeric_value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }
}

/// The font families a user may pick for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Calibri,
    Arial,
    Helvetica,
    TimesNewRoman,
    Georgia,
    Garamond,
    Cambria,
    Verdana,
}

impl FontFamily {
    pub const ALL: [FontFamily; 8] = [
        FontFamily::Calibri,
        FontFamily::Arial,
        FontFamily::Helvetica,
        FontFamily::TimesNewRoman,
        FontFamily::Georgia,
        FontFamily::Garamond,
        FontFamily::Cambria,
        FontFamily::Verdana,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            FontFamily::Calibri => "Calibri",
            FontFamily::Arial => "Arial",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Georgia => "Georgia",
            FontFamily::Garamond => "Garamond",
            FontFamily::Cambria => "Cambria",
            FontFamily::Verdana => "Verdana",
        }
    }

    pub fn is_serif(self) -> bool {
        matches!(
            self,
            FontFamily::TimesNewRoman | FontFamily::Georgia | FontFamily::Garamond | FontFamily::Cambria
        )
    }

    /// A CSS `font-family` stack with metric-compatible fallbacks.
    pub fn css_stack(self) -> String {
        let generic = if self.is_serif() { "serif" } else { "sans-serif" };
        let fallback = match self {
            FontFamily::Calibri => "Carlito, Arial",
            FontFamily::Arial | FontFamily::Helvetica | FontFamily::Verdana => "Arial",
            FontFamily::Cambria => "Caladea, 'Times New Roman'",
            FontFamily::TimesNewRoman | FontFamily::Georgia | FontFamily::Garamond => {
                "'Times New Roman'"
            }
        };
        format!("'{}', {}, {}", self.display_name(), fallback, generic)
    }

    /// The standard PDF font used to draw this family at the given weight.
    pub fn standard_font(self, weight: FontWeight) -> StandardFont {
        match (self.is_serif(), weight) {
            (false, FontWeight::Regular) => StandardFont::Helvetica,
            (false, FontWeight::Bold) => StandardFont::HelveticaBold,
            (true, FontWeight::Regular) => StandardFont::TimesRoman,
            (true, FontWeight::Bold) => StandardFont::TimesBold,
        }
    }

    /// Resolves a user-supplied family name, ignoring case and spacing.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted: String = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        Self::ALL.into_iter().find(|family| {
            family
                .display_name()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_lowercase()
                == wanted
        })
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unsupported font family: '{}'", s))
    }
}

impl Serialize for FontFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

/// Unknown families degrade to the default rather than failing the export.
impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name).unwrap_or_else(|| {
            log::warn!(
                "Font family '{}' is not in the allow-list, using {}",
                name,
                FontFamily::default()
            );
            FontFamily::default()
        }))
    }
}

/// The four standard Type1 faces the PDF backend draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 4] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::TimesRoman,
        StandardFont::TimesBold,
    ];

    pub fn postscript_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
        }
    }

    /// Resource name used inside content streams, e.g. `F2`.
    pub fn resource_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
            StandardFont::TimesRoman => "F3",
            StandardFont::TimesBold => "F4",
        }
    }
}
