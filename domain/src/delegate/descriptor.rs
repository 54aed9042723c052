//! Format descriptors
//!
//! A [`FormatDescriptor`] names one output encoding: its short name, the MIME
//! type written on the wire and the usual file extension. A delegate that
//! produces several encodings keeps them in a [`FormatTable`].

use serde::{Deserialize, Serialize};

use crate::core::error::DomainError;

/// One output encoding a delegate can produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    /// Short format name (e.g., "GeoTIFF", "PNG")
    pub name: String,
    /// MIME type of the encoded output
    pub mime_type: String,
    /// File extension without the leading dot
    #[serde(default)]
    pub extension: String,
    /// Additional identifiers accepted for this format
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl FormatDescriptor {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            extension: extension.into(),
            aliases: Vec::new(),
        }
    }

    /// Add an alternative identifier for this format
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// All identifiers of this format: name, MIME type, then aliases
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.mime_type.as_str()]
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
    }

    /// Check if `format` names this descriptor (ASCII case-insensitive)
    pub fn matches(&self, format: &str) -> bool {
        self.identifiers().any(|id| id.eq_ignore_ascii_case(format))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyFormatName);
        }
        if self.mime_type.trim().is_empty() {
            return Err(DomainError::EmptyMimeType(self.name.clone()));
        }
        Ok(())
    }
}

/// Ordered set of formats declared by one delegate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatTable {
    formats: Vec<FormatDescriptor>,
}

impl FormatTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a format (builder style)
    pub fn with(mut self, descriptor: FormatDescriptor) -> Self {
        self.formats.push(descriptor);
        self
    }

    /// Find the descriptor for a format identifier
    ///
    /// The first declared descriptor wins when identifiers overlap.
    pub fn find(&self, format: &str) -> Option<&FormatDescriptor> {
        self.formats.iter().find(|d| d.matches(format))
    }

    /// Every identifier across all formats, in declaration order, without duplicates
    pub fn identifiers(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.formats
            .iter()
            .flat_map(FormatDescriptor::identifiers)
            .filter(|id| seen.insert(*id))
            .map(str::to_string)
            .collect()
    }

    /// Validate the table on behalf of the delegate `delegate_id`
    pub fn validate(&self, delegate_id: &str) -> Result<(), DomainError> {
        if self.formats.is_empty() {
            return Err(DomainError::NoFormats(delegate_id.to_string()));
        }
        self.formats.iter().try_for_each(FormatDescriptor::validate)
    }
}

impl FromIterator<FormatDescriptor> for FormatTable {
    fn from_iter<I: IntoIterator<Item = FormatDescriptor>>(iter: I) -> Self {
        Self {
            formats: iter.into_iter().collect(),
        }
    }
}
