//! Core presentation types.

use serde::{Deserialize, Serialize};

/// Chrome style of the floating window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    /// Translucent frosted panel
    #[default]
    Blur,
    /// Solid dark panel
    Color,
    /// Indigo to purple gradient
    Gradient,
}

impl BackgroundStyle {
    /// All styles, in picker order
    pub const ALL: [BackgroundStyle; 3] = [Self::Blur, Self::Color, Self::Gradient];

    /// Label shown on the picker button
    pub fn label(self) -> &'static str {
        match self {
            Self::Blur => "BLUR",
            Self::Color => "COLOR",
            Self::Gradient => "GRADIENT",
        }
    }
}

/// A named source text shown in the source viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub name: &'static str,
    pub content: &'static str,
}

impl SourceFile {
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}
