use crate::foundation::color::Color;
use crate::foundation::core::Rect;
use crate::model::theme::FontSpec;

/// Host-side reference to an illustrative image (asset name, path or URL).
///
/// The core only cares whether one is present; resolving it is up to the
/// presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ImageRef(
    /// Asset key.
    pub String,
);

impl ImageRef {
    /// Wrap an image key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Per-step override of a text element's font and color.
///
/// Unset fields fall back to the theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Font override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
    /// Color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl TextStyle {
    /// `true` when nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.font.is_none() && self.color.is_none()
    }

    /// Font and color with theme values filling the gaps.
    pub fn resolve(&self, font: FontSpec, color: Color) -> ResolvedText {
        ResolvedText {
            font: self.font.unwrap_or(font),
            color: self.color.unwrap_or(color),
        }
    }
}

/// Font and color a text element is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedText {
    /// Font.
    pub font: FontSpec,
    /// Color.
    pub color: Color,
}

/// The domain data of one tour step, as handed back to the host in
/// step-shown notifications.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepContent {
    /// Optional host identifier (for analytics and the like).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Optional headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Title font/color override.
    #[serde(default, skip_serializing_if = "TextStyle::is_empty")]
    pub title_style: TextStyle,
    /// Body text.
    pub description: String,
    /// Description font/color override.
    #[serde(default, skip_serializing_if = "TextStyle::is_empty")]
    pub description_style: TextStyle,
    /// Optional illustration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl StepContent {
    /// Content with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: None,
            title_style: TextStyle::default(),
            description: description.into(),
            description_style: TextStyle::default(),
            image: None,
        }
    }

    /// `true` when the step carries an illustration.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// One tour entry: content plus the target rectangle captured at tour start.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// What the popup shows.
    pub content: StepContent,
    /// Absolute window-space bounds of the highlighted element.
    pub target: Rect,
}

impl Step {
    /// A description-only step highlighting `target`.
    pub fn new(description: impl Into<String>, target: Rect) -> Self {
        Self {
            content: StepContent::new(description),
            target,
        }
    }

    /// Set the headline.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.content.title = Some(title.into());
        self
    }

    /// Override the title font and color.
    #[must_use]
    pub fn with_title_style(mut self, style: TextStyle) -> Self {
        self.content.title_style = style;
        self
    }

    /// Override the description font and color.
    #[must_use]
    pub fn with_description_style(mut self, style: TextStyle) -> Self {
        self.content.description_style = style;
        self
    }

    /// Attach an illustration.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.content.image = Some(ImageRef::new(image));
        self
    }

    /// Set the host identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.content.id = Some(id.into());
        self
    }

    /// Shorthand for `self.content.has_image()`.
    pub fn has_image(&self) -> bool {
        self.content.has_image()
    }
}
