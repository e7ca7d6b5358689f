//! Visual configuration of a tour.
//!
//! A [`Theme`] is supplied once at session start and owned by the session
//! for its whole lifetime. Every field has a documented default, and JSON
//! input may specify any subset of them.

use crate::foundation::color::Color;
use crate::foundation::core::Size;
use crate::foundation::error::{TourError, TourResult};

/// Font weight used by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Regular body weight.
    Regular,
    /// Semibold.
    Semibold,
    /// Bold.
    Bold,
}

/// System font at a given size and weight.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    /// Point size.
    pub size: f64,
    /// Weight.
    pub weight: FontWeight,
}

impl FontSpec {
    /// Build a font spec.
    pub const fn new(size: f64, weight: FontWeight) -> Self {
        Self { size, weight }
    }
}

/// Button captions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ButtonLabels {
    /// Action button caption on every step but the last.
    pub next: String,
    /// Back button caption.
    pub back: String,
    /// Action button caption on the last (or only) step.
    pub finish: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            next: "Continue".to_owned(),
            back: "Back".to_owned(),
            finish: "Done".to_owned(),
        }
    }
}

/// Popup and highlight geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// Popup card width.
    pub popup_width: f64,
    /// Height of the image slot at the top of the card.
    pub image_height: f64,
    /// Card height for steps with an image.
    pub popup_height_with_image: f64,
    /// Card height for steps without an image.
    pub popup_height_without_image: f64,
    /// Card corner radius.
    pub corner_radius: f64,
    /// Corner radius of the see-through hole.
    pub cutout_corner_radius: f64,
    /// Gap between target and card, and minimum inset from viewport edges.
    pub margin: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            popup_width: 300.0,
            image_height: 120.0,
            popup_height_with_image: 280.0,
            popup_height_without_image: 160.0,
            corner_radius: 12.0,
            cutout_corner_radius: 12.0,
            margin: crate::placement::DEFAULT_MARGIN,
        }
    }
}

/// Colors of every themed element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Card fill.
    pub container_background: Color,
    /// Title text.
    pub title: Color,
    /// Description text.
    pub description: Color,
    /// Progress dots and decorative strokes.
    pub step_indicator: Color,
    /// Action button caption.
    pub next_button_text: Color,
    /// Action button outline.
    pub next_button_border: Color,
    /// Back button caption.
    pub back_button_text: Color,
    /// Dimming overlay base color; its alpha is replaced by `overlay_opacity`.
    pub overlay: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            container_background: Color::WHITE,
            title: Color::BLACK,
            description: Color::BLACK,
            step_indicator: Color::SYSTEM_BLUE,
            next_button_text: Color::SYSTEM_GREEN,
            next_button_border: Color::SYSTEM_GREEN,
            back_button_text: Color::SYSTEM_GREEN,
            overlay: Color::BLACK,
        }
    }
}

/// Fonts of every text element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Fonts {
    /// Step title.
    pub title: FontSpec,
    /// Step description.
    pub description: FontSpec,
    /// Step label / indicator.
    pub step_label: FontSpec,
    /// Action button.
    pub next_button: FontSpec,
    /// Back button.
    pub back_button: FontSpec,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            title: FontSpec::new(20.0, FontWeight::Bold),
            description: FontSpec::new(15.0, FontWeight::Regular),
            step_label: FontSpec::new(15.0, FontWeight::Regular),
            next_button: FontSpec::new(15.0, FontWeight::Semibold),
            back_button: FontSpec::new(15.0, FontWeight::Bold),
        }
    }
}

/// Complete theme bundle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Button captions.
    pub labels: ButtonLabels,
    /// Geometry.
    pub dimensions: Dimensions,
    /// Colors.
    pub colors: Palette,
    /// Fonts.
    pub fonts: Fonts,
    /// Opacity of the dimming overlay, `0..=1`.
    pub overlay_opacity: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            labels: ButtonLabels::default(),
            dimensions: Dimensions::default(),
            colors: Palette::default(),
            fonts: Fonts::default(),
            overlay_opacity: 0.6,
        }
    }
}

impl Theme {
    /// Reject dimensions and opacities the placer cannot work with.
    pub fn validate(&self) -> TourResult<()> {
        let d = &self.dimensions;
        let positive = [
            ("popup_width", d.popup_width),
            ("popup_height_with_image", d.popup_height_with_image),
            ("popup_height_without_image", d.popup_height_without_image),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(TourError::validation(format!(
                    "theme {name} must be finite and > 0"
                )));
            }
        }
        let non_negative = [
            ("image_height", d.image_height),
            ("corner_radius", d.corner_radius),
            ("cutout_corner_radius", d.cutout_corner_radius),
            ("margin", d.margin),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(TourError::validation(format!(
                    "theme {name} must be finite and >= 0"
                )));
            }
        }
        if d.image_height > d.popup_height_with_image {
            return Err(TourError::validation(
                "theme image_height must fit inside popup_height_with_image",
            ));
        }
        if !(0.0..=1.0).contains(&self.overlay_opacity) {
            return Err(TourError::validation(
                "theme overlay_opacity must be within 0..=1",
            ));
        }
        Ok(())
    }

    /// Card size preset selected by content presence, not content size.
    pub fn popup_size(&self, has_image: bool) -> Size {
        Size::new(
            self.dimensions.popup_width,
            crate::placement::popup_height_for(&self.dimensions, has_image),
        )
    }

    /// Final overlay tint with the configured opacity applied.
    pub fn overlay_tint(&self) -> Color {
        self.colors.overlay.with_alpha(self.overlay_opacity)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/theme.rs"]
mod tests;
