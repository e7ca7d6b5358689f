use kurbo::Circle;

use crate::animation::currents::DecorStroke;
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Rect, RoundedRect, Viewport};
use crate::foundation::error::{TourError, TourResult};
use crate::model::theme::Theme;
use crate::placement::FillRule;
use crate::session::render_request::{
    ACTION_BUTTON_HEIGHT, CARD_PADDING, PopupLayout, RenderRequest,
};

const TOLERANCE: f64 = 0.1;
const DOT_DIAMETER: f64 = 8.0;
const DOT_SPACING: f64 = 6.0;
const DOT_ACTIVE_SCALE: f64 = 1.2;
const DOT_INACTIVE_ALPHA: f64 = 0.3;
const ACTION_BUTTON_RADIUS: f64 = 16.0;
// Rough advance width per character, as a fraction of the font size.
const GLYPH_ADVANCE_EM: f64 = 0.55;

/// Preview settings.
#[derive(Clone, Copy, Debug)]
pub struct PreviewOpts {
    /// Stand-in for the host screen under the overlay.
    pub backdrop: Color,
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            backdrop: Color::rgb(242, 242, 247),
        }
    }
}

/// A rendered preview as RGBA8 pixels.
///
/// The backdrop is opaque, so every pixel has alpha 255 and premultiplied
/// and straight forms coincide.
#[derive(Clone, Debug)]
pub struct PreviewFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl PreviewFrame {
    /// Pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Estimated caption width; the preview has no font shaping.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_ADVANCE_EM
}

/// Rasterize one render request: backdrop, dimmed overlay with its cutout,
/// popup card, image slot, decorative strokes, progress dots and the action
/// button outline. Text is not drawn.
pub fn render_preview(
    req: &RenderRequest<'_>,
    theme: &Theme,
    viewport: Viewport,
    decor: &[DecorStroke],
    opts: PreviewOpts,
) -> TourResult<PreviewFrame> {
    let w = dim_to_u16(viewport.width, "width")?;
    let h = dim_to_u16(viewport.height, "height")?;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    set_color(&mut ctx, opts.backdrop);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));

    let cutout = &req.placement.cutout;
    ctx.set_fill_rule(fill_to_cpu(cutout.fill_rule));
    set_color(&mut ctx, req.overlay_tint);
    ctx.fill_path(&bezpath_to_cpu(&cutout.path));
    ctx.set_fill_rule(vello_cpu::peniko::Fill::NonZero);

    let card = req.placement.popup_frame;
    let radius = theme.dimensions.corner_radius;
    set_color(&mut ctx, theme.colors.container_background);
    ctx.fill_path(&shape_to_cpu(&RoundedRect::from_rect(card, radius)));

    if let Some(slot) = req.image_slot() {
        set_color(&mut ctx, theme.colors.step_indicator.with_alpha(0.12));
        ctx.fill_path(&shape_to_cpu(&RoundedRect::from_rect(
            slot,
            (radius, radius, 0.0, 0.0),
        )));
    }

    for stroke in decor {
        let Some(curve) = stroke.visible_curve() else {
            continue;
        };
        set_color(&mut ctx, stroke.effective_color());
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(stroke.line_width));
        ctx.stroke_path(&shape_to_cpu(&curve));
    }

    let button_row_mid_y = card.y1 - CARD_PADDING - ACTION_BUTTON_HEIGHT / 2.0;

    if req.indicator.visible {
        for i in 0..req.indicator.count {
            let cx = card.x0 + CARD_PADDING + DOT_DIAMETER / 2.0
                + (i as f64) * (DOT_DIAMETER + DOT_SPACING);
            let (r, alpha) = if i == req.indicator.current {
                (DOT_DIAMETER / 2.0 * DOT_ACTIVE_SCALE, 1.0)
            } else {
                (DOT_DIAMETER / 2.0, DOT_INACTIVE_ALPHA)
            };
            set_color(&mut ctx, theme.colors.step_indicator.with_alpha(alpha));
            ctx.fill_path(&shape_to_cpu(&Circle::new((cx, button_row_mid_y), r)));
        }
    }

    let label_width =
        estimate_text_width(&req.buttons.action_label, theme.fonts.next_button.size);
    let button_w = PopupLayout::action_button_width(label_width);
    let button = Rect::new(
        card.x1 - CARD_PADDING - button_w,
        card.y1 - CARD_PADDING - ACTION_BUTTON_HEIGHT,
        card.x1 - CARD_PADDING,
        card.y1 - CARD_PADDING,
    );
    set_color(&mut ctx, theme.colors.next_button_border);
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(1.0));
    ctx.stroke_path(&shape_to_cpu(&RoundedRect::from_rect(
        button,
        ACTION_BUTTON_RADIUS,
    )));

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(PreviewFrame {
        width: u32::from(w),
        height: u32::from(h),
        data: pixmap.data_as_u8_slice().to_vec(),
    })
}

fn dim_to_u16(v: f64, name: &str) -> TourResult<u16> {
    let px = v.ceil();
    if !(1.0..=f64::from(u16::MAX)).contains(&px) {
        return Err(TourError::render(format!(
            "preview {name} must be within 1..={}",
            u16::MAX
        )));
    }
    Ok(px as u16)
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Color) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn fill_to_cpu(rule: FillRule) -> vello_cpu::peniko::Fill {
    match rule {
        FillRule::NonZero => vello_cpu::peniko::Fill::NonZero,
        FillRule::EvenOdd => vello_cpu::peniko::Fill::EvenOdd,
    }
}

fn shape_to_cpu(shape: &impl kurbo::Shape) -> vello_cpu::kurbo::BezPath {
    bezpath_to_cpu(&shape.to_path(TOLERANCE))
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
