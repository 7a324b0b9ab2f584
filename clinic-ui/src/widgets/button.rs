use egui::{Align2, Color32, CornerRadius, CursorIcon, FontId, Response, Sense, Ui, Vec2};

use crate::theme::Theme;

/// Returns `color` with every RGB channel reduced by `amount`, saturating
/// at zero. Alpha is untouched.
///
/// The hover state repaints with the darkened fill each frame and the
/// normal state repaints with the stored base, so pointer-leave always
/// restores the exact original color.
pub fn darken(
    color: Color32,
    amount: u8,
) -> Color32 {
    Color32::from_rgb(
        color.r().saturating_sub(amount),
        color.g().saturating_sub(amount),
        color.b().saturating_sub(amount),
    )
}

/// Filled rounded-rectangle button with a centered white label.
///
/// A two-state presentation widget: normal (base fill) and hovered
/// (darkened fill). Click handling stays with the caller through the
/// returned [`Response`].
pub struct RoundedButton<'a> {
    label: &'a str,
    fill: Color32,
    size: Vec2,
}

impl<'a> RoundedButton<'a> {
    pub fn new(
        label: &'a str,
        fill: Color32,
    ) -> Self {
        Self {
            label,
            fill,
            size: Vec2::new(160.0, 36.0),
        }
    }

    pub fn size(
        mut self,
        size: impl Into<Vec2>,
    ) -> Self {
        self.size = size.into();
        self
    }

    pub fn show(
        self,
        ui: &mut Ui,
        theme: &Theme,
    ) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() {
                darken(self.fill, theme.hover_darken)
            } else {
                self.fill
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(theme.corner_radius), fill);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(14.0),
                Color32::WHITE,
            );
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn darken_subtracts_the_offset_from_each_channel() {
        let base = Color32::from_rgb(0x4f, 0x7e, 0xf8);

        let hovered = darken(base, 20);

        assert_eq!(hovered, Color32::from_rgb(0x4f - 20, 0x7e - 20, 0xf8 - 20));
    }

    #[test]
    fn darken_clamps_each_channel_at_zero() {
        let base = Color32::from_rgb(5, 0, 200);

        let hovered = darken(base, 20);

        assert_eq!(hovered, Color32::from_rgb(0, 0, 180));
    }

    #[test]
    fn darken_leaves_the_base_color_untouched() {
        let base = Color32::from_rgb(0x2e, 0xc8, 0x7a);

        let _ = darken(base, 20);

        // The normal state repaints with the stored base, so leave always
        // restores this exact value.
        assert_eq!(base, Color32::from_rgb(0x2e, 0xc8, 0x7a));
    }

    #[test]
    fn darken_by_zero_is_identity() {
        let base = Color32::from_rgb(10, 20, 30);

        assert_eq!(darken(base, 0), base);
    }
}
