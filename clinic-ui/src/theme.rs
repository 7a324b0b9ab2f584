use egui::Color32;

/// Immutable style table shared by every rendering component.
///
/// Widgets receive `&Theme` and never mutate it; there is no global
/// color state anywhere in the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Main window background.
    pub bg: Color32,
    /// Sidebar panel fill.
    pub sidebar: Color32,
    /// Inactive sidebar nav text.
    pub sidebar_text: Color32,
    /// Primary action color (Add Patient, patient dialog header).
    pub accent: Color32,
    /// Secondary action color (New Appointment, appointment dialog header).
    pub green: Color32,
    /// Content card and dialog surface fill.
    pub card: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub border: Color32,
    /// Inline validation message color.
    pub error: Color32,
    /// Per-channel offset applied to button fills while hovered.
    pub hover_darken: u8,
    /// Corner radius for rounded buttons and dialog frames.
    pub corner_radius: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color32::from_rgb(0xf0, 0xf4, 0xf8),
            sidebar: Color32::from_rgb(0x1a, 0x23, 0x40),
            sidebar_text: Color32::from_rgb(0xa8, 0xb8, 0xd0),
            accent: Color32::from_rgb(0x4f, 0x7e, 0xf8),
            green: Color32::from_rgb(0x2e, 0xc8, 0x7a),
            card: Color32::WHITE,
            text: Color32::from_rgb(0x1e, 0x2d, 0x40),
            muted: Color32::from_rgb(0x8a, 0x99, 0xb0),
            border: Color32::from_rgb(0xdd, 0xe3, 0xef),
            error: Color32::from_rgb(0xe7, 0x4c, 0x3c),
            hover_darken: 20,
            corner_radius: 10,
        }
    }
}

impl Theme {
    /// Applies the palette to the egui visuals once at startup.
    pub fn apply(
        &self,
        ctx: &egui::Context,
    ) {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = self.bg;
        visuals.window_fill = self.card;
        visuals.window_stroke = egui::Stroke::new(1.0, self.border);
        ctx.set_visuals(visuals);
    }
}
