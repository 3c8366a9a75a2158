//! Calculator themes
//!
//! Three palettes, switchable at runtime: light, dark and blue. Each one is
//! applied to the whole egui context; no widget carries its own colors.

use std::fmt;
use std::str::FromStr;

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use serde::{Deserialize, Serialize};

use crate::storage::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
    Blue,
}

/// Colors a theme is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub button: Color32,
    pub field: Color32,
    pub text: Color32,
    pub border: Color32,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Light, ThemeKind::Dark, ThemeKind::Blue];

    pub fn name(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
            ThemeKind::Blue => "blue",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeKind::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeKind::Light => Palette {
                background: Color32::from_rgb(0xf0, 0xf0, 0xf0),
                button: Color32::from_rgb(0xe0, 0xe0, 0xe0),
                field: Color32::WHITE,
                text: Color32::BLACK,
                border: Color32::GRAY,
            },
            ThemeKind::Dark => Palette {
                background: Color32::from_rgb(0x30, 0x30, 0x30),
                button: Color32::from_rgb(0x40, 0x40, 0x40),
                field: Color32::from_rgb(0x20, 0x20, 0x20),
                text: Color32::WHITE,
                border: Color32::from_rgb(0x50, 0x50, 0x50),
            },
            ThemeKind::Blue => Palette {
                background: Color32::from_rgb(0xe6, 0xf3, 0xff),
                button: Color32::from_rgb(0xcc, 0xe0, 0xff),
                field: Color32::WHITE,
                text: Color32::BLACK,
                border: Color32::from_rgb(0x99, 0xc2, 0xff),
            },
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StorageError::Invalid(format!("unknown theme: {s}")))
    }
}

/// Font sizes and spacing shared by every theme.
pub struct CalcTheme {
    pub kind: ThemeKind,
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub font_size_display: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self::new(ThemeKind::default())
    }
}

impl CalcTheme {
    pub fn new(kind: ThemeKind) -> Self {
        Self {
            kind,
            font_size_body: 14.0,
            font_size_heading: 20.0,
            font_size_small: 11.0,
            font_size_display: 28.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }

    pub fn palette(&self) -> Palette {
        self.kind.palette()
    }

    /// Build the egui style for this theme.
    pub fn style(&self) -> Style {
        let palette = self.palette();
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = if self.kind.is_dark() { Visuals::dark() } else { Visuals::light() };

        visuals.override_text_color = Some(palette.text);
        visuals.window_fill = palette.background;
        visuals.panel_fill = palette.background;
        visuals.faint_bg_color = palette.background;
        visuals.extreme_bg_color = palette.field;
        visuals.window_rounding = Rounding::same(2.0);
        visuals.menu_rounding = Rounding::same(2.0);
        visuals.window_stroke = Stroke::new(1.0, palette.border);

        let paint = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::new(1.0, palette.border);
            ws.fg_stroke = Stroke::new(1.0, palette.text);
            ws.rounding = Rounding::same(2.0);
        };
        paint(&mut visuals.widgets.noninteractive, palette.background);
        paint(&mut visuals.widgets.inactive, palette.button);
        paint(&mut visuals.widgets.hovered, palette.button.gamma_multiply(0.9));
        paint(&mut visuals.widgets.active, palette.border);
        paint(&mut visuals.widgets.open, palette.button);

        visuals.selection.bg_fill = palette.border;
        visuals.selection.stroke = Stroke::new(1.0, palette.text);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        style
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    /// Frame around the calculator display: field color, 1px border
    pub fn display_frame(&self) -> egui::Frame {
        let palette = self.palette();
        egui::Frame::none()
            .fill(palette.field)
            .stroke(Stroke::new(1.0, palette.border))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    palette: Palette,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(palette.background)
        .stroke(Stroke::new(1.0, palette.border))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Drop Tab and Cmd+/- key events so keypad shortcuts don't move focus or
/// zoom the window. Call at the start of `update()`.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| {
            !matches!(event,
                egui::Event::Key { key: egui::Key::Tab, .. }
            ) && !matches!(event,
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command
                        && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals)
            )
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_round_trip() {
        for kind in ThemeKind::ALL {
            assert_eq!(kind.name().parse::<ThemeKind>().unwrap(), kind);
        }
        assert_eq!(" Dark ".parse::<ThemeKind>().unwrap(), ThemeKind::Dark);
        assert!("sepia".parse::<ThemeKind>().is_err());
    }

    #[test]
    fn test_theme_serde_names() {
        assert_eq!(serde_json::to_string(&ThemeKind::Blue).unwrap(), "\"blue\"");
        let kind: ThemeKind = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(kind, ThemeKind::Dark);
    }

    #[test]
    fn test_palettes_contrast() {
        for kind in ThemeKind::ALL {
            let p = kind.palette();
            assert_ne!(p.text, p.background);
            assert_ne!(p.text, p.field);
        }
        assert_eq!(ThemeKind::Dark.palette().text, Color32::WHITE);
        assert_eq!(ThemeKind::Blue.palette().background, Color32::from_rgb(0xe6, 0xf3, 0xff));
    }

    #[test]
    fn test_style_uses_palette() {
        let theme = CalcTheme::new(ThemeKind::Dark);
        let style = theme.style();
        assert!(style.visuals.dark_mode);
        assert_eq!(style.visuals.panel_fill, Color32::from_rgb(0x30, 0x30, 0x30));
        assert_eq!(style.visuals.override_text_color, Some(Color32::WHITE));

        let style = CalcTheme::default().style();
        assert!(!style.visuals.dark_mode);
        assert_eq!(style.visuals.widgets.inactive.bg_fill, Color32::from_rgb(0xe0, 0xe0, 0xe0));
    }
}
