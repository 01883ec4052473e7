use eframe::egui::{self, Color32, FontFamily, FontId, Rounding, Stroke, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct ThemeTokens {
    pub palette: ThemePalette,
    pub spacing: ThemeSpacing,
    pub rounding: ThemeRounding,
    pub typography: ThemeTypography,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::from_preset(ThemePreset::default())
    }
}

impl ThemeTokens {
    pub fn from_preset(preset: ThemePreset) -> Self {
        let palette = match preset {
            ThemePreset::Dark => ThemePalette::dark(),
            ThemePreset::Light => ThemePalette::light(),
        };
        Self {
            palette,
            spacing: ThemeSpacing::default(),
            rounding: ThemeRounding::default(),
            typography: ThemeTypography::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Debug)]
pub struct ThemePalette {
    pub dark_mode: bool,
    pub root_background: Color32,
    pub panel_background: Color32,
    pub header_background: Color32,
    pub hover_background: Color32,
    pub text_primary: Color32,
    pub text_weak: Color32,
    pub border: Color32,
    pub primary: Color32,
    pub on_primary: Color32,
    pub selection_background: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub info: Color32,
    pub backdrop: Color32,
}

impl ThemePalette {
    fn dark() -> Self {
        Self {
            dark_mode: true,
            root_background: Color32::from_rgb(18, 18, 20),
            panel_background: Color32::from_rgb(28, 28, 31),
            header_background: Color32::from_rgb(24, 24, 27),
            hover_background: Color32::from_rgb(39, 39, 42),
            text_primary: Color32::from_rgb(244, 244, 245),
            text_weak: Color32::from_rgb(161, 161, 170),
            border: Color32::from_rgb(48, 48, 52),
            primary: Color32::from_rgb(250, 250, 250),
            on_primary: Color32::from_rgb(24, 24, 27),
            selection_background: Color32::from_rgb(42, 60, 88),
            success: Color32::from_rgb(34, 197, 94),
            warning: Color32::from_rgb(234, 179, 8),
            danger: Color32::from_rgb(220, 38, 38),
            info: Color32::from_rgb(59, 130, 246),
            backdrop: Color32::from_rgba_unmultiplied(9, 9, 11, 204),
        }
    }

    fn light() -> Self {
        Self {
            dark_mode: false,
            root_background: Color32::from_rgb(255, 255, 255),
            panel_background: Color32::from_rgb(255, 255, 255),
            header_background: Color32::from_rgb(250, 250, 250),
            hover_background: Color32::from_rgb(244, 244, 245),
            text_primary: Color32::from_rgb(9, 9, 11),
            text_weak: Color32::from_rgb(113, 113, 122),
            border: Color32::from_rgb(228, 228, 231),
            primary: Color32::from_rgb(24, 24, 27),
            on_primary: Color32::from_rgb(250, 250, 250),
            selection_background: Color32::from_rgb(204, 229, 255),
            success: Color32::from_rgb(22, 163, 74),
            warning: Color32::from_rgb(202, 138, 4),
            danger: Color32::from_rgb(220, 38, 38),
            info: Color32::from_rgb(37, 99, 235),
            backdrop: Color32::from_rgba_unmultiplied(255, 255, 255, 204),
        }
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        ThemePalette::dark()
    }
}

#[derive(Clone, Debug)]
pub struct ThemeSpacing {
    pub item_spacing: Vec2,
    pub button_padding: Vec2,
    pub interact_size_y: f32,
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        Self {
            item_spacing: Vec2::new(12.0, 8.0),
            button_padding: Vec2::new(12.0, 6.0),
            interact_size_y: 28.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThemeRounding {
    pub window: Rounding,
    pub menu: Rounding,
    pub widget: Rounding,
}

impl Default for ThemeRounding {
    fn default() -> Self {
        Self {
            window: Rounding::same(8.0),
            menu: Rounding::same(6.0),
            widget: Rounding::same(6.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThemeTypography {
    pub heading: FontId,
    pub body: FontId,
    pub body_small: FontId,
}

impl Default for ThemeTypography {
    fn default() -> Self {
        Self {
            heading: FontId::new(28.0, FontFamily::Proportional),
            body: FontId::new(14.0, FontFamily::Proportional),
            body_small: FontId::new(12.0, FontFamily::Proportional),
        }
    }
}

pub fn apply(ctx: &egui::Context, tokens: &ThemeTokens) {
    let mut style = (*ctx.style()).clone();
    style.visuals = build_visuals(tokens);
    style.spacing.item_spacing = tokens.spacing.item_spacing;
    style.spacing.button_padding = tokens.spacing.button_padding;
    style.spacing.interact_size.y = tokens.spacing.interact_size_y;
    style
        .text_styles
        .insert(egui::TextStyle::Heading, tokens.typography.heading.clone());
    style
        .text_styles
        .insert(egui::TextStyle::Body, tokens.typography.body.clone());
    style
        .text_styles
        .insert(egui::TextStyle::Button, tokens.typography.body.clone());
    style
        .text_styles
        .insert(egui::TextStyle::Small, tokens.typography.body_small.clone());

    ctx.set_style(style);
}

fn build_visuals(tokens: &ThemeTokens) -> egui::Visuals {
    let palette = &tokens.palette;
    let mut visuals = if palette.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.window_fill = palette.panel_background;
    visuals.panel_fill = palette.root_background;
    visuals.selection.bg_fill = palette.selection_background;
    visuals.window_rounding = tokens.rounding.window;
    visuals.menu_rounding = tokens.rounding.menu;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.noninteractive.rounding = tokens.rounding.widget;
    visuals.widgets.inactive.weak_bg_fill = palette.panel_background;
    visuals.widgets.inactive.rounding = tokens.rounding.widget;
    visuals.widgets.hovered.weak_bg_fill = palette.hover_background;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.hovered.rounding = tokens.rounding.widget;
    visuals.widgets.active.weak_bg_fill = palette.hover_background;
    visuals.widgets.active.rounding = tokens.rounding.widget;
    visuals.widgets.open = visuals.widgets.active.clone();

    visuals
}
