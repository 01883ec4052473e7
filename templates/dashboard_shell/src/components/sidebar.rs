use eframe::egui::{self, Align, Layout, Margin, RichText, Sense, Vec2};

use crate::layout::{draw_backdrop, panel_stroke, LayoutConfig, ShellTheme};

#[derive(Clone, Debug, Default)]
pub struct SidebarProps {
    /// Visibilidad solicitada cuando el menú no está fijo.
    pub open: bool,
    pub nodes: Vec<MenuNode>,
}

/// Fila renderizable del menú lateral.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuNode {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub kind: MenuNodeKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MenuNodeKind {
    Link { active: bool },
    Group { expanded: bool, children: Vec<MenuNode> },
}

pub trait SidebarModel {
    fn theme(&self) -> ShellTheme;
    fn props(&self) -> SidebarProps;
    fn on_group_toggled(&mut self, group_id: &str);
    fn on_link_selected(&mut self, link_id: &str);
    fn on_close(&mut self);
}

/// Dibuja el menú lateral: fijo en ventanas anchas, superpuesto con velo en
/// ventanas estrechas cuando `props.open` es verdadero.
pub fn draw_sidebar(ctx: &egui::Context, layout: &LayoutConfig, model: &mut dyn SidebarModel) {
    let theme = model.theme();
    let props = model.props();

    let frame = egui::Frame::none()
        .fill(theme.surface_background)
        .stroke(panel_stroke(&theme))
        .inner_margin(Margin::symmetric(12.0, 16.0));

    if layout.sidebar_pinned(ctx.screen_rect().width()) {
        egui::SidePanel::left("dashboard_sidebar")
            .resizable(false)
            .exact_width(layout.sidebar_width)
            .frame(frame)
            .show(ctx, |ui| draw_menu(ui, &props.nodes, layout, &theme, model));
        return;
    }

    if !props.open {
        return;
    }

    if draw_backdrop(ctx, "dashboard_sidebar_backdrop", &theme, layout) {
        model.on_close();
        return;
    }

    let screen = ctx.screen_rect();
    let height = screen.height() - layout.topbar_height;
    egui::Area::new(egui::Id::new("dashboard_sidebar_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(screen.left(), screen.top() + layout.topbar_height))
        .show(ctx, |ui| {
            frame.show(ui, |ui| {
                ui.set_width(layout.sidebar_width);
                ui.set_height(height);
                draw_menu(ui, &props.nodes, layout, &theme, model);
            });
        });
}

fn draw_menu(
    ui: &mut egui::Ui,
    nodes: &[MenuNode],
    layout: &LayoutConfig,
    theme: &ShellTheme,
    model: &mut dyn SidebarModel,
) {
    egui::ScrollArea::vertical()
        .id_source("dashboard_sidebar_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 4.0;
            for node in nodes {
                draw_node(ui, node, 0, layout, theme, model);
            }
        });
}

fn draw_node(
    ui: &mut egui::Ui,
    node: &MenuNode,
    depth: usize,
    layout: &LayoutConfig,
    theme: &ShellTheme,
    model: &mut dyn SidebarModel,
) {
    let indent = depth as f32 * layout.indent_per_level;

    match &node.kind {
        MenuNodeKind::Group { expanded, children } => {
            let chevron = if *expanded { "⏷" } else { "⏵" };
            let response = menu_row(ui, theme, node, indent, Some(chevron), false);
            if response.clicked() {
                model.on_group_toggled(&node.id);
            }
            if *expanded {
                for child in children {
                    draw_node(ui, child, depth + 1, layout, theme, model);
                }
            }
        }
        MenuNodeKind::Link { active } => {
            let response = menu_row(ui, theme, node, indent, None, *active);
            if response.clicked() {
                model.on_link_selected(&node.id);
            }
        }
    }
}

fn menu_row(
    ui: &mut egui::Ui,
    theme: &ShellTheme,
    node: &MenuNode,
    indent: f32,
    chevron: Option<&str>,
    active: bool,
) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), 36.0), Sense::click());

    if active {
        ui.painter().rect_filled(rect, 6.0, theme.accent);
    } else if response.hovered() {
        ui.painter().rect_filled(rect, 6.0, theme.accent_soft);
    }

    let text_color = if active {
        theme.accent_text
    } else {
        theme.text_primary
    };

    let mut row = ui.child_ui(rect.shrink2(Vec2::new(12.0, 0.0)), Layout::left_to_right(Align::Center));
    row.add_space(indent);
    if let Some(icon) = node.icon.as_ref() {
        row.label(RichText::new(icon).color(text_color).size(16.0));
    }
    row.label(RichText::new(&node.label).color(text_color));
    if let Some(chevron) = chevron {
        row.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(chevron).color(theme.text_muted).size(12.0));
        });
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}
