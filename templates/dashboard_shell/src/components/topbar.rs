use eframe::egui::{
    self, Align, Align2, CursorIcon, FontId, Id, Label, Layout, Margin, Order, RichText, Rounding,
    Sense, Stroke,
};

use crate::layout::{panel_stroke, LayoutConfig, ShellTheme};

const USER_MENU_ID: &str = "dashboard_user_menu";
const USER_MENU_WIDTH: f32 = 224.0;

#[derive(Clone, Debug)]
pub struct TopbarProps {
    pub company_name: String,
    pub company_logo: Option<String>,
    pub user_name: String,
    pub user_email: String,
    pub user_avatar: Option<String>,
    /// Texto del contador sobre la campana; `None` oculta el contador.
    pub badge: Option<String>,
    pub account_label: String,
    pub user_menu: Vec<UserMenuItem>,
}

impl Default for TopbarProps {
    fn default() -> Self {
        Self {
            company_name: "Mi Empresa".to_string(),
            company_logo: None,
            user_name: "Usuario".to_string(),
            user_email: "usuario@empresa.com".to_string(),
            user_avatar: None,
            badge: None,
            account_label: "Mi Cuenta".to_string(),
            user_menu: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UserMenuItem {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub destructive: bool,
    pub separated: bool,
}

impl UserMenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            destructive: false,
            separated: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Marca la entrada como destructiva y la separa del resto.
    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self.separated = true;
        self
    }
}

pub trait TopbarModel {
    fn theme(&self) -> ShellTheme;
    fn props(&self) -> TopbarProps;
    fn on_menu_toggle(&mut self);
    fn on_notifications_toggle(&mut self);
    fn on_user_menu_item(&mut self, item_id: &str);
}

/// Letra que sustituye al logo cuando la empresa no tiene imagen.
pub fn logo_initial(company_name: &str) -> String {
    company_name
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_default()
}

/// Iniciales del avatar: primera letra de cada palabra, en mayúsculas, máximo dos.
pub fn initials(user_name: &str) -> String {
    user_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

pub fn draw_topbar(ctx: &egui::Context, layout: &LayoutConfig, model: &mut dyn TopbarModel) {
    let theme = model.theme();
    let props = model.props();
    let pinned = layout.sidebar_pinned(ctx.screen_rect().width());

    egui::TopBottomPanel::top("dashboard_topbar")
        .exact_height(layout.topbar_height)
        .frame(
            egui::Frame::none()
                .fill(theme.header_background)
                .stroke(panel_stroke(&theme))
                .inner_margin(Margin::symmetric(16.0, 10.0)),
        )
        .show(ctx, |ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                if !pinned {
                    let response = ui
                        .add(egui::Button::new(RichText::new("☰").size(18.0)).frame(false))
                        .on_hover_text("Mostrar menú");
                    if response.clicked() {
                        model.on_menu_toggle();
                    }
                }

                draw_logo(ui, &theme, &props);
                if ui.available_width() > 360.0 {
                    ui.strong(
                        RichText::new(&props.company_name)
                            .color(theme.text_primary)
                            .size(16.0),
                    );
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    draw_user_menu(ui, &theme, &props, model);
                    draw_bell(ui, &theme, props.badge.as_deref(), model);
                });
            });
        });
}

fn draw_logo(ui: &mut egui::Ui, theme: &ShellTheme, props: &TopbarProps) {
    if let Some(logo) = props.company_logo.as_ref() {
        ui.add(
            egui::Image::new(logo.as_str())
                .fit_to_exact_size(egui::vec2(32.0, 32.0))
                .rounding(Rounding::same(6.0)),
        )
        .on_hover_text(&props.company_name);
        return;
    }

    let (rect, _) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, Rounding::same(6.0), theme.accent);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        logo_initial(&props.company_name),
        FontId::proportional(14.0),
        theme.accent_text,
    );
}

fn draw_bell(
    ui: &mut egui::Ui,
    theme: &ShellTheme,
    badge: Option<&str>,
    model: &mut dyn TopbarModel,
) {
    let response = ui
        .add(
            egui::Button::new(RichText::new("🔔").size(18.0))
                .frame(false)
                .min_size(egui::vec2(36.0, 36.0)),
        )
        .on_hover_text("Notificaciones");

    if let Some(badge) = badge {
        let center = response.rect.right_top() + egui::vec2(-6.0, 6.0);
        let painter = ui.painter();
        painter.circle_filled(center, 9.0, theme.danger);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            badge,
            FontId::proportional(10.0),
            theme.accent_text,
        );
    }

    if response.clicked() {
        model.on_notifications_toggle();
    }
}

/// Avatar, identidad y chevron forman un único disparador del menú de usuario.
fn draw_user_menu(
    ui: &mut egui::Ui,
    theme: &ShellTheme,
    props: &TopbarProps,
    model: &mut dyn TopbarModel,
) {
    let popup_id = Id::new(USER_MENU_ID);
    let show_identity = ui.available_width() > 520.0;

    // El layout padre va de derecha a izquierda: chevron, identidad, avatar.
    let trigger = egui::Frame::none()
        .rounding(Rounding::same(8.0))
        .inner_margin(Margin::symmetric(8.0, 4.0))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.x = 8.0;
            ui.add(Label::new(RichText::new("⏷").color(theme.text_muted)).selectable(false));
            if show_identity {
                ui.with_layout(Layout::top_down(Align::Max), |ui| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    ui.add(
                        Label::new(
                            RichText::new(&props.user_name)
                                .color(theme.text_primary)
                                .strong(),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        Label::new(
                            RichText::new(&props.user_email)
                                .color(theme.text_muted)
                                .size(11.0),
                        )
                        .selectable(false),
                    );
                });
            }
            draw_avatar(ui, theme, props);
        })
        .response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);

    if trigger.clicked() {
        ui.memory_mut(|memory| memory.toggle_popup(popup_id));
    }

    let open = ui.memory(|memory| memory.is_popup_open(popup_id));
    if trigger.hovered() || open {
        ui.painter().rect_stroke(
            trigger.rect,
            Rounding::same(8.0),
            Stroke::new(1.0, theme.border),
        );
    }
    if !open {
        return;
    }

    let mut picked = false;
    let popup = egui::Area::new(popup_id)
        .order(Order::Foreground)
        .constrain(true)
        .fixed_pos(trigger.rect.right_bottom() + egui::vec2(0.0, 4.0))
        .pivot(Align2::RIGHT_TOP)
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(USER_MENU_WIDTH);
                ui.with_layout(Layout::top_down_justified(Align::Min), |ui| {
                    ui.label(RichText::new(&props.account_label).strong());
                    ui.separator();
                    for item in props.user_menu.iter() {
                        if item.separated {
                            ui.separator();
                        }
                        let label = match &item.icon {
                            Some(icon) => format!("{} {}", icon, item.label),
                            None => item.label.clone(),
                        };
                        let mut text = RichText::new(label);
                        if item.destructive {
                            text = text.color(theme.danger);
                        }
                        if ui.add(egui::Button::new(text).frame(false)).clicked() {
                            model.on_user_menu_item(&item.id);
                            picked = true;
                        }
                    }
                });
            });
        });

    let escape = ui.input(|i| i.key_pressed(egui::Key::Escape));
    let outside = trigger.clicked_elsewhere() && popup.response.clicked_elsewhere();
    if picked || escape || outside {
        ui.memory_mut(|memory| memory.close_popup());
    }
}

fn draw_avatar(ui: &mut egui::Ui, theme: &ShellTheme, props: &TopbarProps) {
    if let Some(avatar) = props.user_avatar.as_ref() {
        ui.add(
            egui::Image::new(avatar.as_str())
                .fit_to_exact_size(egui::vec2(32.0, 32.0))
                .rounding(Rounding::same(16.0)),
        );
        return;
    }

    let (rect, _) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.circle_filled(rect.center(), 16.0, theme.accent);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initials(&props.user_name),
        FontId::proportional(13.0),
        theme.accent_text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Juan Pérez"), "JP");
        assert_eq!(initials("ana maría lópez"), "AM");
        assert_eq!(initials("Usuario"), "U");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn logo_falls_back_to_first_character() {
        assert_eq!(logo_initial("Mi Empresa"), "M");
        assert_eq!(logo_initial("Ñandú SA"), "Ñ");
        assert_eq!(logo_initial(""), "");
    }

    #[derive(Default)]
    struct Recorder {
        picked: Vec<String>,
        bell_clicks: usize,
    }

    impl TopbarModel for Recorder {
        fn theme(&self) -> ShellTheme {
            ShellTheme::default()
        }

        fn props(&self) -> TopbarProps {
            TopbarProps {
                user_name: "Juan Pérez".into(),
                user_email: "juan@empresa.com".into(),
                user_menu: vec![
                    UserMenuItem::new("profile", "Perfil"),
                    UserMenuItem::new("settings", "Configuración"),
                    UserMenuItem::new("logout", "Cerrar Sesión").destructive(),
                ],
                ..TopbarProps::default()
            }
        }

        fn on_menu_toggle(&mut self) {}

        fn on_notifications_toggle(&mut self) {
            self.bell_clicks += 1;
        }

        fn on_user_menu_item(&mut self, item_id: &str) {
            self.picked.push(item_id.to_string());
        }
    }

    struct Harness {
        ctx: egui::Context,
        width: f32,
        model: Recorder,
    }

    impl Harness {
        fn new(width: f32) -> Self {
            Self {
                ctx: egui::Context::default(),
                width,
                model: Recorder::default(),
            }
        }

        fn frame(&mut self, events: Vec<egui::Event>) {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(self.width, 800.0),
                )),
                events,
                ..Default::default()
            };
            let model = &mut self.model;
            let _ = self
                .ctx
                .run(input, |ctx| draw_topbar(ctx, &LayoutConfig::default(), model));
        }

        fn click(&mut self, pos: egui::Pos2) {
            let button = |pressed| egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::NONE,
            };
            self.frame(vec![egui::Event::PointerMoved(pos)]);
            self.frame(vec![button(true)]);
            self.frame(vec![button(false)]);
            self.frame(Vec::new());
        }

        fn press_escape(&mut self) {
            self.frame(vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }]);
            self.frame(Vec::new());
        }

        fn menu_open(&self) -> bool {
            self.ctx
                .memory(|memory| memory.is_popup_open(Id::new(USER_MENU_ID)))
        }

        /// Posiciones horizontales sobre el eje del topbar que abren el menú.
        fn trigger_hits(&mut self, from: f32) -> Vec<f32> {
            let mut hits = Vec::new();
            let mut x = from;
            while x < self.width {
                self.click(egui::pos2(x, 32.0));
                if self.menu_open() {
                    hits.push(x);
                    self.ctx.memory_mut(|memory| memory.close_popup());
                }
                x += 2.0;
            }
            hits
        }
    }

    #[test]
    fn avatar_is_part_of_the_menu_trigger() {
        let mut harness = Harness::new(600.0);
        let hits = harness.trigger_hits(400.0);

        // Chevron y avatar de 32 px, más márgenes.
        assert!(hits.len() * 2 >= 48, "zona del disparador: {:?}", hits);
        assert!(harness.model.picked.is_empty());
    }

    #[test]
    fn identity_widens_the_trigger_on_wide_topbars() {
        let mut narrow = Harness::new(600.0);
        let mut wide = Harness::new(1280.0);
        let narrow_hits = narrow.trigger_hits(400.0);
        let wide_hits = wide.trigger_hits(900.0);

        assert!(wide_hits.len() > narrow_hits.len() + 20);
    }

    #[test]
    fn picking_an_item_reports_it_and_closes_the_menu() {
        let mut harness = Harness::new(600.0);
        let hits = harness.trigger_hits(400.0);
        let trigger_x = hits[hits.len() / 2];

        harness.click(egui::pos2(trigger_x, 32.0));
        assert!(harness.menu_open());

        let mut y = 60.0;
        while harness.model.picked.is_empty() && y < 400.0 {
            harness.click(egui::pos2(trigger_x - 60.0, y));
            y += 3.0;
        }

        assert_eq!(harness.model.picked, vec!["profile".to_string()]);
        assert!(!harness.menu_open());
        assert_eq!(harness.model.bell_clicks, 0);
    }

    #[test]
    fn outside_click_and_escape_close_the_menu() {
        let mut harness = Harness::new(600.0);
        let hits = harness.trigger_hits(400.0);
        let trigger_x = hits[hits.len() / 2];

        harness.click(egui::pos2(trigger_x, 32.0));
        assert!(harness.menu_open());
        harness.click(egui::pos2(100.0, 600.0));
        assert!(!harness.menu_open());

        harness.click(egui::pos2(trigger_x, 32.0));
        assert!(harness.menu_open());
        harness.press_escape();
        assert!(!harness.menu_open());
        assert!(harness.model.picked.is_empty());
    }
}
