use eframe::egui::{self, Key, Modifiers};
use std::collections::BTreeMap;
use std::fmt;

/// Registro de atajos de teclado del shell, indexado por id.
#[derive(Clone, Debug, Default)]
pub struct ShortcutManager {
    shortcuts: BTreeMap<String, Shortcut>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortcut {
    pub id: String,
    pub key: Key,
    pub modifiers: ShortcutModifiers,
    pub description: String,
    pub category: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ShortcutModifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ShortcutModifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Default::default()
        }
    }

    /// `ctrl` equivale a la tecla Cmd en macOS.
    pub fn matches(&self, mods: &Modifiers) -> bool {
        self.ctrl == mods.command && self.shift == mods.shift && self.alt == mods.alt
    }
}

impl fmt::Display for ShortcutModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        f.write_str(&parts.join("+"))
    }
}

impl Shortcut {
    pub fn new(
        id: impl Into<String>,
        key: Key,
        modifiers: ShortcutModifiers,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            key,
            modifiers,
            description: description.into(),
            category: category.into(),
        }
    }

    /// `true` si el atajo se pulsó en este frame.
    pub fn matches(&self, ctx: &egui::Context) -> bool {
        ctx.input(|i| i.key_pressed(self.key) && self.modifiers.matches(&i.modifiers))
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mods = self.modifiers.to_string();
        if mods.is_empty() {
            write!(f, "{}", self.key.name())
        } else {
            write!(f, "{}+{}", mods, self.key.name())
        }
    }
}

impl ShortcutManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shortcut: Shortcut) {
        self.shortcuts.insert(shortcut.id.clone(), shortcut);
    }

    pub fn add_many(&mut self, shortcuts: impl IntoIterator<Item = Shortcut>) {
        for shortcut in shortcuts {
            self.add(shortcut);
        }
    }

    /// Ids de los atajos pulsados en este frame.
    pub fn pressed(&self, ctx: &egui::Context) -> Vec<String> {
        self.shortcuts
            .values()
            .filter(|s| s.matches(ctx))
            .map(|s| s.id.clone())
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Shortcut> {
        self.shortcuts.get(id)
    }

    /// Atajos de una categoría, en orden de id.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Shortcut> {
        self.shortcuts
            .values()
            .filter(move |s| s.category == category)
    }

    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<_> = self
            .shortcuts
            .values()
            .map(|s| s.category.clone())
            .collect();
        cats.sort();
        cats.dedup();
        cats
    }
}

pub mod presets {
    use super::*;

    pub const TOGGLE_MENU: &str = "shell.toggle_menu";
    pub const TOGGLE_NOTIFICATIONS: &str = "shell.toggle_notifications";
    pub const CLOSE_OVERLAYS: &str = "shell.close_overlays";

    pub fn shell_shortcuts() -> Vec<Shortcut> {
        vec![
            Shortcut::new(
                TOGGLE_MENU,
                Key::B,
                ShortcutModifiers::ctrl(),
                "Mostrar u ocultar el menú",
                "Shell",
            ),
            Shortcut::new(
                TOGGLE_NOTIFICATIONS,
                Key::N,
                ShortcutModifiers::ctrl_shift(),
                "Mostrar u ocultar las notificaciones",
                "Shell",
            ),
            Shortcut::new(
                CLOSE_OVERLAYS,
                Key::Escape,
                ShortcutModifiers::none(),
                "Cerrar paneles superpuestos",
                "Shell",
            ),
        ]
    }
}
