use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Grupos desplegados al arrancar cuando la configuración no indica otros.
pub const DEFAULT_EXPANDED_GROUPS: &[&str] = &["analytics"];

/// Violaciones de contrato detectadas al construir el menú.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("el grupo de menú '{0}' no contiene entradas")]
    EmptyGroup(String),
    #[error("el enlace de menú '{0}' no tiene destino")]
    EmptyHref(String),
    #[error("el identificador de menú '{0}' está duplicado")]
    DuplicateId(String),
    #[error("'{0}' no corresponde a ningún grupo del menú")]
    UnknownGroup(String),
}

/// Entrada del menú lateral: un enlace navegable o un grupo desplegable.
///
/// Al deserializar, una entrada con `href` y `children` a la vez (o sin
/// ninguno de los dos) se rechaza.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuEntry {
    Group(MenuGroup),
    Link(MenuLink),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuLink {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuGroup {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn link(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        MenuEntry::Link(MenuLink {
            id: id.into(),
            label: label.into(),
            icon: None,
            href: href.into(),
        })
    }

    pub fn group(id: impl Into<String>, label: impl Into<String>, children: Vec<MenuEntry>) -> Self {
        MenuEntry::Group(MenuGroup {
            id: id.into(),
            label: label.into(),
            icon: None,
            children,
        })
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        match &mut self {
            MenuEntry::Link(link) => link.icon = Some(icon.into()),
            MenuEntry::Group(group) => group.icon = Some(icon.into()),
        }
        self
    }

    pub fn id(&self) -> &str {
        match self {
            MenuEntry::Link(link) => &link.id,
            MenuEntry::Group(group) => &group.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Link(link) => &link.label,
            MenuEntry::Group(group) => &group.label,
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            MenuEntry::Link(link) => link.icon.as_deref(),
            MenuEntry::Group(group) => group.icon.as_deref(),
        }
    }

    /// Los grupos nunca están activos; el estado no se propaga hacia arriba.
    pub fn is_active(&self, current_path: &str) -> bool {
        match self {
            MenuEntry::Link(link) => path_matches(&link.href, current_path),
            MenuEntry::Group(_) => false,
        }
    }
}

/// `true` si `current_path` es `href` o una ruta descendiente (`href + "/..."`).
pub fn path_matches(href: &str, current_path: &str) -> bool {
    current_path == href
        || current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Árbol de menú validado. Inmutable tras su construcción.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
}

impl MenuTree {
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, MenuError> {
        let mut seen = HashSet::new();
        validate_entries(&entries, &mut seen)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&MenuEntry> {
        fn search<'a>(entries: &'a [MenuEntry], id: &str) -> Option<&'a MenuEntry> {
            for entry in entries {
                if entry.id() == id {
                    return Some(entry);
                }
                if let MenuEntry::Group(group) = entry {
                    if let Some(found) = search(&group.children, id) {
                        return Some(found);
                    }
                }
            }
            None
        }

        search(&self.entries, id)
    }

    pub fn is_group(&self, id: &str) -> bool {
        matches!(self.find(id), Some(MenuEntry::Group(_)))
    }

    /// Ids de todos los grupos, en orden de recorrido en profundidad.
    pub fn group_ids(&self) -> Vec<&str> {
        fn collect<'a>(entries: &'a [MenuEntry], ids: &mut Vec<&'a str>) {
            for entry in entries {
                if let MenuEntry::Group(group) = entry {
                    ids.push(&group.id);
                    collect(&group.children, ids);
                }
            }
        }

        let mut ids = Vec::new();
        collect(&self.entries, &mut ids);
        ids
    }

    /// Primer enlace, en orden de recorrido en profundidad, activo para la ruta.
    pub fn leaf_for_path(&self, current_path: &str) -> Option<&MenuLink> {
        fn search<'a>(entries: &'a [MenuEntry], path: &str) -> Option<&'a MenuLink> {
            entries.iter().find_map(|entry| match entry {
                MenuEntry::Link(link) if path_matches(&link.href, path) => Some(link),
                MenuEntry::Link(_) => None,
                MenuEntry::Group(group) => search(&group.children, path),
            })
        }

        search(&self.entries, current_path)
    }
}

fn validate_entries(entries: &[MenuEntry], seen: &mut HashSet<String>) -> Result<(), MenuError> {
    for entry in entries {
        if !seen.insert(entry.id().to_string()) {
            return Err(MenuError::DuplicateId(entry.id().to_string()));
        }
        match entry {
            MenuEntry::Link(link) => {
                if link.href.trim().is_empty() {
                    return Err(MenuError::EmptyHref(link.id.clone()));
                }
            }
            MenuEntry::Group(group) => {
                if group.children.is_empty() {
                    return Err(MenuError::EmptyGroup(group.id.clone()));
                }
                validate_entries(&group.children, seen)?;
            }
        }
    }
    Ok(())
}

/// Conjunto de grupos desplegados. Los grupos son independientes entre sí.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expanded: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expanded.contains(group_id)
    }

    /// Invierte la pertenencia de `group_id` y devuelve el nuevo estado.
    pub fn toggle(&mut self, group_id: &str) -> bool {
        if self.expanded.remove(group_id) {
            false
        } else {
            self.expanded.insert(group_id.to_string());
            true
        }
    }

    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

/// Modelo del menú lateral: árbol estático más el conjunto de grupos abiertos.
#[derive(Clone, Debug)]
pub struct NavigationMenu {
    tree: MenuTree,
    expansion: ExpansionState,
}

impl NavigationMenu {
    pub fn new(
        entries: Vec<MenuEntry>,
        initially_expanded: &[String],
    ) -> Result<Self, MenuError> {
        let tree = MenuTree::new(entries)?;
        let groups = tree.group_ids();
        if let Some(unknown) = initially_expanded
            .iter()
            .find(|id| !groups.contains(&id.as_str()))
        {
            return Err(MenuError::UnknownGroup(unknown.clone()));
        }
        Ok(Self {
            tree,
            expansion: ExpansionState::new(initially_expanded.iter().cloned()),
        })
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expansion.is_expanded(group_id)
    }

    /// Abre o cierra un grupo. Devuelve `None` si `group_id` no es un grupo.
    pub fn toggle_expanded(&mut self, group_id: &str) -> Option<bool> {
        if !self.tree.is_group(group_id) {
            log::debug!("ignorando despliegue de '{}': no es un grupo", group_id);
            return None;
        }
        let expanded = self.expansion.toggle(group_id);
        log::debug!("grupo '{}' desplegado: {}", group_id, expanded);
        Some(expanded)
    }

    /// Destino del enlace `link_id`, si existe.
    pub fn href_of(&self, link_id: &str) -> Option<&str> {
        match self.tree.find(link_id) {
            Some(MenuEntry::Link(link)) => Some(&link.href),
            _ => None,
        }
    }
}

pub fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::link("home", "Inicio", "/").with_icon("🏠"),
        MenuEntry::link("dashboard", "Dashboard", "/dashboard").with_icon("▦"),
        MenuEntry::group(
            "analytics",
            "Analíticas",
            vec![
                MenuEntry::link("reports", "Reportes", "/analytics/reports"),
                MenuEntry::link("metrics", "Métricas", "/analytics/metrics"),
            ],
        )
        .with_icon("📊"),
        MenuEntry::group(
            "products",
            "Productos",
            vec![
                MenuEntry::link("inventory", "Inventario", "/products/inventory"),
                MenuEntry::link("catalog", "Catálogo", "/products/catalog"),
            ],
        )
        .with_icon("📦"),
        MenuEntry::link("orders", "Pedidos", "/orders").with_icon("🛒"),
        MenuEntry::link("users", "Usuarios", "/users").with_icon("👥"),
        MenuEntry::link("documents", "Documentos", "/documents").with_icon("📄"),
        MenuEntry::link("settings", "Configuración", "/settings").with_icon("⚙"),
    ]
}

pub fn default_expanded_groups() -> Vec<String> {
    DEFAULT_EXPANDED_GROUPS.iter().map(|id| id.to_string()).collect()
}
