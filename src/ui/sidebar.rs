use dashboard_shell::{
    components::{MenuNode, MenuNodeKind, SidebarModel, SidebarProps},
    layout::ShellTheme,
};

use crate::state::{navigation::MenuEntry, AppState, NavigationMenu};

use super::layout_bridge;

/// Convierte el árbol del menú en filas renderizables para la ruta actual.
///
/// Los hijos de un grupo plegado se conservan; el shell decide no dibujarlos.
pub fn menu_nodes(entries: &[MenuEntry], menu: &NavigationMenu, current_path: &str) -> Vec<MenuNode> {
    entries
        .iter()
        .map(|entry| MenuNode {
            id: entry.id().to_string(),
            label: entry.label().to_string(),
            icon: entry.icon().map(str::to_string),
            kind: match entry {
                MenuEntry::Link(_) => MenuNodeKind::Link {
                    active: entry.is_active(current_path),
                },
                MenuEntry::Group(group) => MenuNodeKind::Group {
                    expanded: menu.is_expanded(&group.id),
                    children: menu_nodes(&group.children, menu, current_path),
                },
            },
        })
        .collect()
}

impl SidebarModel for AppState {
    fn theme(&self) -> ShellTheme {
        layout_bridge::shell_theme(&self.theme)
    }

    fn props(&self) -> SidebarProps {
        SidebarProps {
            open: self.shell.menu_open(),
            nodes: menu_nodes(
                self.navigation.tree().entries(),
                &self.navigation,
                &self.current_path,
            ),
        }
    }

    fn on_group_toggled(&mut self, group_id: &str) {
        self.toggle_group(group_id);
    }

    fn on_link_selected(&mut self, link_id: &str) {
        if self.select_link(link_id) {
            self.shell.close_menu();
        }
    }

    fn on_close(&mut self) {
        self.shell.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;

    fn find<'a>(nodes: &'a [MenuNode], id: &str) -> Option<&'a MenuNode> {
        nodes.iter().find_map(|node| {
            if node.id == id {
                return Some(node);
            }
            match &node.kind {
                MenuNodeKind::Group { children, .. } => find(children, id),
                MenuNodeKind::Link { .. } => None,
            }
        })
    }

    fn is_active(node: &MenuNode) -> bool {
        matches!(node.kind, MenuNodeKind::Link { active: true })
    }

    fn is_expanded(node: &MenuNode) -> bool {
        matches!(node.kind, MenuNodeKind::Group { expanded: true, .. })
    }

    #[test]
    fn only_matching_links_are_active() {
        let mut state = test_state();
        state.navigate("/analytics/reports");

        let nodes = SidebarModel::props(&state).nodes;
        assert!(is_active(find(&nodes, "reports").unwrap()));
        assert!(!is_active(find(&nodes, "metrics").unwrap()));
        assert!(!is_active(find(&nodes, "home").unwrap()));
        // El grupo padre no hereda el estado activo.
        assert!(matches!(
            find(&nodes, "analytics").unwrap().kind,
            MenuNodeKind::Group { .. }
        ));
    }

    #[test]
    fn collapsed_groups_keep_their_children() {
        let state = test_state();
        let nodes = SidebarModel::props(&state).nodes;

        let analytics = find(&nodes, "analytics").unwrap();
        let products = find(&nodes, "products").unwrap();
        assert!(is_expanded(analytics));
        assert!(!is_expanded(products));
        assert!(find(&nodes, "inventory").is_some());
    }

    #[test]
    fn toggling_a_group_leaves_siblings_alone() {
        let mut state = test_state();
        state.on_group_toggled("products");

        let nodes = SidebarModel::props(&state).nodes;
        assert!(is_expanded(find(&nodes, "products").unwrap()));
        assert!(is_expanded(find(&nodes, "analytics").unwrap()));

        state.on_group_toggled("analytics");
        let nodes = SidebarModel::props(&state).nodes;
        assert!(!is_expanded(find(&nodes, "analytics").unwrap()));
        assert!(is_expanded(find(&nodes, "products").unwrap()));
    }

    #[test]
    fn selecting_a_link_navigates_and_closes_overlay() {
        let mut state = test_state();
        state.shell.toggle_menu();

        state.on_link_selected("orders");
        assert_eq!(state.current_path, "/orders");
        assert!(!state.shell.menu_open());
    }

    #[test]
    fn group_ids_do_not_navigate() {
        let mut state = test_state();
        state.shell.toggle_menu();

        state.on_link_selected("analytics");
        assert_eq!(state.current_path, "/");
        assert!(state.shell.menu_open());
    }
}
