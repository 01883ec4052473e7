/// Indicador resumido de la página de inicio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub description: &'static str,
    pub hours_ago: u32,
}

impl ActivityEntry {
    pub fn age_label(&self) -> String {
        let plural = if self.hours_ago > 1 { "s" } else { "" };
        format!("Hace {} hora{}", self.hours_ago, plural)
    }
}

pub fn default_stats() -> Vec<Stat> {
    vec![
        Stat {
            title: "Ventas Totales",
            value: "$45,231",
            change: "+20.1%",
            icon: "🛒",
        },
        Stat {
            title: "Usuarios Activos",
            value: "2,345",
            change: "+12.5%",
            icon: "👥",
        },
        Stat {
            title: "Tasa de Conversión",
            value: "3.24%",
            change: "+4.3%",
            icon: "📈",
        },
        Stat {
            title: "Ingresos",
            value: "$12,234",
            change: "+8.2%",
            icon: "📊",
        },
    ]
}

pub fn default_activity() -> Vec<ActivityEntry> {
    (1..=4)
        .map(|hours_ago| ActivityEntry {
            description: "Nuevo usuario registrado",
            hours_ago,
        })
        .collect()
}
