use eframe::egui;
use eframe::{App, CreationContext, Frame, NativeOptions};

pub mod components;
pub mod layout;

/// Trait que abstrae el estado y comportamiento de un panel de administración basado en egui.
pub trait AppShell: 'static {
    /// Inicializa el estado con el contexto de creación de eframe.
    fn init(&mut self, cc: &CreationContext<'_>);

    /// Renderiza la shell en cada frame con acceso al contexto global de egui.
    fn update(&mut self, ctx: &egui::Context);
}

struct DashboardApp {
    shell: Box<dyn AppShell>,
}

impl DashboardApp {
    fn new(mut shell: Box<dyn AppShell>, cc: &CreationContext<'_>) -> Self {
        shell.init(cc);
        Self { shell }
    }
}

impl App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.shell.update(ctx);
    }
}

/// Ejecuta un panel de administración reutilizable basado en egui.
///
/// El `app_builder` se invoca una única vez para crear el estado concreto que
/// implementa [`AppShell`]. Este estado será inicializado con el
/// [`CreationContext`] y posteriormente recibirá llamadas a [`AppShell::update`]
/// en cada frame.
pub fn run(
    title: &str,
    app_builder: impl FnOnce() -> Box<dyn AppShell> + 'static,
) -> Result<(), eframe::Error> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(1280.0, 800.0))
            .with_min_inner_size(egui::vec2(360.0, 480.0)),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Box::new(DashboardApp::new(app_builder(), cc))),
    )
}
