use dashboard_shell::layout::ShellTheme;

use crate::ui::theme::ThemeTokens;

pub fn shell_theme(tokens: &ThemeTokens) -> ShellTheme {
    let palette = &tokens.palette;
    ShellTheme {
        root_background: palette.root_background,
        surface_background: palette.panel_background,
        header_background: palette.header_background,
        border: palette.border,
        text_primary: palette.text_primary,
        text_muted: palette.text_weak,
        accent: palette.primary,
        accent_soft: palette.hover_background,
        accent_text: palette.on_primary,
        success: palette.success,
        warning: palette.warning,
        danger: palette.danger,
        info: palette.info,
        backdrop: palette.backdrop,
    }
}
