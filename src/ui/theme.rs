use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for CLI output. Every style is empty when color is off.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    /// Labels in `label: value` lines
    pub label: Style,
    /// Secondary text such as row counts under a table
    pub muted: Style,
}

impl Theme {
    /// Colored on a terminal, plain when piped or when `NO_COLOR` is set
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color && console::Term::stdout().is_term())
    }

    pub fn new(colored: bool) -> Self {
        if !colored {
            return Self {
                header: Style::new(),
                success: Style::new(),
                error: Style::new(),
                warn: Style::new(),
                label: Style::new(),
                muted: Style::new(),
            };
        }
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            label: Style::new().white().dimmed(),
            muted: Style::new().bright_black(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
