use console::Style;

pub(super) fn success() -> Style {
    Style::new().green()
}

pub(super) fn warning() -> Style {
    Style::new().yellow()
}

pub(super) fn dimmed() -> Style {
    Style::new().dim()
}

pub(super) fn title() -> Style {
    Style::new().bold()
}

pub(super) fn created_marker() -> Style {
    Style::new().green().bold()
}

pub(super) fn deleted_marker() -> Style {
    Style::new().red().bold()
}
