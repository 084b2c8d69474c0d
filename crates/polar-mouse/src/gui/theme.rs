use gdk4 as gdk;
use gtk4 as gtk;

const CSS: &str = "
.polar-window {
    background: none;
    background-color: transparent;
}

.polar-label {
    font-family: monospace;
    font-feature-settings: \"tnum\";
    padding: 4px 10px;
    border-radius: 8px;
    color: @theme_fg_color;
    background-color: alpha(@theme_bg_color, 0.85);
}

.polar-menu-item {
    padding: 4px 12px;
}
";

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    provider.load_from_data(CSS);

    match gdk::Display::default() {
        Some(display) => gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => log::warn!("No display, skipping stylesheet"),
    }
}
