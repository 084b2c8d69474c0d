use crate::config::Corner;
use gdk4 as gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use polarcoord::wm::MonitorName;

/// Gap between the label and the screen edges it is anchored to.
const EDGE_MARGIN: i32 = 8;

pub fn init_layer_shell(window: &gtk::ApplicationWindow, corner: Corner) {
    window.init_layer_shell();
    window.set_layer(Layer::Top);
    window.set_namespace(Some("polar-mouse"));
    window.set_exclusive_zone(0);
    window.set_keyboard_mode(KeyboardMode::OnDemand);
    place(window, corner);
}

/// Pins the window to `corner`, releasing the other two edges.
pub fn place(window: &gtk::ApplicationWindow, corner: Corner) {
    let (vertical, horizontal) = (
        if corner.is_top() { Edge::Top } else { Edge::Bottom },
        if corner.is_left() { Edge::Left } else { Edge::Right },
    );
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        let anchored = edge == vertical || edge == horizontal;
        window.set_anchor(edge, anchored);
        window.set_margin(edge, if anchored { EDGE_MARGIN } else { 0 });
    }
}

pub fn get_monitor_by_name(name: &MonitorName) -> Option<gdk::Monitor> {
    let display = gdk::Display::default()?;
    let monitors = display.monitors();
    (0..monitors.n_items()).find_map(|i| {
        monitors
            .item(i)
            .and_then(|item| item.downcast::<gdk::Monitor>().ok())
            .filter(|m| m.connector().is_some_and(|n| n.as_str() == **name))
    })
}

pub fn set_window_monitor(window: &gtk::ApplicationWindow, monitor_name: &MonitorName) {
    match get_monitor_by_name(monitor_name) {
        Some(monitor) => window.set_monitor(Some(&monitor)),
        None => log::warn!("Monitor '{}' not found, using the default", monitor_name),
    }
}
