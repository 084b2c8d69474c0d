use super::model::{QUIT_LABEL, Status, TURN_OFF_LABEL};
use crate::gui::app::{AppModel, AppMsg};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::ComponentSender;

/// Popover shown when the label is clicked while tracking.
pub struct StatusMenu {
    pub popover: gtk::Popover,
    mode_item: gtk::Button,
    notation_item: gtk::Button,
}

impl StatusMenu {
    pub fn new(sender: &ComponentSender<AppModel>) -> Self {
        let popover = gtk::Popover::new();
        popover.set_has_arrow(false);
        popover.add_css_class("polar-menu");

        let mode_item = Self::item(&popover, sender, "", AppMsg::ToggleMode);
        let notation_item = Self::item(&popover, sender, "", AppMsg::ToggleNotation);
        let off_item = Self::item(&popover, sender, TURN_OFF_LABEL, AppMsg::StopTracking);
        let quit_item = Self::item(&popover, sender, QUIT_LABEL, AppMsg::Quit);

        let list = gtk::Box::new(gtk::Orientation::Vertical, 0);
        list.append(&mode_item);
        list.append(&notation_item);
        list.append(&off_item);
        list.append(&gtk::Separator::new(gtk::Orientation::Horizontal));
        list.append(&quit_item);
        popover.set_child(Some(&list));

        let keys = gtk::EventControllerKey::new();
        {
            let sender = sender.clone();
            keys.connect_key_pressed(move |_, key, _, _| {
                if key == gtk::gdk::Key::q {
                    sender.input(AppMsg::Quit);
                    return glib::Propagation::Stop;
                }
                glib::Propagation::Proceed
            });
        }
        popover.add_controller(keys);

        Self {
            popover,
            mode_item,
            notation_item,
        }
    }

    fn item(
        popover: &gtk::Popover,
        sender: &ComponentSender<AppModel>,
        label: &str,
        msg: AppMsg,
    ) -> gtk::Button {
        let button = gtk::Button::with_label(label);
        button.set_has_frame(false);
        button.add_css_class("polar-menu-item");

        let popover = popover.clone();
        let sender = sender.clone();
        button.connect_clicked(move |_| {
            popover.popdown();
            sender.input(msg);
        });
        button
    }

    pub fn refresh(&self, status: &Status) {
        self.mode_item.set_label(status.mode_label());
        self.notation_item.set_label(status.notation_label());
    }

    pub fn popup(&self, status: &Status) {
        self.refresh(status);
        self.popover.popup();
    }
}
