use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::status::{ClickAction, Status, StatusMenu};
use crate::gui::{theme, window};
use gtk::prelude::*;
use gtk4 as gtk;
use polarcoord::ipc::Command;
use polarcoord::wm;
use relm4::prelude::*;

pub struct AppModel {
    pub status: Status,
    pub config: Config,
    pub root: gtk::ApplicationWindow,
    menu: StatusMenu,
    timer: Option<glib::SourceId>,
}

#[derive(Debug, Clone, Copy)]
pub enum AppMsg {
    Clicked,
    Tick,
    StartTracking,
    StopTracking,
    ToggleTracking,
    ToggleMode,
    ToggleNotation,
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Control(Command::Start) => AppMsg::StartTracking,
            AppEvent::Control(Command::Stop) => AppMsg::StopTracking,
            AppEvent::Control(Command::Toggle) => AppMsg::ToggleTracking,
            AppEvent::Control(Command::ToggleMode) => AppMsg::ToggleMode,
            AppEvent::Control(Command::ToggleNotation) => AppMsg::ToggleNotation,
            AppEvent::Control(Command::Quit) => AppMsg::Quit,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn start_timer(&mut self, sender: &ComponentSender<Self>) {
        self.stop_timer();

        let interval = self.config.poll_interval();
        let tick = sender.clone();
        self.timer = Some(glib::timeout_add_local(interval, move || {
            tick.input(AppMsg::Tick);
            glib::ControlFlow::Continue
        }));
        sender.input(AppMsg::Tick);
        log::info!("Tracking every {} ms", interval.as_millis());
    }

    fn stop_timer(&mut self) {
        if let Some(id) = self.timer.take() {
            id.remove();
        }
    }

    fn start_tracking(&mut self, sender: &ComponentSender<Self>) {
        if self.status.start() {
            self.start_timer(sender);
        }
    }

    fn stop_tracking(&mut self) {
        if self.status.stop() {
            self.stop_timer();
            log::info!("Tracking stopped");
        }
    }

    fn reload_config(&mut self, sender: &ComponentSender<Self>) {
        let new_config = match config::load_config() {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to reload config: {}", e);
                return;
            }
        };

        let interval_changed = new_config.poll_interval() != self.config.poll_interval();
        self.status.apply_config(&new_config);
        self.menu.refresh(&self.status);
        window::place(&self.root, new_config.corner);
        self.config = new_config;

        if interval_changed && self.status.tracking {
            self.start_timer(sender);
        }
        log::info!("Configuration reloaded");
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("polar-mouse"),
            add_css_class: "polar-window",
            set_decorated: false,
            set_resizable: false,

            #[name = "label"]
            gtk::Label {
                add_css_class: "polar-label",
                #[watch]
                set_label: &model.status.title,

                add_controller = gtk::GestureClick {
                    connect_released[sender] => move |_, _, _, _| {
                        sender.input(AppMsg::Clicked);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();
        window::init_layer_shell(&root, config.corner);
        if let Some(name) = wm::get_active_monitor() {
            window::set_window_monitor(&root, &name);
        }

        let model = AppModel {
            status: Status::from_config(&config),
            config,
            root: root.clone(),
            menu: StatusMenu::new(&sender),
            timer: None,
        };

        let widgets = view_output!();

        model.menu.popover.set_parent(&widgets.label);

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        if model.config.track_on_launch {
            sender.input(AppMsg::StartTracking);
        }

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Clicked => match self.status.click() {
                ClickAction::StartTracking => self.start_timer(&sender),
                ClickAction::ShowMenu => self.menu.popup(&self.status),
            },
            AppMsg::Tick => {
                if !self.status.tracking {
                    return;
                }
                match wm::sample_displacement() {
                    Ok(displacement) => {
                        self.status.update(displacement);
                    }
                    Err(e) => log::debug!("Skipping sample: {}", e),
                }
            }
            AppMsg::StartTracking => self.start_tracking(&sender),
            AppMsg::StopTracking => self.stop_tracking(),
            AppMsg::ToggleTracking => {
                if self.status.tracking {
                    self.stop_tracking();
                } else {
                    self.start_tracking(&sender);
                }
            }
            AppMsg::ToggleMode => {
                self.status.toggle_mode();
                self.menu.refresh(&self.status);
            }
            AppMsg::ToggleNotation => {
                self.status.toggle_notation();
                self.menu.refresh(&self.status);
            }
            AppMsg::ConfigReload => self.reload_config(&sender),
            AppMsg::Quit => {
                self.stop_timer();
                self.menu.popover.unparent();
                relm4::main_application().quit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_commands_map_to_messages() {
        let cases = vec![
            (Command::Start, "StartTracking"),
            (Command::Stop, "StopTracking"),
            (Command::Toggle, "ToggleTracking"),
            (Command::ToggleMode, "ToggleMode"),
            (Command::ToggleNotation, "ToggleNotation"),
            (Command::Quit, "Quit"),
        ];

        for (command, expected) in cases {
            let msg = AppMsg::from(AppEvent::from(command));
            assert_eq!(format!("{:?}", msg), expected);
        }
        assert!(matches!(
            AppMsg::from(AppEvent::ConfigReload),
            AppMsg::ConfigReload
        ));
    }
}
