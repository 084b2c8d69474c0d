use polarcoord::ipc::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Control(Command),
    ConfigReload,
}

impl From<Command> for AppEvent {
    fn from(command: Command) -> Self {
        AppEvent::Control(command)
    }
}
