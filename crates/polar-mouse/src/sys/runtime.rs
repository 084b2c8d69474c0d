use crate::events::AppEvent;
use async_channel::Sender;
use std::io;
use std::thread::{self, JoinHandle};

/// Runs the control socket and the config watcher on their own thread, away from the GTK loop.
pub fn start_background_services(tx: Sender<AppEvent>) -> io::Result<JoinHandle<()>> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("polar-mouse-io")
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("polar-mouse-services".into())
        .spawn(move || {
            rt.block_on(async {
                tokio::join!(
                    crate::sys::server::run_server(tx.clone()),
                    crate::config::run_async_watcher(tx),
                );
            });
            log::warn!("Background services stopped");
        })
}
