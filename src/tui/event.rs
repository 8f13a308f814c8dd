//! TUI messages and the terminal input reader.
//!
//! Terminal input is read on a blocking task and forwarded over an mpsc
//! channel, so the main loop can `select!` on input, render ticks and the
//! carousel's autoplay deadline without ever dropping an event.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum PortalMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Mouse movement and clicks (hover drives the dropdowns).
    Mouse(MouseEvent),
    /// The carousel's autoplay deadline elapsed.
    Autoplay,
    /// Render: draw a frame.
    Render,
    /// Quit the TUI.
    Quit,
}

/// How long one poll waits before re-checking whether the loop is gone.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Spawn the blocking terminal reader. It exits once `tx` is closed.
pub fn spawn_input_reader(tx: mpsc::Sender<PortalMessage>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::warn!("terminal poll failed: {e}");
                    break;
                }
            }
            let msg = match event::read() {
                Ok(Event::Key(key)) => PortalMessage::Input(key),
                Ok(Event::Mouse(mouse)) => PortalMessage::Mouse(mouse),
                Ok(Event::Resize(..)) => PortalMessage::Render,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!("terminal read failed: {e}");
                    break;
                }
            };
            if tx.blocking_send(msg).is_err() {
                break;
            }
        }
    })
}
