//! TUI runner — main loop that wires everything together.
//!
//! Creates terminal, spawns the input reader, runs main TEA loop. The loop
//! multiplexes:
//! - terminal keyboard/mouse events (from the blocking reader)
//! - render interval (~30fps — draw frame)
//! - the carousel's autoplay deadline, only while it is mounted

use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::{interval, sleep_until, Instant};
use tracing::info;

use super::app::PortalApp;
use super::event::{spawn_input_reader, PortalMessage};
use super::layout;

/// Run the TUI main loop. Blocks until quit.
pub async fn run_tui(app: &mut PortalApp) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    io::stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel(64);
    let reader = spawn_input_reader(tx);

    let result = event_loop(&mut terminal, app, rx).await;
    app.teardown();
    // Dropping the receiver stops the reader at its next poll.
    let _ = reader.await;

    // Restore terminal
    disable_raw_mode()?;
    io::stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;
    info!("portal closed");
    result
}

/// The select loop, separated from terminal setup so it can run against
/// any ratatui backend.
pub async fn event_loop<B>(
    terminal: &mut Terminal<B>,
    app: &mut PortalApp,
    mut rx: mpsc::Receiver<PortalMessage>,
) -> anyhow::Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let mut render_interval = interval(Duration::from_millis(33)); // ~30fps

    loop {
        let deadline = app.carousel.deadline();
        tokio::select! {
            _ = render_interval.tick() => {
                terminal.draw(|f| layout::draw(f, app))?;
            }
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                app.update(PortalMessage::Autoplay);
            }
            msg = rx.recv() => {
                match msg {
                    Some(msg) => app.update(msg),
                    None => app.should_quit = true,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortalConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn app() -> PortalApp {
        PortalApp::from_config(&PortalConfig::default()).unwrap()
    }

    #[test]
    fn runner_quit_on_message() {
        let mut app = app();
        app.update(PortalMessage::Quit);
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_fires_on_schedule() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let (tx, rx) = mpsc::channel(8);

        let driver = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(25_500)).await;
            tx.send(PortalMessage::Quit).await.unwrap();
        });

        event_loop(&mut terminal, &mut app, rx).await.unwrap();
        driver.await.unwrap();
        // Deadlines at 10s and 20s elapsed before the quit at 25.5s.
        assert_eq!(app.carousel.active_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_postpones_autoplay() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let (tx, rx) = mpsc::channel(8);

        let driver = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(8)).await;
            tx.send(PortalMessage::Input(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)))
                .await
                .unwrap();
            // 8s + 9.5s: past the original 10s deadline, short of the reset one.
            tokio::time::sleep(Duration::from_millis(9_500)).await;
            tx.send(PortalMessage::Quit).await.unwrap();
        });

        event_loop(&mut terminal, &mut app, rx).await.unwrap();
        driver.await.unwrap();
        assert_eq!(app.carousel.active_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn no_autoplay_away_from_landing_page() {
        let mut app = app();
        app.open("/registration");
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let (tx, rx) = mpsc::channel(8);

        let driver = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(35)).await;
            tx.send(PortalMessage::Input(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)))
                .await
                .unwrap();
            tx.send(PortalMessage::Quit).await.unwrap();
        });

        event_loop(&mut terminal, &mut app, rx).await.unwrap();
        driver.await.unwrap();
        assert!(app.router.is_home());
        assert_eq!(app.carousel.active_index(), 0);
    }

    #[tokio::test]
    async fn closed_channel_ends_loop() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let (tx, rx) = mpsc::channel(1);
        drop(tx);
        event_loop(&mut terminal, &mut app, rx).await.unwrap();
        assert!(app.should_quit);
    }
}
