//! End-to-end flows through the public API: config → app → input → render.
//!
//! No terminal needed — rendering goes through ratatui's TestBackend and
//! time through tokio's paused clock.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use esther::config::PortalConfig;
use esther::tui::app::PortalApp;
use esther::tui::event::PortalMessage;
use esther::tui::layout;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::TempDir;

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut PortalApp) {
    terminal.draw(|f| layout::draw(f, app)).unwrap();
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> PortalMessage {
    PortalMessage::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn hover_then_click_through_dropdown() {
    let mut app = PortalApp::from_config(&PortalConfig::default()).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
    draw(&mut terminal, &mut app);

    // Hover "Academics", then "Registration", then leave the bar.
    let (_, academics) = app.hits.nav_labels[0].clone();
    let (_, registration) = app.hits.nav_labels[1].clone();
    app.update(mouse(MouseEventKind::Moved, academics.x + 1, academics.y));
    assert_eq!(app.nav.open_key(), Some("Academics"));
    draw(&mut terminal, &mut app);
    app.update(mouse(MouseEventKind::Moved, registration.x + 1, registration.y));
    assert_eq!(app.nav.open_key(), Some("Registration"));
    draw(&mut terminal, &mut app);
    app.update(mouse(MouseEventKind::Moved, 110, 40));
    assert_eq!(app.nav.open_key(), None);

    // Re-open Academics and click "Degree" (third row).
    app.update(mouse(MouseEventKind::Moved, academics.x + 1, academics.y));
    draw(&mut terminal, &mut app);
    let dropdown = app.hits.dropdown.expect("dropdown rendered");
    app.update(mouse(MouseEventKind::Moved, dropdown.x + 2, dropdown.y + 3));
    assert_eq!(app.nav.open_key(), Some("Academics"));
    app.update(mouse(
        MouseEventKind::Down(MouseButton::Left),
        dropdown.x + 2,
        dropdown.y + 3,
    ));
    assert_eq!(app.router.current_path(), "/academics/degree");
    assert_eq!(app.nav.open_key(), None);
    assert!(!app.carousel.is_mounted());
}

#[tokio::test(start_paused = true)]
async fn configured_period_drives_autoplay() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portal.yaml");
    std::fs::write(
        &path,
        r#"
autoplay_secs: 2
slides:
  - title: One
    content: first
  - title: Two
    content:
      - date: Jan 1
        label: New year
  - title: Three
    content: third
"#,
    )
    .unwrap();

    let config = PortalConfig::load(Some(&path), dir.path()).unwrap();
    let mut app = PortalApp::from_config(&config).unwrap();
    assert_eq!(app.carousel.len(), 3);

    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    let (tx, rx) = tokio::sync::mpsc::channel(8);
    let driver = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(4_500)).await;
        tx.send(PortalMessage::Input(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )))
        .await
        .unwrap();
    });

    esther::tui::runner::event_loop(&mut terminal, &mut app, rx)
        .await
        .unwrap();
    driver.await.unwrap();
    assert_eq!(app.carousel.active_index(), 2);
    assert_eq!(app.carousel.active_slide().title, "Three");
}

#[test]
fn slide_scenario_through_keys() {
    let mut app = PortalApp::from_config(&PortalConfig::default()).unwrap();
    let press = |app: &mut PortalApp, code| {
        app.update(PortalMessage::Input(KeyEvent::new(code, KeyModifiers::NONE)));
    };
    for _ in 0..5 {
        press(&mut app, KeyCode::Right);
    }
    assert_eq!(app.carousel.active_index(), 0);
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.carousel.active_index(), 3);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.carousel.active_index(), 2);
}
