//! Key and mouse dispatch for the TUI.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::app::PortalApp;

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut PortalApp, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Global bindings
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.cycle_section(true);
            return;
        }
        KeyCode::BackTab => {
            app.cycle_section(false);
            return;
        }
        KeyCode::Backspace => {
            app.back();
            return;
        }
        KeyCode::Home => {
            app.go_home();
            return;
        }
        _ => {}
    }

    // Carousel bindings, landing page only
    if !app.router.is_home() {
        return;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.prev_slide(),
        KeyCode::Right | KeyCode::Char('l') => app.next_slide(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.go_to_slide(index);
        }
        _ => {}
    }
}

/// Handle a mouse event. Movement is hover, left button is click.
pub fn handle_mouse(app: &mut PortalApp, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => app.hover(pos),
        MouseEventKind::Down(MouseButton::Left) => {
            app.hover(pos);
            app.click(pos);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortalConfig;
    use crate::tui::app::ClickTarget;
    use crate::tui::event::PortalMessage;
    use ratatui::layout::Rect;

    fn app() -> PortalApp {
        PortalApp::from_config(&PortalConfig::default()).unwrap()
    }

    fn press(app: &mut PortalApp, code: KeyCode) {
        app.update(PortalMessage::Input(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn mouse(app: &mut PortalApp, kind: MouseEventKind, column: u16, row: u16) {
        app.update(PortalMessage::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    #[test]
    fn quit_on_ctrl_c() {
        let mut app = app();
        app.update(PortalMessage::Input(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn quit_on_q() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn arrows_drive_carousel() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.carousel.active_index(), 1);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.carousel.active_index(), 4);
    }

    #[test]
    fn digits_jump_to_existing_slides() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.carousel.active_index(), 3);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.carousel.active_index(), 3);
    }

    #[test]
    fn carousel_keys_ignored_off_home() {
        let mut app = app();
        app.open("/resources");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.carousel.active_index(), 0);
    }

    #[test]
    fn tab_backspace_home() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.router.current_path(), "/registration");
        press(&mut app, KeyCode::Backspace);
        assert!(app.router.is_home());
        app.open("/academics/grades");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.router.current_path(), "/academics");
        press(&mut app, KeyCode::Home);
        assert!(app.router.is_home());
    }

    #[test]
    fn mouse_move_hovers_nav() {
        let mut app = app();
        app.hits.nav_labels = vec![("Academics".into(), Rect::new(1, 1, 9, 1))];
        mouse(&mut app, MouseEventKind::Moved, 2, 1);
        assert_eq!(app.nav.open_key(), Some("Academics"));
        mouse(&mut app, MouseEventKind::Moved, 2, 20);
        assert_eq!(app.nav.open_key(), None);
    }

    #[test]
    fn left_click_activates_target() {
        let mut app = app();
        app.hits.targets = vec![(Rect::new(0, 5, 3, 1), ClickTarget::NextSlide)];
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 1, 5);
        assert_eq!(app.carousel.active_index(), 1);
        mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 1, 5);
        assert_eq!(app.carousel.active_index(), 1);
    }
}
