//! Portal screen layout.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ University Student Portal                  Home  │  header
//! │  Academics   Registration   Finances  ...        │  nav bar (hover → dropdown)
//! │                                                  │
//! │  (landing page: hero, carousel, quick links,     │
//! │   sections; other pages: back link + cards)      │
//! │                                                  │
//! │        © 2026 Rice University. All rights ...    │  footer
//! │ [/academics] Tab:sections ←/→:slides q:quit      │  status bar
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Every draw rebuilds `app.hits` so the next mouse event is resolved
//! against what is actually on screen. The dropdown is drawn last and
//! overlays the page.

use chrono::Datelike;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::carousel::SlideContent;
use crate::content::{INSTITUTION, PORTAL_NAME, QUICK_LINKS};
use crate::router::{Card, HOME};

use super::app::{ClickTarget, HitMap, PortalApp};

/// Height of the carousel block on the landing page, borders included.
const CAROUSEL_HEIGHT: u16 = 10;

/// Draw the full portal layout.
pub fn draw(f: &mut Frame, app: &mut PortalApp) {
    app.hits.clear();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // nav bar
            Constraint::Min(5),    // page content
            Constraint::Length(1), // footer
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    draw_header(f, app, outer[0]);
    draw_nav_bar(f, app, outer[1]);
    if app.router.is_home() {
        draw_landing(f, app, outer[2]);
    } else {
        draw_page(f, app, outer[2]);
    }
    draw_footer(f, outer[3]);
    draw_status(f, app, outer[4]);

    // Dropdown last — overlays the page below the nav bar.
    draw_dropdown(f, app, outer[2]);
}

/// Screen rects for the nav labels, laid out left to right with one
/// padding column each side and a one-column gap. Labels that do not fit
/// are dropped.
pub fn nav_label_rects(labels: &[&str], area: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(labels.len());
    let mut x = area.x + 1;
    for label in labels {
        let width = u16::try_from(Span::raw(*label).width())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        if x.saturating_add(width) > area.right() {
            break;
        }
        rects.push(Rect::new(x, area.y, width, 1));
        x += width + 1;
    }
    rects
}

fn draw_header(f: &mut Frame, app: &mut PortalApp, area: Rect) {
    let style = Style::default().fg(Color::White).bg(Color::Blue);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {PORTAL_NAME}"),
            style.add_modifier(Modifier::BOLD),
        )))
        .style(style),
        area,
    );

    let home = " Home ";
    let width = home.len() as u16;
    if area.width > width + PORTAL_NAME.len() as u16 + 2 {
        let rect = Rect::new(area.right() - width - 1, area.y, width, 1);
        f.render_widget(Paragraph::new(Span::styled(home, style)), rect);
        app.hits.targets.push((rect, ClickTarget::Link(HOME.into())));
    }
}

fn draw_nav_bar(f: &mut Frame, app: &mut PortalApp, area: Rect) {
    f.render_widget(
        Paragraph::new("").style(Style::default().bg(Color::Gray)),
        area,
    );

    let labels: Vec<&str> = app.nav.entries().iter().map(|e| e.label.as_str()).collect();
    let rects = nav_label_rects(&labels, area);
    let current = app.router.current_path();

    let mut hits = Vec::with_capacity(rects.len());
    for (entry, rect) in app.nav.entries().iter().zip(rects) {
        let in_section = current == entry.path || current.starts_with(&format!("{}/", entry.path));
        let style = if app.nav.is_open(&entry.label) {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else if in_section {
            Style::default()
                .fg(Color::Blue)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Black).bg(Color::Gray)
        };
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", entry.label), style)),
            rect,
        );
        hits.push((entry.label.clone(), rect, entry.path.clone()));
    }

    for (label, rect, path) in hits {
        app.hits.nav_labels.push((label, rect));
        app.hits.targets.push((rect, ClickTarget::Link(path)));
    }
}

fn draw_dropdown(f: &mut Frame, app: &mut PortalApp, content: Rect) {
    let Some(entry) = app.nav.open_entry() else {
        return;
    };
    let Some(anchor) = app
        .hits
        .nav_labels
        .iter()
        .find(|(key, _)| *key == entry.label)
        .map(|(_, rect)| *rect)
    else {
        return;
    };

    let widest = entry
        .sub_items
        .iter()
        .map(|s| Span::raw(s.label.as_str()).width() + if s.is_link() { 2 } else { 0 })
        .max()
        .unwrap_or(0);
    let width = u16::try_from(widest.saturating_add(4))
        .unwrap_or(u16::MAX)
        .min(content.right().saturating_sub(anchor.x));
    let height = u16::try_from(entry.sub_items.len().saturating_add(2))
        .unwrap_or(u16::MAX)
        .min(content.height);
    if width < 3 || height < 3 {
        return;
    }
    let area = Rect::new(anchor.x, content.y, width, height);

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().fg(Color::Black).bg(Color::White));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut targets = Vec::new();
    for (index, sub) in entry.sub_items.iter().enumerate() {
        let row = inner.y + index as u16;
        if row >= inner.bottom() {
            break;
        }
        let line = if sub.is_link() {
            Line::from(vec![
                Span::styled(sub.label.clone(), Style::default().fg(Color::Blue)),
                Span::styled(" →", Style::default().fg(Color::Blue)),
            ])
        } else {
            Line::from(Span::raw(sub.label.clone()))
        };
        let rect = Rect::new(inner.x, row, inner.width, 1);
        f.render_widget(
            Paragraph::new(line),
            Rect::new(inner.x + 1, row, inner.width.saturating_sub(1), 1),
        );
        targets.push((
            rect,
            ClickTarget::SubItem {
                key: entry.label.clone(),
                index,
            },
        ));
    }

    app.hits.dropdown = Some(area);
    app.hits.targets.extend(targets);
}

fn draw_landing(f: &mut Frame, app: &mut PortalApp, area: Rect) {
    let page = app.router.current_page().clone();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),               // hero
            Constraint::Length(CAROUSEL_HEIGHT), // carousel
            Constraint::Length(5),               // quick links
            Constraint::Min(0),                  // sections
        ])
        .split(area);

    let hero = vec![
        Line::from(Span::styled(
            page.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            page.description.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(hero).alignment(Alignment::Center),
        chunks[0].inner(ratatui::layout::Margin::new(0, 1)),
    );

    draw_carousel(f, app, chunks[1]);
    draw_quick_links(f, &mut app.hits, chunks[2]);
    draw_cards(f, &mut app.hits, &page.cards, chunks[3]);
}

fn draw_carousel(f: &mut Frame, app: &mut PortalApp, area: Rect) {
    let block = Block::default()
        .title(" Announcements ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    let slide = app.carousel.active_slide();
    let mut lines = vec![
        Line::from(Span::styled(
            slide.title.clone(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    match &slide.content {
        SlideContent::Text(text) => lines.push(Line::from(text.clone())),
        SlideContent::Rows(rows) => {
            for row in rows {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<8}", row.date),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(row.label.clone()),
                ]));
            }
        }
    }
    let body = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height - 1);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);

    // Controls: "[<] ● ○ ○ ○ ○ [>]". Skipped when they do not fit.
    let Some((n, total)) = u16::try_from(app.carousel.len())
        .ok()
        .and_then(|n| Some((n, n.checked_mul(2)?.checked_add(7)?)))
        .filter(|(_, total)| *total <= inner.width)
    else {
        return;
    };
    let y = inner.bottom() - 1;
    let start = inner.x + (inner.width - total) / 2;
    let arrow = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled("[<]", arrow), Span::raw(" ")];
    for i in 0..app.carousel.len() {
        let dot = if i == app.carousel.active_index() { "●" } else { "○" };
        spans.push(Span::styled(dot, Style::default().fg(Color::Blue)));
        spans.push(Span::raw(" "));
        app.hits
            .targets
            .push((Rect::new(start + 4 + 2 * i as u16, y, 1, 1), ClickTarget::Slide(i)));
    }
    spans.push(Span::styled("[>]", arrow));
    f.render_widget(Paragraph::new(Line::from(spans)), Rect::new(start, y, total, 1));

    app.hits
        .targets
        .push((Rect::new(start, y, 3, 1), ClickTarget::PrevSlide));
    app.hits
        .targets
        .push((Rect::new(start + 4 + 2 * n, y, 3, 1), ClickTarget::NextSlide));
}

fn draw_quick_links(f: &mut Frame, hits: &mut HitMap, area: Rect) {
    if area.height < 3 {
        return;
    }
    let title_row = Rect::new(area.x + 1, area.y, area.width.saturating_sub(1), 1);
    f.render_widget(
        Paragraph::new(Span::styled(
            "Quick Links",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        title_row,
    );
    let row = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, QUICK_LINKS.len() as u32); QUICK_LINKS.len()])
        .split(row);

    for (link, rect) in QUICK_LINKS.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(Span::styled(
                link.title,
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        f.render_widget(
            Paragraph::new(link.description)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(block),
            *rect,
        );
        let target = match link.path {
            Some(path) => ClickTarget::Link(path.into()),
            None => ClickTarget::Placeholder {
                label: link.title.into(),
                action: None,
            },
        };
        hits.targets.push((*rect, target));
    }
}

fn draw_page(f: &mut Frame, app: &mut PortalApp, area: Rect) {
    let page = app.router.current_page().clone();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // back link
            Constraint::Length(3), // title + description
            Constraint::Min(0),    // cards
        ])
        .split(area);

    if let Some(parent) = page.parent.as_deref() {
        let parent_title = match parent {
            HOME => "Home".to_string(),
            other => app
                .router
                .page(other)
                .map(|p| p.title.clone())
                .unwrap_or_else(|| other.to_string()),
        };
        let text = format!("← Back to {parent_title}");
        let width = (Span::raw(text.as_str()).width() as u16).min(chunks[0].width.saturating_sub(1));
        let rect = Rect::new(chunks[0].x + 1, chunks[0].y, width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                text,
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            )),
            rect,
        );
        app.hits.targets.push((rect, ClickTarget::Back));
    }

    let heading = vec![
        Line::from(Span::styled(
            page.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            page.description.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(heading),
        Rect::new(chunks[1].x + 1, chunks[1].y, chunks[1].width.saturating_sub(1), chunks[1].height),
    );

    draw_cards(f, &mut app.hits, &page.cards, chunks[2]);
}

/// Lay cards out in a grid: three columns when there is room, fewer on
/// narrow terminals. Rows that do not fit are not drawn.
fn draw_cards(f: &mut Frame, hits: &mut HitMap, cards: &[Card], area: Rect) {
    if cards.is_empty() || area.height == 0 {
        return;
    }
    let columns: usize = match area.width {
        w if w >= 90 => 3,
        w if w >= 60 => 2,
        _ => 1,
    };

    let mut y = area.y;
    for row in cards.chunks(columns) {
        let height = row
            .iter()
            .map(|c| c.buttons.len() as u16 + 4)
            .max()
            .unwrap_or(4);
        if y + height > area.bottom() {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, height);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);
        for (card, cell) in row.iter().zip(cells.iter()) {
            draw_card(f, hits, card, *cell);
        }
        y += height;
    }
}

fn draw_card(f: &mut Frame, hits: &mut HitMap, card: &Card, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            card.description.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    for (j, button) in card.buttons.iter().enumerate() {
        let row = inner.y + 2 + j as u16;
        if row >= inner.bottom() {
            break;
        }
        let text = format!("{} →", button.label);
        let width = (Span::raw(text.as_str()).width() as u16).min(inner.width);
        let rect = Rect::new(inner.x, row, width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::Blue))),
            rect,
        );
        let target = match &button.path {
            Some(path) => ClickTarget::Link(path.clone()),
            None => ClickTarget::Placeholder {
                label: button.label.clone(),
                action: button.action.clone(),
            },
        };
        hits.targets.push((rect, target));
    }
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    f.render_widget(
        Paragraph::new(format!("© {year} {INSTITUTION}. All rights reserved."))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_status(f: &mut Frame, app: &PortalApp, area: Rect) {
    let mut spans = vec![
        Span::styled(" [", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.router.current_path().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("]", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
    ];

    match &app.notice {
        Some(notice) => spans.push(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => {
            let shortcuts = if app.router.is_home() {
                format!(
                    "Tab:Sections  ←/→:Slides  1-9:Jump  q:Quit  (autoplay {}s)",
                    app.carousel.period().as_secs()
                )
            } else {
                "Tab:Sections  Backspace:Back  Home:Landing  q:Quit".to_string()
            };
            spans.push(Span::styled(shortcuts, Style::default().fg(Color::DarkGray)));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
