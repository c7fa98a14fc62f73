use crate::contact::Field;
use crate::content::{self, filter_portfolio};
use crate::rotation::{Direction, InputFocus, RotationSnapshot};
use crate::ui::app::{App, HERO, TESTIMONIALS};
use crate::ui::contact::SubmitStatus;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{carousel_controls, home_layout, layout_regions};
use crate::ui::page::Page;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_ACCENT, BRAND_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Constraint, Direction as Axis, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.page()), header);
    frame.render_widget(Clear, body);
    match app.page() {
        Page::Home => draw_home(frame, app, body),
        Page::Services => draw_services(frame, body),
        Page::About => draw_about(frame, body),
        Page::Contact => draw_contact(frame, app, body),
    }
    let focus = match app.page() {
        Page::Contact => app.contact_focus(),
        _ => InputFocus::Page,
    };
    frame.render_widget(Footer::new().widget(footer, app.page(), focus), footer);
}

fn bordered(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_home(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let layout = home_layout(body);
    let key_target = app.signals().key_target();

    if let Some(snapshot) = app.carousel_snapshot(HERO) {
        let block = carousel_block("Featured", &snapshot, key_target == Some(HERO));
        let inner = block.inner(layout.hero);
        frame.render_widget(block, layout.hero);
        if let Some(slide) = snapshot
            .active_index
            .and_then(|i| content::hero_slides().get(i))
        {
            let hero = &slide.payload;
            let lines = vec![
                Line::from(Span::styled(
                    hero.title,
                    Style::default()
                        .fg(HEADER_TEXT)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(hero.subtitle, Style::default().fg(MUTED_TEXT))),
                Line::from(""),
                Line::from(Span::styled(
                    format!("[ {} ]", hero.call_to_action),
                    Style::default().fg(BRAND_HIGHLIGHT),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                inner,
            );
        }
        draw_controls(frame, layout.hero, &snapshot);
    }

    draw_services_grid(frame, layout.services);
    draw_portfolio(frame, app, layout.portfolio);

    if let Some(snapshot) = app.carousel_snapshot(TESTIMONIALS) {
        let block = carousel_block("What clients say", &snapshot, key_target == Some(TESTIMONIALS));
        let inner = block.inner(layout.testimonials);
        frame.render_widget(block, layout.testimonials);
        if let Some(slide) = snapshot
            .active_index
            .and_then(|i| content::testimonials().get(i))
        {
            let quote = &slide.payload;
            let lines = vec![
                Line::from(Span::styled(
                    format!("“{}”", quote.quote),
                    Style::default()
                        .fg(HEADER_TEXT)
                        .add_modifier(Modifier::ITALIC),
                )),
                Line::from(Span::styled(
                    format!("— {}, {}", quote.author, quote.role),
                    Style::default().fg(MUTED_TEXT),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                inner,
            );
        }
        draw_controls(frame, layout.testimonials, &snapshot);
    }
}

fn carousel_block(title: &str, snapshot: &RotationSnapshot, focused: bool) -> Block<'static> {
    let status = if !snapshot.page_visible {
        "hidden"
    } else if snapshot.paused_by_user {
        "⏸ paused"
    } else if !snapshot.auto_advancing {
        "■ manual"
    } else {
        "▶ auto"
    };
    let arrow = match snapshot.direction {
        Direction::Forward => "→",
        Direction::Backward => "←",
    };
    let border = if focused { BRAND_ACCENT } else { GLOBAL_BORDER };
    Block::default()
        .title(format!(" {title} {arrow} "))
        .title_bottom(Line::from(format!(" {status} ")).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_controls(frame: &mut Frame<'_>, area: Rect, snapshot: &RotationSnapshot) {
    let Some(controls) = carousel_controls(area, snapshot.slide_count) else {
        return;
    };
    let mut spans = vec![Span::styled("◀ ", Style::default().fg(HEADER_TEXT))];
    for index in 0..snapshot.slide_count {
        let (dot, color) = if snapshot.active_index == Some(index) {
            ("● ", BRAND_HIGHLIGHT)
        } else {
            ("○ ", MUTED_TEXT)
        };
        spans.push(Span::styled(dot, Style::default().fg(color)));
    }
    spans.push(Span::styled("▶", Style::default().fg(HEADER_TEXT)));
    let row = Rect {
        x: controls.prev.x,
        y: controls.prev.y,
        width: controls.next.x - controls.prev.x + 1,
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

fn draw_services_grid(frame: &mut Frame<'_>, area: Rect) {
    let block = bordered("Services");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let services = content::services();
    let rows = Layout::default()
        .direction(Axis::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(inner);
    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Axis::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row);
        for (col_idx, cell) in cols.iter().enumerate() {
            let Some(service) = services.get(row_idx * 3 + col_idx) else {
                continue;
            };
            let lines = vec![
                Line::from(Span::styled(
                    service.name,
                    Style::default()
                        .fg(BRAND_ACCENT)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(service.summary, Style::default().fg(MUTED_TEXT))),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), *cell);
        }
    }
}

fn draw_portfolio(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = bordered("Portfolio");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let active = app.portfolio_filter();
    let mut tabs = Vec::new();
    for category in content::categories(content::portfolio()) {
        let style = if category == active {
            Style::default()
                .fg(BRAND_HIGHLIGHT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        tabs.push(Span::styled(format!(" {} ", category.label()), style));
    }

    let mut lines = vec![Line::from(tabs), Line::from("")];
    for item in filter_portfolio(content::portfolio(), active) {
        lines.push(Line::from(vec![
            Span::styled(item.title, Style::default().fg(HEADER_TEXT)),
            Span::styled(format!("  {}", item.client), Style::default().fg(MUTED_TEXT)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_services(frame: &mut Frame<'_>, body: Rect) {
    let block = bordered("What we do");
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let mut lines = Vec::new();
    for service in content::services() {
        lines.push(Line::from(Span::styled(
            service.name,
            Style::default()
                .fg(BRAND_ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            service.summary,
            Style::default().fg(HEADER_TEXT),
        )));
        for feature in service.features {
            lines.push(Line::from(Span::styled(
                format!("  • {feature}"),
                Style::default().fg(MUTED_TEXT),
            )));
        }
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_about(frame: &mut Frame<'_>, body: Rect) {
    let block = bordered("About us");
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let mut lines = vec![
        Line::from(Span::styled(
            "A small studio for brands, products and the campaigns around them.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Team",
            Style::default()
                .fg(BRAND_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for member in content::team() {
        lines.push(Line::from(vec![
            Span::styled(
                member.name,
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", member.role), Style::default().fg(BRAND_HIGHLIGHT)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", member.bio),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_contact(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let block = bordered("Contact");
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let state = &app.contact;
    let editing = app.contact_focus() == InputFocus::TextInput && state.is_editing();

    let rows = Layout::default()
        .direction(Axis::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(inner);

    for (field, area) in Field::ALL.into_iter().zip(rows.iter()) {
        let focused = editing && state.focused == field;
        let border = if focused { BRAND_ACCENT } else { GLOBAL_BORDER };
        let field_block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let field_inner = field_block.inner(*area);
        frame.render_widget(field_block, *area);

        let mut text = state.form.value(field).to_string();
        if focused {
            text.push('▏');
        }
        let mut lines: Vec<Line> = text
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(HEADER_TEXT))))
            .collect();
        if let Some(error) = state.errors.get(field) {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(STATUS_ERROR),
            )));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), field_inner);
    }

    let status = match state.status {
        SubmitStatus::Editing => Line::from(Span::styled(
            "Ctrl+S to send",
            Style::default().fg(MUTED_TEXT),
        )),
        SubmitStatus::Submitting => {
            let dots = ".".repeat((app.frame() % 4) as usize);
            Line::from(Span::styled(
                format!("Sending{dots}"),
                Style::default().fg(BRAND_HIGHLIGHT),
            ))
        }
        SubmitStatus::Submitted => Line::from(Span::styled(
            "Thanks! We'll be in touch shortly.",
            Style::default().fg(STATUS_OK),
        )),
    };
    frame.render_widget(Paragraph::new(status), rows[4]);
}
