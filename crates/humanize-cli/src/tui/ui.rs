//! TUI rendering — telemetry left, seats and planner right.
//!
//! ┌──────────────────────────────────────────────────┐
//! │  🌿 HumanizeCity     steps 7842/10000   32.4°C   │
//! ├────────────────────────┬─────────────────────────┤
//! │  Telemetry             │  Smart Seats            │
//! │  temp   32.4 °C        │  ▸ A1 North Promenade   │
//! │  AQI    58 Moderate    │    A2 Rose Garden Bench │
//! │  humid  24 %           │    B1 Heritage Pavilion │
//! │  wind   12 km/h        │  ...                    │
//! │  ▁▂▄▆█ flow (ref day)  ├─────────────────────────┤
//! │  ▂▃▃▂▃ AQI (live)      │  AI Planner             │
//! │                        │  > where to add shade?  │
//! ├────────────────────────┴─────────────────────────┤
//! │  ↑↓ seats  f fold  s shade  i ask  q quit        │
//! └──────────────────────────────────────────────────┘

use humanize_core::{PEDESTRIAN_FLOW, peak_flow};
use ratatui::{prelude::*, widgets::*};

use super::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(12),   // main
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_title(f, rows[0], app);
    draw_main(f, rows[1], app);
    draw_keys(f, rows[2], app);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let snap = app.snapshot();
    let spin = if app.sending { " ⟳" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Line::from(vec![
            Span::styled(" 🌿 HumanizeCity ", Style::default().bold().fg(Color::Green)),
            Span::raw(" Riyadh Sports Boulevard  "),
            Span::styled(
                format!(
                    "steps {}/{}  {:.1}°C  AQI {}{spin} ",
                    snap.steps, snap.step_goal, snap.temperature_c, snap.air_quality_index
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    f.render_widget(block, area);
}

fn draw_main(f: &mut Frame, area: Rect, app: &mut App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_telemetry(f, cols[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(cols[1]);

    draw_seats(f, right[0], app);
    draw_planner(f, right[1], app);
}

fn draw_telemetry(f: &mut Frame, area: Rect, app: &App) {
    let snap = app.snapshot();

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // steps gauge
            Constraint::Length(6), // metric rows
            Constraint::Length(4), // flow sparkline
            Constraint::Min(3),    // live AQI sparkline
        ])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Daily steps "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio((snap.step_pct() / 100.0).clamp(0.0, 1.0))
        .label(format!("{} / {}", snap.steps, snap.step_goal));
    f.render_widget(gauge, parts[0]);

    let aqi_color = if snap.air_quality_index < 50 {
        Color::Green
    } else if snap.air_quality_index < 100 {
        Color::Yellow
    } else {
        Color::Red
    };
    let rows = vec![
        Row::new(vec![
            "temperature".to_string(),
            format!("{:.1} °C", snap.temperature_c),
        ]),
        Row::new(vec![
            "air quality".to_string(),
            format!("{} ({})", snap.air_quality_index, snap.aqi_label()),
        ])
        .style(Style::default().fg(aqi_color)),
        Row::new(vec!["humidity".to_string(), format!("{} %", snap.humidity_pct)]),
        Row::new(vec!["wind".to_string(), format!("{} km/h", snap.wind_kph)]),
    ];
    let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(10)])
        .block(Block::default().borders(Borders::ALL).title(" Environment "));
    f.render_widget(table, parts[1]);

    let flow: Vec<u64> = PEDESTRIAN_FLOW.iter().map(|p| u64::from(p.flow)).collect();
    let peak = peak_flow();
    let flow_chart = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Pedestrian flow (reference day, peak {} @ {}) ",
            peak.flow, peak.hour
        )))
        .style(Style::default().fg(Color::Cyan))
        .data(&flow);
    f.render_widget(flow_chart, parts[2]);

    let aqi: Vec<u64> = app.aqi_history.iter().copied().collect();
    let aqi_chart = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(" AQI (live) "))
        .style(Style::default().fg(aqi_color))
        .data(&aqi);
    f.render_widget(aqi_chart, parts[3]);
}

fn draw_seats(f: &mut Frame, area: Rect, app: &mut App) {
    let cursor = app.cursor;
    let items: Vec<Row> = app
        .board
        .zones()
        .iter()
        .enumerate()
        .map(|(i, zone)| {
            let pointer = if i == cursor { "▸" } else { " " };
            let status = zone.status();
            let style = if i == cursor {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                match status {
                    humanize_core::SeatStatus::Occupied => Style::default().fg(Color::Red),
                    humanize_core::SeatStatus::Available => Style::default().fg(Color::Green),
                    humanize_core::SeatStatus::Folded => Style::default().fg(Color::Yellow),
                }
            };
            Row::new(vec![
                pointer.to_string(),
                zone.id.clone(),
                zone.label.clone(),
                status.to_string(),
                if zone.shaded { "☂".to_string() } else { " ".to_string() },
            ])
            .style(style)
        })
        .collect();

    let counts = app.board.counts();
    let table = Table::new(
        items,
        [
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(2),
        ],
    )
    .block(Block::default().borders(Borders::ALL).title(format!(
        " Smart seats — {} occupied · {} available · {} folded ",
        counts.occupied, counts.available, counts.folded
    )));
    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn draw_planner(f: &mut Frame, area: Rect, app: &App) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let (input_text, input_style) = if !app.planner_enabled() {
        (
            "planner disabled — gateway unavailable".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else if app.input_mode == InputMode::Editing {
        (format!("{}▏", app.input), Style::default().fg(Color::White))
    } else if app.input.is_empty() {
        (
            "press i to ask the planner".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.input.clone(), Style::default().fg(Color::Gray))
    };

    let input = Paragraph::new(input_text).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if app.input_mode == InputMode::Editing {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            })
            .title(" 🤖 AI Planner "),
    );
    f.render_widget(input, parts[0]);

    let body = if app.sending {
        Text::styled("⟳ Analyzing boulevard data...", Style::default().fg(Color::Yellow))
    } else {
        match &app.last_result {
            Some(result) => {
                let tag_style = match result.source {
                    humanize_core::InsightSource::Live => Style::default().fg(Color::Green),
                    humanize_core::InsightSource::Fallback => Style::default().fg(Color::Yellow),
                };
                let mut lines = vec![Line::styled(format!("[{}]", result.source), tag_style)];
                lines.extend(result.text.lines().map(|l| Line::raw(l.to_string())));
                Text::from(lines)
            }
            None => Text::styled(
                "Ask a question to get live planning insights.",
                Style::default().fg(Color::DarkGray),
            ),
        }
    };
    let result_panel = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Insight "));
    f.render_widget(result_panel, parts[1]);
}

fn draw_keys(f: &mut Frame, area: Rect, app: &App) {
    let text = match app.input_mode {
        InputMode::Normal => "  ↑↓ seats   f: fold   s: shade   i: ask planner   q: quit",
        InputMode::Editing => "  type your question   Enter: send   Esc: cancel",
    };
    let keys = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(keys, area);
}
