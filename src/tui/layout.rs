//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Wrap};

use super::runtime::{App, FormField, InputMode};
use super::style;
use crate::estimator::TARIFF_PLANS;
use crate::format::{date, rupees};
use crate::tips::ENERGY_SAVING_TIPS;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // body
            Constraint::Length(1), // status
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let side_open = app.show_chart || app.show_history || app.show_tips;
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if side_open {
            [Constraint::Percentage(55), Constraint::Percentage(45)]
        } else {
            [Constraint::Percentage(100), Constraint::Percentage(0)]
        })
        .split(chunks[1]);

    render_main_column(frame, app, body[0]);
    if side_open {
        render_side_column(frame, app, body[1]);
    }

    render_status(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

/// Header bar: title, plan, total cost.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let plan = app
        .estimator
        .selected_plan()
        .map_or("no plan", |t| t.name());
    let header = Line::from(vec![
        Span::styled(
            " BIJLI BUDDY ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {plan} │ total ")),
        Span::styled(
            rupees(app.estimator.total_cost()),
            Style::default()
                .fg(style::COST_FG)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_main_column(frame: &mut Frame, app: &App, area: Rect) {
    if !app.show_advanced {
        render_inputs(frame, app, area);
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // inputs
            Constraint::Length(3), // form
            Constraint::Min(4),    // appliance table
        ])
        .split(area);
    render_inputs(frame, app, chunks[0]);
    render_form(frame, app, chunks[1]);
    render_appliances(frame, app, chunks[2]);
}

/// Inputs and the derived cost chain.
fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let est = &app.estimator;
    let b = est.breakdown();
    let plans: Vec<Span> = TARIFF_PLANS
        .iter()
        .map(|p| {
            let selected = est.selected_plan().is_some_and(|t| t.plan() == p);
            let text = format!(" {} {}/u ", p.name, rupees(p.rate));
            if selected {
                Span::styled(text, Style::default().add_modifier(Modifier::REVERSED))
            } else {
                Span::raw(text)
            }
        })
        .collect();

    let lines = vec![
        Line::from(format!("  Units consumed:  {:.0}", est.units())),
        Line::from([vec![Span::raw("  Tariff plan:    ")], plans].concat()),
        Line::from(format!(
            "  Solar panels:    {:>2}  (-{:.0} units)",
            est.solar_panels(),
            b.solar_offset
        )),
        Line::from(format!(
            "  Billable units:  {:.2}  (appliances {:.2})",
            b.total_units, b.appliance_consumption
        )),
        Line::from(format!(
            "  Base {}  + GST {}",
            rupees(b.base_amount),
            rupees(b.tax)
        )),
        Line::from(Span::styled(
            format!("  Estimated cost:  {}", rupees(b.total_cost)),
            Style::default()
                .fg(style::COST_FG)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let block = Block::default().title(" Estimate ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Add-appliance form with the focused field highlighted.
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = app.estimator.form();
    let focus = match app.mode {
        InputMode::Editing(field) => Some(field),
        InputMode::Normal => None,
    };
    let field = |label: &str, value: &str, which: FormField| {
        let value_style = if focus == Some(which) {
            Style::default()
                .fg(style::FOCUS_FG)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        vec![
            Span::raw(format!(" {label}: ")),
            Span::styled(format!("{value}_"), value_style),
        ]
    };
    let line = Line::from(
        [
            field("Name", &form.name, FormField::Name),
            field("kWh/h", &app.consumption_input, FormField::Consumption),
            field("Hours", &app.hours_input, FormField::Hours),
        ]
        .concat(),
    );
    let title = if focus.is_some() {
        " Add Appliance (Tab: next, Enter: add, Esc: done) "
    } else {
        " Add Appliance (n) "
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Appliance table with the selected row reversed.
fn render_appliances(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .estimator
        .appliances()
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let row = Row::new(vec![
                a.name.clone(),
                format!("{:.3}", a.consumption),
                format!("{:.1}", a.hours),
                format!("{:.2}", a.daily_units()),
            ]);
            if i == app.selected {
                row.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(9),
        ],
    )
    .header(
        Row::new(vec!["Appliance", "kWh/h", "Hours", "Units"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(format!(
                " Appliances: {:.2} units/day ",
                app.estimator.total_consumption()
            ))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

/// Chart, history and tips panels, stacked in that order.
fn render_side_column(frame: &mut Frame, app: &App, area: Rect) {
    let open: Vec<fn(&mut Frame, &App, Rect)> = [
        (app.show_chart, render_chart as fn(&mut Frame, &App, Rect)),
        (app.show_history, render_history),
        (app.show_tips, render_tips),
    ]
    .into_iter()
    .filter_map(|(shown, f)| shown.then_some(f))
    .collect();

    let constraints = vec![Constraint::Ratio(1, open.len() as u32); open.len()];
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    for (render_panel, chunk) in open.into_iter().zip(chunks.iter()) {
        render_panel(frame, app, *chunk);
    }
}

/// Per-appliance consumption as horizontal bars.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let chart = app.estimator.chart();
    let bar_room = f64::from(area.width.saturating_sub(30));
    let lines: Vec<Line> = if chart.is_empty() {
        vec![Line::from("  No appliances")]
    } else {
        chart
            .slices
            .iter()
            .map(|s| {
                let bar = "█".repeat((s.share * bar_room).round() as usize);
                Line::from(vec![
                    Span::raw(format!(" {:<12.12} ", s.label)),
                    Span::styled(bar, Style::default().fg(style::hex_color(s.color))),
                    Span::raw(format!(" {:.2} ({:.0}%)", s.kwh, s.share * 100.0)),
                ])
            })
            .collect()
    };
    let block = Block::default()
        .title(" Consumption Chart ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .estimator
        .history()
        .iter()
        .map(|e| {
            Row::new(vec![
                date(e.date),
                format!("{:.2}", e.units),
                rupees(e.cost),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Date", "Units", "Cost"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(" Calculation History ")
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn render_tips(frame: &mut Frame, _app: &App, area: Rect) {
    let lines: Vec<Line> = ENERGY_SAVING_TIPS
        .iter()
        .map(|tip| Line::from(format!(" • {tip}")))
        .collect();
    let block = Block::default()
        .title(" Energy Saving Tips ")
        .borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.status.as_deref().unwrap_or("");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(style::STATUS_FG),
        ))),
        area,
    );
}

/// Footer with keybinding hints for the current mode.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.mode {
        InputMode::Normal => {
            " q:Quit  ←/→:Units  p:Plan  +/-:Panels  a:Advanced  n:New  ↑/↓ d:Delete  s:Save  h:History  t:Tips  c:Chart"
        }
        InputMode::Editing(_) => " Type to edit  Tab:Next field  Enter:Add  Esc:Done",
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
