// 📈 Charts - returned-count bars + ranked per-person sales bars
//
// Chart data is always built; drawing needs the `tui` feature.
// Without it, showing charts is a logged no-op.

use crate::aggregate::PersonSales;
#[cfg(not(feature = "tui"))]
use crate::error::Result;

/// One bar: label, bar height, text printed on the bar
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: u64,
    pub text: String,
}

/// A titled bar chart ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<ChartBar>,
}

impl ChartView {
    /// Count of orders per `Returned` value
    pub fn return_counts(counts: &[(String, u64)]) -> Self {
        ChartView {
            title: "Orders returned vs not returned".to_string(),
            y_label: "Orders".to_string(),
            bars: counts
                .iter()
                .map(|(label, n)| ChartBar {
                    label: label.clone(),
                    value: *n,
                    text: n.to_string(),
                })
                .collect(),
        }
    }

    /// Ranked sales per person; negative totals draw as empty bars
    pub fn sales_by_person(ranking: &[PersonSales]) -> Self {
        ChartView {
            title: "Sales by person".to_string(),
            y_label: "Sales ($)".to_string(),
            bars: ranking
                .iter()
                .map(|p| ChartBar {
                    label: p.person.clone(),
                    value: p.sales.max(0.0).round() as u64,
                    text: format!("{:.0}", p.sales),
                })
                .collect(),
        }
    }
}

#[cfg(feature = "tui")]
pub use terminal::{draw_chart, show_charts};

#[cfg(not(feature = "tui"))]
pub fn show_charts(views: &[ChartView]) -> Result<()> {
    log::info!("Built without the `tui` feature; skipping {} chart(s)", views.len());
    Ok(())
}

#[cfg(feature = "tui")]
mod terminal {
    use super::ChartView;
    use crate::error::Result;
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::{Backend, CrosstermBackend},
        layout::{Constraint, Direction, Layout},
        style::{Color, Modifier, Style},
        text::Line,
        widgets::{
            block::{Position, Title},
            Bar, BarChart, BarGroup, Block, Borders, Paragraph,
        },
        Frame, Terminal,
    };
    use std::io::{self, IsTerminal};

    /// Show each chart full-screen until a key advances past it
    ///
    /// Without an interactive terminal (pipes, CI, detached sessions) this is
    /// a logged no-op.
    pub fn show_charts(views: &[ChartView]) -> Result<()> {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
        show_charts_on(views, interactive)
    }

    fn show_charts_on(views: &[ChartView], interactive: bool) -> Result<()> {
        if views.is_empty() {
            return Ok(());
        }
        if !interactive {
            log::warn!("No interactive terminal; skipping {} chart(s)", views.len());
            return Ok(());
        }

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = run_charts(&mut terminal, views);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res?;
        Ok(())
    }

    fn run_charts<B: Backend>(terminal: &mut Terminal<B>, views: &[ChartView]) -> io::Result<()> {
        for (i, view) in views.iter().enumerate() {
            loop {
                terminal.draw(|f| draw_chart(f, view, i + 1, views.len()))?;

                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => break,
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    /// Draw one chart with a status line underneath
    pub fn draw_chart(f: &mut Frame, view: &ChartView, position: usize, total: usize) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Chart
                Constraint::Length(3), // Status bar
            ])
            .split(f.size());

        let bars: Vec<Bar> = view
            .bars
            .iter()
            .map(|b| {
                Bar::default()
                    .label(Line::from(b.label.as_str()))
                    .value(b.value)
                    .text_value(b.text.clone())
            })
            .collect();

        // Fit bars to the available width
        let count = view.bars.len().max(1) as u16;
        let inner_width = chunks[0].width.saturating_sub(2);
        let bar_width = (inner_width / count).saturating_sub(2).clamp(3, 20);

        let chart = BarChart::default()
            .block(
                Block::default()
                    .title(format!(" {} ", view.title))
                    .title(Title::from(format!(" {} ", view.y_label)).position(Position::Bottom))
                    .borders(Borders::ALL),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::LightBlue))
            .value_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            )
            .label_style(Style::default().fg(Color::White));
        f.render_widget(chart, chunks[0]);

        let status = Paragraph::new(Line::from(format!(
            "Chart {}/{}  |  q/Enter: next",
            position, total
        )))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(status, chunks[1]);
    }

}
