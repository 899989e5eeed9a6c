//! Ratatui-based terminal UI.
//!
//! The TUI has two screens:
//! - catalog: a filter panel and the filtered planet list on the left, the
//!   selected planet's facts and discovery chart on the right
//! - performance: precision/recall figures and ROC / PR curves per model

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::info;

use crate::app::pipeline::{DetailView, prepare_detail};
use crate::chart::{RADIAL_VELOCITY, TRANSIT};
use crate::data::{Catalog, PR_CURVE, ROC_CURVE, model_performance};
use crate::domain::{ExoplanetRecord, FilterSpec, MethodFilter, MissionFilter, MissionModel};
use crate::error::AppError;
use crate::filter::{FilterEngine, FilterSummary};

mod plotters_chart;

use plotters_chart::SeriesPlottersChart;

const YEAR_STEP: i32 = 1;
const SIZE_STEP: f64 = 0.5;

/// Start the TUI.
pub fn run(catalog: Catalog, engine: FilterEngine) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(catalog, engine);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Catalog,
    Performance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Filters,
    List,
}

/// Rows of the filter panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterField {
    Search,
    Method,
    Mission,
    YearMin,
    YearMax,
    SizeMin,
    SizeMax,
}

impl FilterField {
    const ALL: [FilterField; 7] = [
        FilterField::Search,
        FilterField::Method,
        FilterField::Mission,
        FilterField::YearMin,
        FilterField::YearMax,
        FilterField::SizeMin,
        FilterField::SizeMax,
    ];
}

struct App {
    catalog: Catalog,
    engine: FilterEngine,
    spec: FilterSpec,
    screen: Screen,
    focus: Focus,
    selected_field: usize,
    selected_record: usize,
    editing_search: bool,
    perf_model: MissionModel,
    status: String,
}

impl App {
    fn new(catalog: Catalog, engine: FilterEngine) -> Self {
        let spec = engine.default_spec();
        let mut app = Self {
            catalog,
            engine,
            spec,
            screen: Screen::Catalog,
            focus: Focus::List,
            selected_field: 0,
            selected_record: 0,
            editing_search: false,
            perf_model: MissionModel::Kepler,
            status: String::new(),
        };
        app.reload();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        info!(spec = ?self.spec, "leaving tui");
        Ok(())
    }

    /// Apply one key press. Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing_search {
            self.handle_search_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('p') => {
                self.screen = match self.screen {
                    Screen::Catalog => Screen::Performance,
                    Screen::Performance => Screen::Catalog,
                };
            }
            KeyCode::Char('r') => self.reload(),
            _ => match self.screen {
                Screen::Catalog => self.handle_catalog_key(code),
                Screen::Performance => self.handle_perf_key(code),
            },
        }
        false
    }

    fn handle_catalog_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Filters => Focus::List,
                    Focus::List => Focus::Filters,
                };
            }
            KeyCode::Char('/') => self.start_search_edit(),
            KeyCode::Char('x') => {
                self.engine.reset(&mut self.spec);
                self.selected_record = 0;
                self.status = "Filters reset.".to_string();
            }
            KeyCode::Up => match self.focus {
                Focus::Filters => self.selected_field = self.selected_field.saturating_sub(1),
                Focus::List => self.selected_record = self.selected_record.saturating_sub(1),
            },
            KeyCode::Down => match self.focus {
                Focus::Filters => {
                    self.selected_field = (self.selected_field + 1).min(FilterField::ALL.len() - 1);
                }
                Focus::List => {
                    let shown = self.visible().len();
                    if self.selected_record + 1 < shown {
                        self.selected_record += 1;
                    }
                }
            },
            KeyCode::Left if self.focus == Focus::Filters => self.adjust_field(-1),
            KeyCode::Right if self.focus == Focus::Filters => self.adjust_field(1),
            KeyCode::Enter if self.focus == Focus::Filters => {
                if FilterField::ALL[self.selected_field] == FilterField::Search {
                    self.start_search_edit();
                }
            }
            _ => {}
        }
    }

    fn handle_perf_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Left | KeyCode::Right | KeyCode::Char('m')) {
            self.perf_model = self.perf_model.next();
        }
    }

    fn start_search_edit(&mut self) {
        self.editing_search = true;
        self.status = "Type to search. Enter/Esc to finish.".to_string();
    }

    fn handle_search_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => {
                self.editing_search = false;
                self.status = self.summary().to_string();
            }
            KeyCode::Backspace => {
                self.spec.search.pop();
                self.selected_record = 0;
            }
            KeyCode::Char(c) => {
                self.spec.search.push(c);
                self.selected_record = 0;
            }
            _ => {}
        }
    }

    /// Step the selected filter. Ranges stay within the configured bounds and
    /// never invert.
    fn adjust_field(&mut self, delta: i32) {
        let config = self.engine.config();
        let years = config.year_bounds;
        let sizes = config.size_bounds;
        let step = f64::from(delta) * SIZE_STEP;

        match FilterField::ALL[self.selected_field] {
            FilterField::Search => {}
            FilterField::Method => {
                self.spec.discovery_method =
                    cycle(&MethodFilter::options(), &self.spec.discovery_method, delta);
            }
            FilterField::Mission => {
                self.spec.mission = cycle(&MissionFilter::options(), &self.spec.mission, delta);
            }
            FilterField::YearMin => {
                let r = &mut self.spec.year_range;
                r.min = (r.min + delta * YEAR_STEP).clamp(years.min, r.max);
            }
            FilterField::YearMax => {
                let r = &mut self.spec.year_range;
                r.max = (r.max + delta * YEAR_STEP).clamp(r.min, years.max);
            }
            FilterField::SizeMin => {
                let r = &mut self.spec.size_range;
                r.min = (r.min + step).clamp(sizes.min, r.max);
            }
            FilterField::SizeMax => {
                let r = &mut self.spec.size_range;
                r.max = (r.max + step).clamp(r.min, sizes.max);
            }
        }
        self.selected_record = 0;
        self.status = self.summary().to_string();
    }

    fn reload(&mut self) {
        self.status = "Loading exoplanets...".to_string();
        if self.catalog.refetch() {
            self.status = format!("Loaded from {}.", self.catalog.source().describe());
        } else if let Some(err) = self.catalog.error() {
            self.status = format!("{err} (r to retry)");
        }
        self.selected_record = 0;
    }

    fn visible(&self) -> Vec<&ExoplanetRecord> {
        self.engine.filter(self.catalog.records(), &self.spec)
    }

    fn summary(&self) -> FilterSummary {
        FilterSummary {
            shown: self.visible().len(),
            total: self.catalog.records().len(),
        }
    }

    fn selected(&self) -> Option<&ExoplanetRecord> {
        self.visible().get(self.selected_record).copied()
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.screen {
            Screen::Catalog => self.draw_catalog(frame, chunks[1]),
            Screen::Performance => self.draw_performance(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled("exo", Style::default().fg(Color::Cyan)),
                Span::raw(": exoplanet catalog explorer"),
            ]),
            Line::from(Span::styled(
                format!(
                    "source: {} | {}",
                    self.catalog.source().describe(),
                    self.summary()
                ),
                Style::default().fg(Color::Gray),
            )),
        ];

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_catalog(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FilterField::ALL.len() as u16 + 2), Constraint::Min(0)])
            .split(columns[0]);

        self.draw_filters(frame, left[0]);
        self.draw_list(frame, left[1]);
        self.draw_detail(frame, columns[1]);
    }

    fn draw_filters(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let search = if self.spec.search.is_empty() && !self.editing_search {
            "(none)".to_string()
        } else if self.editing_search {
            format!("{}_", self.spec.search)
        } else {
            self.spec.search.clone()
        };

        let items = vec![
            ListItem::new(format!("Search:   {search}")),
            ListItem::new(format!("Method:   {}", self.spec.discovery_method)),
            ListItem::new(format!("Mission:  {}", self.spec.mission)),
            ListItem::new(format!("Year min: {}", self.spec.year_range.min)),
            ListItem::new(format!("Year max: {}", self.spec.year_range.max)),
            ListItem::new(format!("Size min: {:.1} R⊕", self.spec.size_range.min)),
            ListItem::new(format!("Size max: {:.1} R⊕", self.spec.size_range.max)),
        ];

        let list = List::new(items)
            .block(focus_block("Filters", self.focus == Focus::Filters))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        if self.focus == Focus::Filters {
            state.select(Some(self.selected_field));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_list(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = focus_block("Planets", self.focus == Focus::List);

        if self.catalog.loading() {
            frame.render_widget(Paragraph::new("Loading exoplanets...").block(block), area);
            return;
        }
        if let Some(err) = self.catalog.error() {
            let msg = Paragraph::new(format!("{err}\n\nPress r to retry."))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(msg, area);
            return;
        }

        let visible = self.visible();
        if visible.is_empty() {
            let msg = Paragraph::new(
                "No exoplanets found.\nTry adjusting your search criteria or filters (x resets).",
            )
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(msg, area);
            return;
        }

        let items: Vec<ListItem> = visible
            .iter()
            .map(|r| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<20}", r.name)),
                    Span::styled(
                        format!(" {} {}", r.discovery_year, r.discovery_method),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected_record.min(visible.len() - 1)));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_detail(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(record) = self.selected() else {
            let block = Block::default().title("Details").borders(Borders::ALL);
            frame.render_widget(
                Paragraph::new("Select a planet to see its details.")
                    .style(Style::default().fg(Color::Gray))
                    .block(block),
                area,
            );
            return;
        };

        let view = prepare_detail(record);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let facts = crate::report::format_detail(record, &view.template);
        let p = Paragraph::new(facts)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(record.name.as_str()).borders(Borders::ALL));
        frame.render_widget(p, chunks[0]);

        self.draw_series_chart(frame, chunks[1], &view);
    }

    fn draw_series_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect, view: &DetailView) {
        let template = &view.template;
        let block = Block::default()
            .title(format!("{} [{}]", template.title, template.icon))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some((x_bounds, y_bounds)) = chart_bounds(&view.points) else {
            let msg = Paragraph::new("No discovery data for this planet.")
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        let (chart_rect, insets) = chart_layout(inner);
        let widget = SeriesPlottersChart {
            points: &view.points,
            x_bounds,
            y_bounds,
            x_label: template.x_label,
            y_label: template.y_label,
            color: template.rgb(),
            fmt_x: fmt_axis_x,
            fmt_y: fmt_axis_y,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            let labels = AxisLabels {
                x: template.x_label,
                y: template.y_label,
            };
            draw_axis_ticks(frame, inner, chart_rect, insets, x_bounds, y_bounds, labels);
        }
    }

    fn draw_performance(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        let model = self.perf_model;
        let table = crate::report::format_performance(model, &model_performance(model));
        let p = Paragraph::new(table)
            .block(Block::default().title("Model performance").borders(Borders::ALL));
        frame.render_widget(p, columns[0]);

        let curves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let unit = [-0.05, 1.05];
        let plots = [
            ("ROC curve", &ROC_CURVE, "False positive rate", "True positive rate", TRANSIT.rgb()),
            ("Precision-recall", &PR_CURVE, "Recall", "Precision", RADIAL_VELOCITY.rgb()),
        ];
        for (area, (title, points, x_label, y_label, color)) in curves.iter().zip(plots) {
            let block = Block::default().title(title).borders(Borders::ALL);
            let inner = block.inner(*area);
            frame.render_widget(block, *area);
            frame.render_widget(Clear, inner);

            let (chart_rect, insets) = chart_layout(inner);
            frame.render_widget(
                SeriesPlottersChart {
                    points,
                    x_bounds: unit,
                    y_bounds: unit,
                    x_label,
                    y_label,
                    color,
                    fmt_x: fmt_axis_x,
                    fmt_y: fmt_axis_x,
                },
                chart_rect,
            );
            if let Some(insets) = insets {
                let labels = AxisLabels { x: x_label, y: y_label };
                draw_axis_ticks(frame, inner, chart_rect, insets, unit, unit, labels);
            }
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match self.screen {
            Screen::Catalog => "Tab focus  ↑/↓ select  ←/→ adjust  / search  x reset  r reload  p perf  q quit",
            Screen::Performance => "←/→ model  p catalog  q quit",
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default().title(title).borders(Borders::ALL).border_style(style)
}

/// Step to the next/previous option, wrapping around.
fn cycle<T: Clone + PartialEq>(options: &[T], current: &T, delta: i32) -> T {
    let len = options.len() as i32;
    let pos = options.iter().position(|o| o == current).unwrap_or(0) as i32;
    let next = (pos + delta).rem_euclid(len.max(1)) as usize;
    options.get(next).cloned().unwrap_or_else(|| current.clone())
}

/// Padded x/y bounds for a series, or `None` when there is nothing to draw.
fn chart_bounds(points: &[(f64, f64)]) -> Option<([f64; 2], [f64; 2])> {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
        return None;
    }
    if x_max <= x_min {
        x_min -= 0.5;
        x_max += 0.5;
    }
    if y_max <= y_min {
        let half = (y_min.abs() * 0.05).max(0.5);
        y_min -= half;
        y_max += half;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    Some(([x_min, x_max], [y_min - pad, y_max + pad]))
}

fn fmt_axis_x(v: f64) -> String {
    format!("{v:.2}")
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.3}")
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

#[derive(Debug, Clone, Copy)]
struct AxisLabels<'a> {
    x: &'a str,
    y: &'a str,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    labels: AxisLabels<'_>,
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let x_val = x_bounds[0] + u * (x_bounds[1] - x_bounds[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = format!("{x_val:.1}");
        let label_len = label.len() as u16;
        let start = x.saturating_sub((label.len() / 2) as u16);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = format!("{y_val:.2}");
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label.len() as u16);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new(labels.x)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new(labels.y)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width.saturating_sub(insets.right),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CatalogSource;
    use crate::domain::DiscoveryMethod;

    fn mock_app() -> App {
        App::new(Catalog::new(CatalogSource::Mock), FilterEngine::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn starts_with_full_mock_catalog() {
        let app = mock_app();
        assert_eq!(app.summary(), FilterSummary { shown: 8, total: 8 });
        assert_eq!(app.selected().map(|r| r.id.as_str()), Some("kepler-452b"));
    }

    #[test]
    fn search_edit_narrows_list() {
        let mut app = mock_app();
        app.handle_key(KeyCode::Char('/'));
        type_text(&mut app, "TRAPPIST");
        app.handle_key(KeyCode::Enter);

        assert!(!app.editing_search);
        assert_eq!(app.spec.search, "TRAPPIST");
        let ids: Vec<&str> = app.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["trappist-1e"]);

        // 'q' while editing is text, not quit.
        app.handle_key(KeyCode::Char('/'));
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert_eq!(app.spec.search, "TRAPPISTq");
    }

    #[test]
    fn method_cycles_and_reset_restores_defaults() {
        let mut app = mock_app();
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Down); // Method
        app.handle_key(KeyCode::Right);
        assert_eq!(
            app.spec.discovery_method,
            MethodFilter::Only(DiscoveryMethod::Transit)
        );
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Left);
        assert_eq!(
            app.spec.discovery_method,
            MethodFilter::Only(DiscoveryMethod::Astrometry),
            "cycling wraps"
        );

        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.spec, app.engine.default_spec());
    }

    #[test]
    fn ranges_never_invert_or_leave_bounds() {
        let mut app = mock_app();
        app.focus = Focus::Filters;
        app.selected_field = 3; // Year min
        app.adjust_field(-1);
        assert_eq!(app.spec.year_range.min, 1995);

        app.spec.year_range.max = 2000;
        app.spec.year_range.min = 2000;
        app.adjust_field(1);
        assert_eq!(app.spec.year_range.min, 2000);

        app.selected_field = 6; // Size max
        app.adjust_field(1);
        assert_eq!(app.spec.size_range.max, 10.0);
        app.adjust_field(-1);
        assert_eq!(app.spec.size_range.max, 9.5);
    }

    #[test]
    fn list_selection_stays_in_range() {
        let mut app = mock_app();
        for _ in 0..20 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.selected_record, 7);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_record, 6);
    }

    #[test]
    fn perf_screen_toggles_model() {
        let mut app = mock_app();
        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.screen, Screen::Performance);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.perf_model, MissionModel::Tess);
        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.screen, Screen::Catalog);
        assert!(app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn failed_load_surfaces_message() {
        let path = std::env::temp_dir().join("exo_atlas_tui_missing.json");
        let _ = std::fs::remove_file(&path);
        let app = App::new(Catalog::new(CatalogSource::File(path)), FilterEngine::default());
        assert!(app.catalog.error().is_some());
        assert!(app.status.ends_with("(r to retry)"), "{}", app.status);
        assert!(app.visible().is_empty());
    }

    #[test]
    fn chart_bounds_pad_and_handle_degenerate_series() {
        assert_eq!(chart_bounds(&[]), None);
        let (x, y) = chart_bounds(&[(0.0, 1.0), (2.0, 3.0)]).unwrap();
        assert_eq!(x, [0.0, 2.0]);
        assert!(y[0] < 1.0 && y[1] > 3.0);

        let (x, y) = chart_bounds(&[(1.0, 1.0)]).unwrap();
        assert!(x[1] > x[0] && y[1] > y[0]);
    }
}
