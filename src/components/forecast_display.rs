use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::current_conditions::CURRENT_CONDITIONS_HEIGHT;
use super::{
    Component, CurrentConditions, CurrentConditionsProps, ForecastGrid, ForecastGridProps,
    SearchForm, SearchFormProps,
};
use crate::action::Action;
use crate::forecast::ForecastReport;
use crate::state::{AppState, ViewMode};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Rows taken by the form: labels + inputs
const FORM_HEIGHT: u16 = 4;

/// Props for ForecastDisplay - read-only view of state
pub struct ForecastDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The root view: search form, result card, key hints
#[derive(Default)]
pub struct ForecastDisplay {
    form: SearchForm,
}

impl ForecastDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn form_props<'a>(state: &'a AppState, is_focused: bool) -> SearchFormProps<'a> {
        SearchFormProps {
            city: &state.city_input,
            days: &state.days_input,
            focus: state.focus,
            submit_label: state.submit_label(),
            submit_enabled: state.submit_enabled(),
            is_focused,
            on_city_change: Action::FormCityChange,
            on_days_change: Action::FormDaysChange,
        }
    }
}

impl Component<Action> for ForecastDisplay {
    type Props<'a> = ForecastDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let form_props = Self::form_props(props.state, props.is_focused);
        self.form
            .handle_event(event, form_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ForecastDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(FORM_HEIGHT), // Form
            Constraint::Length(1),           // Spacer
            Constraint::Min(1),              // Card
            Constraint::Length(1),           // Help bar
        ])
        .split(area);

        let form_props = Self::form_props(props.state, props.is_focused);
        self.form.render(frame, chunks[0], form_props);

        let card = chunks[2];
        match props.state.view_mode() {
            ViewMode::Idle => render_hint(frame, card),
            ViewMode::Loading => render_loading(frame, card, props.state.spinner_frame()),
            ViewMode::Error => {
                render_error(frame, card, props.state.forecast.error().unwrap_or_default());
            }
            ViewMode::Content => {
                if let Some(report) = props.state.forecast.data() {
                    render_content(frame, card, report);
                }
            }
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "get weather"),
                    StatusBarHint::new("tab", "switch field"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_content(frame: &mut Frame, area: Rect, report: &ForecastReport) {
    let chunks = Layout::vertical([
        Constraint::Length(CURRENT_CONDITIONS_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    let mut current = CurrentConditions;
    current.render(frame, chunks[0], CurrentConditionsProps { report });

    let mut grid = ForecastGrid;
    grid.render(frame, chunks[2], ForecastGridProps { days: &report.days });
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let hint = Line::from(vec![
        Span::styled("Enter a city and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), line);
}

fn render_loading(frame: &mut Frame, area: Rect, spinner: &str) {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let msg = Line::from(vec![
        Span::styled(spinner.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(" Loading weather data...", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(msg), line);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(3), // message
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        )
        .wrap(Wrap { trim: true }),
        chunks[2],
    );
}
