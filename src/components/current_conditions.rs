use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::forecast::{ForecastReport, format_celsius};
use crate::icons::{self, SPRITE_HEIGHT, WeatherIcon};

/// Rows the panel wants: heading, location, blank, sprite row, condition.
pub const CURRENT_CONDITIONS_HEIGHT: u16 = 3 + SPRITE_HEIGHT + 1;

const ICON_WIDTH: u16 = 15;

/// Current conditions panel: typed city, location, icon, temperature
pub struct CurrentConditions;

pub struct CurrentConditionsProps<'a> {
    pub report: &'a ForecastReport,
}

impl Component<Action> for CurrentConditions {
    type Props<'a> = CurrentConditionsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let report = props.report;
        let chunks = Layout::vertical([
            Constraint::Length(1),             // City as typed
            Constraint::Length(1),             // City, region, country
            Constraint::Length(1),             // Spacer
            Constraint::Length(SPRITE_HEIGHT), // Icon + temperature
            Constraint::Length(1),             // Condition
        ])
        .split(area);

        let heading = Line::from(vec![Span::styled(
            report.city.clone(),
            Style::default().fg(Color::White).bold(),
        )])
        .centered();
        frame.render_widget(Paragraph::new(heading), chunks[0]);

        let location = Line::from(vec![Span::styled(
            report.weather.location_line(),
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(location), chunks[1]);

        let body = Layout::horizontal([Constraint::Length(ICON_WIDTH), Constraint::Fill(1)])
            .split(chunks[3]);

        let icon = WeatherIcon::classify(&report.weather.condition);
        match icons::icon_sprite(icon, body[0].height) {
            Some(art) => {
                frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), body[0]);
            }
            None => {
                frame.render_widget(Paragraph::new(Line::from(icon.emoji()).centered()), body[0]);
            }
        }

        let temp_text = format_celsius(report.weather.temperature);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_gradient(report.weather.temperature));
        frame.render_widget(ArtBox::new(&renderer, &temp_text), body[1]);

        let condition = Line::from(vec![Span::styled(
            report.weather.condition.clone(),
            Style::default().fg(Color::Gray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(condition), chunks[4]);
    }
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80), // Hot red
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
