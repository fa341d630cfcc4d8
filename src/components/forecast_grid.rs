use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::forecast::{DayTemp, format_celsius, format_degrees};
use crate::icons::{self, SPRITE_HEIGHT, WeatherIcon};

/// Narrowest a day card gets before wrapping to another row
pub const CARD_MIN_WIDTH: u16 = 20;

/// Borders + date + icon + average + range
pub const CARD_HEIGHT: u16 = 2 + 1 + SPRITE_HEIGHT + 1 + 1;

/// Daily entries carry no condition, so every day shows this icon.
pub const DAY_ICON: WeatherIcon = WeatherIcon::PartlyCloudy;

/// Multi-day forecast laid out as rows of day cards, in response order
pub struct ForecastGrid;

pub struct ForecastGridProps<'a> {
    pub days: &'a [DayTemp],
}

/// Cards that fit side by side in `width`
pub fn cards_per_row(width: u16) -> usize {
    usize::from((width / CARD_MIN_WIDTH).max(1))
}

impl Component<Action> for ForecastGrid {
    type Props<'a> = ForecastGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.days.is_empty() {
            let msg = Line::from(vec![Span::styled(
                "No forecast days returned",
                Style::default().fg(Color::DarkGray),
            )])
            .centered();
            frame.render_widget(Paragraph::new(msg), area);
            return;
        }

        let per_row = cards_per_row(area.width);
        let rows: Vec<&[DayTemp]> = props.days.chunks(per_row).collect();
        let row_areas = Layout::vertical(rows.iter().map(|_| Constraint::Length(CARD_HEIGHT)))
            .split(area);

        for (row, row_area) in rows.iter().zip(row_areas.iter()) {
            let card_areas =
                Layout::horizontal((0..per_row).map(|_| Constraint::Ratio(1, per_row as u32)))
                    .split(*row_area);
            for (day, card_area) in row.iter().zip(card_areas.iter()) {
                render_day(frame, *card_area, day);
            }
        }
    }
}

fn render_day(frame: &mut Frame, area: Rect, day: &DayTemp) {
    let block = Block::bordered().border_style(Style::default().fg(Color::Rgb(70, 70, 85)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1),             // Date
        Constraint::Length(SPRITE_HEIGHT), // Icon
        Constraint::Length(1),             // Average
        Constraint::Length(1),             // Min / max
    ])
    .split(inner);

    let date = Line::from(vec![Span::styled(
        day.display_date(),
        Style::default().fg(Color::Cyan).bold(),
    )])
    .centered();
    frame.render_widget(Paragraph::new(date), chunks[0]);

    match icons::icon_sprite(DAY_ICON, chunks[1].height) {
        Some(art) => {
            frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), chunks[1]);
        }
        None => {
            frame.render_widget(Paragraph::new(Line::from(DAY_ICON.emoji()).centered()), chunks[1]);
        }
    }

    let avg = Line::from(vec![Span::styled(
        format_celsius(day.avg_temp),
        Style::default().fg(Color::White).bold(),
    )])
    .centered();
    frame.render_widget(Paragraph::new(avg), chunks[2]);

    let range = Line::from(vec![
        Span::styled(
            format_degrees(day.min_temp),
            Style::default().fg(Color::Rgb(100, 180, 255)),
        ),
        Span::raw(" "),
        Span::styled(
            format_degrees(day.max_temp),
            Style::default().fg(Color::Rgb(255, 150, 80)),
        ),
    ])
    .centered();
    frame.render_widget(Paragraph::new(range), chunks[3]);
}
