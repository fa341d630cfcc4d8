use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::state::InputField;

const DAYS_WIDTH: u16 = 10;
const BUTTON_WIDTH: u16 = 15;
const CITY_PLACEHOLDER: &str = "City name";
const DAYS_PLACEHOLDER: &str = "Days";

/// City and days inputs plus the submit control
pub struct SearchForm {
    city: TextInput,
    days: TextInput,
}

pub struct SearchFormProps<'a> {
    pub city: &'a str,
    pub days: &'a str,
    pub focus: InputField,
    pub submit_label: &'a str,
    pub submit_enabled: bool,
    pub is_focused: bool,
    // Action constructors
    pub on_city_change: fn(String) -> Action,
    pub on_days_change: fn(String) -> Action,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            city: TextInput::new(),
            days: TextInput::new(),
        }
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }
}

fn input_style(focused: bool) -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::all(1),
            bg: Some(input_bg(focused)),
            fg: None,
        },
        placeholder_style: None,
        cursor_style: None,
    }
}

fn input_bg(focused: bool) -> Color {
    if focused {
        Color::Rgb(50, 50, 60)
    } else {
        Color::Rgb(35, 35, 45)
    }
}

impl Component<Action> for SearchForm {
    type Props<'a> = SearchFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        // Handle special keys first
        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            KeyCode::Enter => {
                if props.submit_enabled {
                    return vec![Action::ForecastSubmit];
                }
                return Vec::new();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                return vec![Action::FormFocusNext];
            }
            _ => {}
        }

        // All other keys go to the focused input
        match props.focus {
            InputField::City => {
                let input_props = TextInputProps {
                    value: props.city,
                    placeholder: CITY_PLACEHOLDER,
                    is_focused: true,
                    style: input_style(true),
                    on_change: props.on_city_change,
                    on_submit: |_| Action::ForecastSubmit,
                    on_cursor_move: Some(|_| Action::Render),
                };
                self.city
                    .handle_event(event, input_props)
                    .into_iter()
                    .collect()
            }
            InputField::Days => {
                let input_props = TextInputProps {
                    value: props.days,
                    placeholder: DAYS_PLACEHOLDER,
                    is_focused: true,
                    style: input_style(true),
                    on_change: props.on_days_change,
                    on_submit: |_| Action::ForecastSubmit,
                    on_cursor_move: Some(|_| Action::Render),
                };
                self.days
                    .handle_event(event, input_props)
                    .into_iter()
                    .collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let rows = Layout::vertical([
            Constraint::Length(1), // Labels
            Constraint::Length(3), // Inputs + button
        ])
        .split(area);

        let columns = |row: Rect| {
            Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(DAYS_WIDTH),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .spacing(1)
            .split(row)
        };
        let label_cols = columns(rows[0]);
        let input_cols = columns(rows[1]);

        let label_style = Style::default().fg(Color::DarkGray);
        frame.render_widget(
            Paragraph::new(Line::styled("City", label_style)),
            label_cols[0],
        );
        frame.render_widget(
            Paragraph::new(Line::styled("Days", label_style)),
            label_cols[1],
        );

        let city_focused = props.is_focused && props.focus == InputField::City;
        let days_focused = props.is_focused && props.focus == InputField::Days;

        let SearchForm { city, days } = self;
        city.render(
            frame,
            input_cols[0],
            TextInputProps {
                value: props.city,
                placeholder: CITY_PLACEHOLDER,
                is_focused: city_focused,
                style: input_style(city_focused),
                on_change: props.on_city_change,
                on_submit: |_| Action::ForecastSubmit,
                on_cursor_move: Some(|_| Action::Render),
            },
        );
        days.render(
            frame,
            input_cols[1],
            TextInputProps {
                value: props.days,
                placeholder: DAYS_PLACEHOLDER,
                is_focused: days_focused,
                style: input_style(days_focused),
                on_change: props.on_days_change,
                on_submit: |_| Action::ForecastSubmit,
                on_cursor_move: Some(|_| Action::Render),
            },
        );

        let button_style = if props.submit_enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };
        let button = Paragraph::new(vec![
            Line::default(),
            Line::from(props.submit_label).centered(),
        ])
        .style(button_style);
        frame.render_widget(button, input_cols[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tui_dispatch::testing::*;

    fn props<'a>(focus: InputField, submit_enabled: bool) -> SearchFormProps<'a> {
        SearchFormProps {
            city: "Oslo",
            days: "3",
            focus,
            submit_label: "Get Weather",
            submit_enabled,
            is_focused: true,
            on_city_change: Action::FormCityChange,
            on_days_change: Action::FormDaysChange,
        }
    }

    fn send(form: &mut SearchForm, key: KeyEvent, props: SearchFormProps<'_>) -> Vec<Action> {
        form.handle_event(&EventKind::Key(key), props)
            .into_iter()
            .collect()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_submits() {
        let mut form = SearchForm::new();
        let actions = send(&mut form, press(KeyCode::Enter), props(InputField::City, true));
        actions.assert_count(1);
        actions.assert_first(Action::ForecastSubmit);
    }

    #[test]
    fn test_enter_ignored_while_disabled() {
        let mut form = SearchForm::new();
        let actions = send(&mut form, press(KeyCode::Enter), props(InputField::City, false));
        actions.assert_empty();
    }

    #[test]
    fn test_tab_switches_field() {
        let mut form = SearchForm::new();
        let actions = send(&mut form, press(KeyCode::Tab), props(InputField::City, true));
        actions.assert_first(Action::FormFocusNext);
    }

    #[test]
    fn test_esc_quits() {
        let mut form = SearchForm::new();
        let actions = send(&mut form, press(KeyCode::Esc), props(InputField::Days, true));
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = SearchForm::new();
        let actions = send(&mut form, key("x"), props(InputField::Days, true));
        assert!(
            actions
                .iter()
                .any(|a| matches!(a, Action::FormDaysChange(_))),
            "typing in the days field should emit FormDaysChange: {:?}",
            actions
        );
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut form = SearchForm::new();
        let mut p = props(InputField::City, true);
        p.is_focused = false;
        let actions = send(&mut form, press(KeyCode::Enter), p);
        actions.assert_empty();
    }

    #[test]
    fn test_render_shows_labels_and_button() {
        let mut render = RenderHarness::new(60, 4);
        let mut form = SearchForm::new();

        let output = render.render_to_string_plain(|frame| {
            form.render(frame, frame.area(), props(InputField::City, true));
        });

        assert!(output.contains("City"));
        assert!(output.contains("Days"));
        assert!(output.contains("Get Weather"));
    }
}
