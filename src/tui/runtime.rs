//! TUI application state wrapped around one estimator.

use tracing::debug;

use crate::estimator::Estimator;
use crate::estimator::tariff::Tariff;
use crate::estimator::types::DEFAULT_HOURS;

/// Units added or removed per arrow key press.
pub const UNITS_STEP: f64 = 10.0;

/// Units added or removed per shifted arrow key press.
pub const UNITS_STEP_LARGE: f64 = 100.0;

/// Field of the add-appliance form that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Consumption,
    Hours,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Consumption,
            Self::Consumption => Self::Hours,
            Self::Hours => Self::Name,
        }
    }
}

/// Whether keys drive the widget or type into the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing(FormField),
}

/// TUI application state.
pub struct App {
    /// The estimator driven by key presses.
    pub estimator: Estimator,
    pub mode: InputMode,
    /// Raw text of the consumption field; parsed on every edit.
    pub consumption_input: String,
    /// Raw text of the hours field; parsed on every edit.
    pub hours_input: String,
    /// Highlighted row of the appliance table.
    pub selected: usize,
    pub show_advanced: bool,
    pub show_history: bool,
    pub show_tips: bool,
    pub show_chart: bool,
    /// One-line feedback for the footer.
    pub status: Option<String>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app around an already seeded estimator.
    pub fn new(estimator: Estimator) -> Self {
        Self {
            estimator,
            mode: InputMode::Normal,
            consumption_input: String::new(),
            hours_input: format_hours(DEFAULT_HOURS),
            selected: 0,
            show_advanced: false,
            show_history: false,
            show_tips: false,
            show_chart: false,
            status: None,
            quit: false,
        }
    }

    pub fn adjust_units(&mut self, delta: f64) {
        self.estimator.set_units(self.estimator.units() + delta);
    }

    pub fn cycle_plan(&mut self) {
        self.estimator
            .select_plan(Tariff::cycle(self.estimator.selected_plan()));
    }

    pub fn add_panel(&mut self) {
        self.estimator
            .set_solar_panels(self.estimator.solar_panels().saturating_add(1));
    }

    pub fn remove_panel(&mut self) {
        self.estimator
            .set_solar_panels(self.estimator.solar_panels().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.estimator.appliances().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Deletes the highlighted appliance and keeps the highlight in range.
    pub fn delete_selected(&mut self) {
        if let Some(removed) = self.estimator.remove_appliance(self.selected) {
            self.status = Some(format!("Removed {}", removed.name));
        }
        let len = self.estimator.appliances().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn save_to_history(&mut self) {
        let cost = self.estimator.save_to_history().cost;
        self.status = Some(format!("Saved {}", crate::format::rupees(cost)));
    }

    /// Opens the form on its first field; also reveals the appliance panel.
    pub fn start_editing(&mut self) {
        self.show_advanced = true;
        self.mode = InputMode::Editing(FormField::Name);
    }

    pub fn stop_editing(&mut self) {
        self.mode = InputMode::Normal;
    }

    pub fn next_field(&mut self) {
        if let InputMode::Editing(field) = self.mode {
            self.mode = InputMode::Editing(field.next());
        }
    }

    /// Appends a typed character to the focused field.
    pub fn type_char(&mut self, c: char) {
        let InputMode::Editing(field) = self.mode else {
            return;
        };
        match field {
            FormField::Name => self.estimator.form_mut().name.push(c),
            FormField::Consumption => {
                self.consumption_input.push(c);
                self.sync_consumption();
            }
            FormField::Hours => {
                self.hours_input.push(c);
                self.sync_hours();
            }
        }
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        let InputMode::Editing(field) = self.mode else {
            return;
        };
        match field {
            FormField::Name => {
                self.estimator.form_mut().name.pop();
            }
            FormField::Consumption => {
                self.consumption_input.pop();
                self.sync_consumption();
            }
            FormField::Hours => {
                self.hours_input.pop();
                self.sync_hours();
            }
        }
    }

    /// Submits the form; on success clears the text buffers and leaves edit mode.
    pub fn submit_form(&mut self) {
        if parse_hours(&self.hours_input).is_none() {
            self.status = Some(format!(
                "Hours must be a number, got \"{}\"",
                self.hours_input
            ));
            return;
        }
        let name = self.estimator.form().name.clone();
        if self.estimator.submit_form() {
            self.consumption_input.clear();
            self.hours_input = format_hours(DEFAULT_HOURS);
            self.mode = InputMode::Normal;
            self.selected = self.estimator.appliances().len() - 1;
            self.status = Some(format!("Added {name}"));
        } else {
            self.status = Some("Name and consumption are required".to_string());
        }
    }

    fn sync_consumption(&mut self) {
        let parsed = self.consumption_input.trim().parse::<f64>().ok();
        debug!(input = %self.consumption_input, ?parsed, "consumption edited");
        self.estimator.form_mut().set_consumption(parsed);
    }

    /// Unparseable text leaves the form at the default; submission is
    /// refused until the field parses again.
    fn sync_hours(&mut self) {
        let hours = parse_hours(&self.hours_input).unwrap_or(DEFAULT_HOURS);
        self.estimator.form_mut().set_hours(hours);
    }

    pub fn toggle_advanced(&mut self) {
        self.show_advanced = !self.show_advanced;
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    pub fn toggle_tips(&mut self) {
        self.show_tips = !self.show_tips;
    }

    pub fn toggle_chart(&mut self) {
        self.show_chart = !self.show_chart;
    }
}

/// Empty text means the default; anything else must parse as a number.
fn parse_hours(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        Some(DEFAULT_HOURS)
    } else {
        input.parse().ok()
    }
}

fn format_hours(hours: f64) -> String {
    format!("{hours}")
}
