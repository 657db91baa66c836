//! Application state and core logic

use crate::booking::{BookingField, BookingFormData, BookingStore, BookingSubmitter, JsonFileStore};
use crate::calendar::{AvailabilityGenerator, CalendarState};
use crate::config::DeskConfig;
use crate::form::{
    validate_fields, FieldValue, FormEngine, FormValues, PendingSubmit, SubmitOutcome,
    SubmitRejected, SubmitStatus, ValidateFn,
};
use crate::state::{AppState, ConfirmedBooking, Focus, View};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;

/// A finished submit task, handed back to the UI loop
pub struct SubmitSettlement {
    pub pending: PendingSubmit<BookingFormData>,
    pub result: Result<SubmitOutcome>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub calendar: CalendarState,
    pub form: FormEngine<BookingFormData>,
    settlements_tx: UnboundedSender<SubmitSettlement>,
    settlements_rx: UnboundedReceiver<SubmitSettlement>,
    /// Day the availability horizon was last generated for
    today: NaiveDate,
    /// Shares the current day with the submit handler
    today_tx: watch::Sender<NaiveDate>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the JSON file store
    pub async fn new(config: &DeskConfig) -> Result<Self> {
        let path = config.store_path();
        let store = JsonFileStore::open(&path)
            .await
            .with_context(|| format!("failed to open booking store at {}", path.display()))?;
        Ok(Self::with_store(
            config,
            Arc::new(store),
            Local::now().date_naive(),
        ))
    }

    pub fn with_store(config: &DeskConfig, store: Arc<dyn BookingStore>, today: NaiveDate) -> Self {
        let generator = AvailabilityGenerator::new(config.working_days());
        let calendar = CalendarState::new(generator, config.days_ahead(), today);

        let (today_tx, today_rx) = watch::channel(today);
        let validate: ValidateFn<BookingFormData> = Arc::new(validate_fields::<BookingFormData>);
        let form = FormEngine::new(
            BookingFormData::default(),
            validate,
            Arc::new(BookingSubmitter::new(store, today_rx)),
            config.form_config(),
        );

        let (settlements_tx, settlements_rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        if let Some(error) = &calendar.error {
            state.push_error(error.clone());
        }

        Self {
            state,
            calendar,
            form,
            settlements_tx,
            settlements_rx,
            today,
            today_tx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Per-frame housekeeping: expire the success banner and roll the
    /// availability horizon over at midnight
    pub fn tick(&mut self, now: Instant, today: NaiveDate) {
        self.form.tick(now);
        if today != self.today {
            tracing::info!(%today, "day changed, regenerating availability");
            self.today = today;
            self.today_tx.send_replace(today);
            self.refresh_calendar();
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.quit = true;
                    return Ok(());
                }
                KeyCode::Char('s') if self.state.current_view == View::Booking => {
                    self.start_submit();
                    return Ok(());
                }
                _ => {}
            }
        }

        match self.state.current_view {
            View::Booking => match self.state.focus {
                Focus::Calendar => self.handle_calendar_key(key),
                Focus::Slots => self.handle_slots_key(key),
                Focus::Form => self.handle_form_key(key),
            },
            View::Confirmation => self.handle_confirmation_key(key),
        }

        Ok(())
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.calendar.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.calendar.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.calendar.move_cursor(-7),
            KeyCode::Down | KeyCode::Char('j') => self.calendar.move_cursor(7),
            KeyCode::Char('[') => self.calendar.prev_month(),
            KeyCode::Char(']') => self.calendar.next_month(),
            KeyCode::Char('r') => {
                self.refresh_calendar();
                self.state.status_message = Some("Availability refreshed".to_string());
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.pick_date(self.calendar.cursor),
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(),
            _ => {}
        }
    }

    fn handle_slots_key(&mut self, key: KeyEvent) {
        let slot_count = self.calendar.slots_for_selected().len();
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.move_slot_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_slot_down(slot_count),
            KeyCode::Enter | KeyCode::Char(' ') => self.pick_slot(),
            KeyCode::Esc => self.state.focus = Focus::Calendar,
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(field) = self.state.active_form_field() else {
            return;
        };
        match key.code {
            KeyCode::Tab => {
                self.form.handle_field_blur(field);
                if self.state.active_field + 1 == AppState::editable_fields().len() {
                    self.state.active_field = 0;
                    self.state.focus = Focus::Calendar;
                } else {
                    self.state.next_field();
                }
            }
            KeyCode::BackTab => {
                self.form.handle_field_blur(field);
                if self.state.active_field == 0 {
                    self.state.focus = Focus::Slots;
                } else {
                    self.state.prev_field();
                }
            }
            KeyCode::Esc => {
                self.form.handle_field_blur(field);
                self.state.focus = Focus::Calendar;
            }
            KeyCode::Enter if field == BookingField::Message => self.edit_field(field, |text| {
                text.push('\n');
            }),
            KeyCode::Enter | KeyCode::Down => {
                self.form.handle_field_blur(field);
                self.state.next_field();
            }
            KeyCode::Up => {
                self.form.handle_field_blur(field);
                self.state.prev_field();
            }
            KeyCode::Backspace => self.edit_field(field, |text| {
                text.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_field(field, |text| text.push(c))
            }
            _ => {}
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('y') => self.copy_booking_reference(),
            KeyCode::Char('n') | KeyCode::Enter | KeyCode::Esc => self.start_new_booking(),
            _ => {}
        }
    }

    fn edit_field(&mut self, field: BookingField, edit: impl FnOnce(&mut String)) {
        let mut text = self.form.values().value(field).as_text().to_string();
        edit(&mut text);
        self.form.handle_field_change(field, text);
    }

    /// Select a date in the calendar and mirror it into the form
    fn pick_date(&mut self, date: NaiveDate) {
        if !self.calendar.select_date(date) {
            self.state.status_message = Some("No time slots on that day".to_string());
            return;
        }
        self.form.set_field_value(BookingField::Date, date.to_string());
        self.form.set_field_error(BookingField::Date, None);
        if self.calendar.selected_time.is_none() {
            self.form.set_field_value(BookingField::Time, FieldValue::Unset);
        }
        self.state.slot_index = self
            .calendar
            .slots_for_selected()
            .iter()
            .position(|slot| slot.available)
            .unwrap_or(0);
        self.state.focus = Focus::Slots;
    }

    /// Select the highlighted slot and mirror it into the form
    fn pick_slot(&mut self) {
        let Some(slot) = self
            .calendar
            .slots_for_selected()
            .get(self.state.slot_index)
            .cloned()
        else {
            self.state.status_message = Some("Pick a date first".to_string());
            return;
        };
        if !self.calendar.select_time(&slot.time) {
            self.state.status_message = Some(format!("{} is not available", slot.formatted_time));
            return;
        }
        self.form.set_field_value(BookingField::Time, slot.time);
        self.form.set_field_error(BookingField::Time, None);
        self.state.focus = Focus::Form;
    }

    /// Regenerate availability and drop a selection that is no longer offered
    fn refresh_calendar(&mut self) {
        self.calendar.refresh(self.today);
        if let Some(error) = self.calendar.error.clone() {
            self.push_error(error);
        }
        if self.calendar.selected_date.is_none() && self.form.values().date.is_some() {
            self.form.set_field_value(BookingField::Date, FieldValue::Unset);
            self.form.set_field_value(BookingField::Time, FieldValue::Unset);
        }
    }

    /// Validate the form and hand the values to the submit handler on a task
    pub fn start_submit(&mut self) {
        let pending = match self.form.begin_submit() {
            Ok(pending) => pending,
            Err(SubmitRejected::InFlight) => {
                self.state.status_message = Some("Booking is already being submitted".to_string());
                return;
            }
            Err(SubmitRejected::Invalid(errors)) => {
                if let Some(field) = errors.keys().next().copied() {
                    self.focus_error(field);
                }
                self.state.status_message =
                    Some(format!("Please fix {} field(s) before booking", errors.len()));
                return;
            }
        };

        let handler = self.form.handler();
        let tx = self.settlements_tx.clone();
        tokio::spawn(async move {
            let result = handler.submit(&pending.values).await;
            if tx.send(SubmitSettlement { pending, result }).is_err() {
                tracing::debug!("app closed before the submission settled");
            }
        });
        self.state.status_message = Some("Submitting booking...".to_string());
    }

    fn focus_error(&mut self, field: BookingField) {
        match field {
            BookingField::Date => self.state.focus = Focus::Calendar,
            BookingField::Time => self.state.focus = Focus::Slots,
            other => {
                self.state.focus_field(other);
            }
        }
    }

    /// Apply every settlement that has arrived since the last frame
    pub fn poll_submissions(&mut self) {
        while let Ok(settlement) = self.settlements_rx.try_recv() {
            self.apply_settlement(settlement);
        }
    }

    fn apply_settlement(&mut self, settlement: SubmitSettlement) {
        let SubmitSettlement { pending, result } = settlement;
        let values = pending.values.clone();
        match self.form.complete_submit(pending, result, Instant::now()) {
            SubmitStatus::Submitted(outcome) => {
                self.state.confirmation = ConfirmedBooking::from_values(&values, outcome.reference);
                self.state.current_view = View::Confirmation;
            }
            SubmitStatus::Failed(message) => {
                self.state.status_message = Some(message);
            }
            SubmitStatus::Faulted(message) => self.push_error(message),
            SubmitStatus::Rejected(_) | SubmitStatus::Stale => {}
        }
    }

    /// Clear the form and calendar for another booking
    pub fn start_new_booking(&mut self) {
        self.form.reset();
        self.calendar.clear_selection();
        self.state.start_new_booking();
    }

    fn copy_booking_reference(&mut self) {
        let Some(reference) = self
            .state
            .confirmation
            .as_ref()
            .and_then(|c| c.reference.clone())
        else {
            self.state.status_message = Some("No booking reference to copy".to_string());
            return;
        };
        match self.copy_to_clipboard(&reference) {
            Ok(()) => self.state.status_message = Some("Copied booking reference".to_string()),
            Err(err) => self.push_error(format!("Failed to copy to clipboard: {err}")),
        }
    }

    /// Copy text to system clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingStatus, MemoryStore, MockBookingStore, StoreError};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Sunday; the first bookable day is Monday the 19th
    fn today() -> NaiveDate {
        date(2026, 10, 18)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(store: Arc<dyn BookingStore>) -> App {
        App::with_store(&DeskConfig::default(), store, today())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Pick Monday 09:00 and fill every required field
    fn fill_booking(app: &mut App) {
        press(app, KeyCode::Enter);
        press(app, KeyCode::Enter);
        for value in ["Ada", "Lovelace", "ada@example.com", "Engines Ltd", "Analyst"] {
            type_text(app, value);
            press(app, KeyCode::Tab);
        }
    }

    async fn settle(app: &mut App) {
        let settlement = app.settlements_rx.recv().await.unwrap();
        app.apply_settlement(settlement);
    }

    #[test]
    fn test_new_app_starts_on_calendar() {
        let app = app_with(Arc::new(MemoryStore::new()));
        assert_eq!(app.state.current_view, View::Booking);
        assert_eq!(app.state.focus, Focus::Calendar);
        assert_eq!(app.calendar.cursor, date(2026, 10, 19));
        assert!(!app.should_quit());
        assert!(!app.state.has_errors());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        app.handle_key(ctrl('c')).unwrap();
        assert!(app.should_quit());

        let mut app = app_with(Arc::new(MemoryStore::new()));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_is_typed_in_form() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        app.state.focus = Focus::Form;
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        assert_eq!(app.form.values().first_name, "q");
    }

    #[test]
    fn test_picking_date_and_slot_fills_form() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.calendar.selected_date, Some(date(2026, 10, 20)));
        assert_eq!(app.form.values().date, Some(date(2026, 10, 20)));
        assert_eq!(app.state.focus, Focus::Slots);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.calendar.selected_time.as_deref(), Some("09:30"));
        assert_eq!(app.form.values().time.as_deref(), Some("09:30"));
        assert_eq!(app.state.focus, Focus::Form);
    }

    #[test]
    fn test_picking_weekend_is_refused() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        // Monday 19th + 5 days = Saturday 24th
        for _ in 0..5 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.calendar.selected_date, None);
        assert_eq!(app.form.values().date, None);
        assert_eq!(app.state.focus, Focus::Calendar);
        assert!(app.state.status_message.is_some());
    }

    #[test]
    fn test_changing_date_clears_time_in_form() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        app.state.focus = Focus::Calendar;
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.values().date, Some(date(2026, 10, 20)));
        assert_eq!(app.form.values().time, None);
    }

    #[test]
    fn test_slot_pick_without_date() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.focus, Focus::Slots);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.status_message.as_deref(), Some("Pick a date first"));
    }

    #[test]
    fn test_tab_blurs_and_reveals_error() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        app.state.focus = Focus::Form;
        type_text(&mut app, "J");
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            app.form.field_error(BookingField::FirstName),
            Some("First name must be at least 2 characters")
        );
        // Untouched fields keep their errors hidden
        assert_eq!(app.form.field_error(BookingField::LastName), None);
        assert_eq!(app.state.active_form_field(), Some(BookingField::LastName));
    }

    #[test]
    fn test_backspace_and_message_newline() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        app.state.focus_field(BookingField::Message);
        type_text(&mut app, "Hi!");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Bye");
        assert_eq!(app.form.values().message, "Hi\nBye");
    }

    #[test]
    fn test_invalid_submit_focuses_first_error() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        app.handle_key(ctrl('s')).unwrap();
        assert!(!app.form.state().is_submitting);
        assert_eq!(app.state.focus, Focus::Form);
        assert_eq!(app.state.active_form_field(), Some(BookingField::FirstName));
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("Please fix 7 field(s) before booking")
        );
    }

    #[test]
    fn test_missing_slot_focuses_calendar() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        app.state.focus = Focus::Form;
        for value in ["Ada", "Lovelace", "ada@example.com", "Engines Ltd", "Analyst"] {
            type_text(&mut app, value);
            press(&mut app, KeyCode::Tab);
        }
        app.handle_key(ctrl('s')).unwrap();
        assert_eq!(app.state.focus, Focus::Calendar);
        assert_eq!(app.form.field_error(BookingField::Date), Some("Please select a date"));
    }

    #[tokio::test]
    async fn test_successful_submit_shows_confirmation() {
        let store = Arc::new(MemoryStore::new());
        let mut app = app_with(store.clone());
        fill_booking(&mut app);

        app.handle_key(ctrl('s')).unwrap();
        assert!(app.form.state().is_submitting);

        // A second submit while the first is in flight is refused
        app.handle_key(ctrl('s')).unwrap();
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("Booking is already being submitted")
        );

        settle(&mut app).await;

        assert_eq!(app.state.current_view, View::Confirmation);
        assert!(app.form.state().is_submitted);
        let confirmed = app.state.confirmation.clone().unwrap();
        assert_eq!(confirmed.name, "Ada Lovelace");
        assert_eq!(confirmed.date, date(2026, 10, 19));
        assert_eq!(confirmed.time, "09:00");

        let records = store.list(None).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(Some(records[0].id.clone()), confirmed.reference);
        assert_eq!(records[0].status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn test_store_failure_is_reported_and_form_kept() {
        let mut store = MockBookingStore::new();
        store
            .expect_is_time_slot_available()
            .returning(|_, _| Ok(true));
        store
            .expect_create()
            .returning(|_| Err(StoreError::Duplicate("x".to_string())));
        let mut app = app_with(Arc::new(store));
        fill_booking(&mut app);

        app.start_submit();
        settle(&mut app).await;

        assert_eq!(app.state.current_view, View::Booking);
        assert!(!app.form.state().is_submitted);
        assert_eq!(
            app.form.state().submit_error.as_deref(),
            Some("booking x already exists")
        );
        assert_eq!(app.form.values().first_name, "Ada");
    }

    #[tokio::test]
    async fn test_new_booking_after_confirmation() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        fill_booking(&mut app);
        app.start_submit();
        settle(&mut app).await;

        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.state.current_view, View::Booking);
        assert_eq!(app.state.confirmation, None);
        assert_eq!(app.form.values(), &BookingFormData::default());
        assert_eq!(app.calendar.selected_date, None);
    }

    #[tokio::test]
    async fn test_settlement_after_reset_is_ignored() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        fill_booking(&mut app);
        app.start_submit();
        app.start_new_booking();

        settle(&mut app).await;

        assert_eq!(app.state.current_view, View::Booking);
        assert!(!app.form.state().is_submitted);
        assert!(!app.form.state().is_submitting);
    }

    #[test]
    fn test_error_dialog_is_modal() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        app.push_error("boom");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        assert!(app.state.has_errors());
        press(&mut app, KeyCode::Esc);
        assert!(!app.state.has_errors());
    }

    #[test]
    fn test_copy_without_reference() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        app.state.current_view = View::Confirmation;
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("No booking reference to copy")
        );
    }

    #[test]
    fn test_day_rollover_drops_past_selection() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.values().date, Some(date(2026, 10, 19)));

        app.tick(Instant::now(), date(2026, 10, 19));

        assert_eq!(app.calendar.selected_date, None);
        assert_eq!(app.form.values().date, None);
        assert_eq!(app.calendar.cursor, date(2026, 10, 20));
    }

    #[test]
    fn test_day_rollover_reaches_submitter() {
        let store = Arc::new(MemoryStore::new());
        let mut app = app_with(store.clone());
        let values = BookingFormData {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: "Engines".to_string(),
            job_title: "Analyst".to_string(),
            date: Some(date(2026, 10, 19)),
            time: Some("09:00".to_string()),
            ..Default::default()
        };

        app.tick(Instant::now(), date(2026, 10, 20));
        let outcome = tokio_test::block_on(app.form.handler().submit(&values)).unwrap();

        assert_eq!(outcome.message, crate::booking::PAST_DATE);
        assert!(tokio_test::block_on(store.list(None)).unwrap().is_empty());
    }

    #[test]
    fn test_calendar_failure_opens_error_dialog() {
        let mut app = app_with(Arc::new(MemoryStore::new()));
        app.tick(Instant::now(), NaiveDate::MAX);
        assert_eq!(
            app.state.current_error(),
            Some(crate::calendar::LOAD_ERROR)
        );
    }

    #[test]
    fn test_submitter_writes_through_store() {
        let store = Arc::new(MemoryStore::new());
        let app = app_with(store.clone());
        let values = BookingFormData {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: "Engines".to_string(),
            job_title: "Analyst".to_string(),
            date: Some(date(2026, 10, 19)),
            time: Some("14:00".to_string()),
            ..Default::default()
        };

        let outcome = tokio_test::block_on(app.form.handler().submit(&values)).unwrap();

        assert!(outcome.success);
        let stored = tokio_test::block_on(store.list_for_date(date(2026, 10, 19))).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].time, "14:00");
    }
}
