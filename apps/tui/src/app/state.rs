use crate::app::input::helpers::filter_indices;
use lightsched_tui::cascade::{CascadeController, Completion, Control, Level, SelectionForm};
use lightsched_tui::router::{Router, View, NAV_LINKS};
use lightsched_tui::store::{StageSnapshot, StatusStore};
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc;

const THROBBER_STEP: Duration = Duration::from_millis(120);

/// The `/` filter over the focused dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub editing: bool,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        self.editing || !self.query.is_empty()
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub router: Router,
    pub form: SelectionForm,
    pub focus: Level,
    pub cursors: [usize; 3],
    pub filter: FilterState,
    pub goto_input: Option<String>,
    pub status_message: String,
    pub throbber: ThrobberState,
    pub last_frame: Instant,
    pub store: StatusStore,
    controller: CascadeController,
    completions: mpsc::UnboundedReceiver<Completion>,
}

impl App {
    pub fn new(
        controller: CascadeController,
        completions: mpsc::UnboundedReceiver<Completion>,
        store: StatusStore,
        date_format: &str,
    ) -> Self {
        Self {
            running: true,
            router: Router::new(),
            form: SelectionForm::new(date_format),
            focus: Level::Province,
            cursors: [0; 3],
            filter: FilterState::default(),
            goto_input: None,
            status_message: String::new(),
            throbber: ThrobberState::default(),
            last_frame: Instant::now(),
            store,
            controller,
            completions,
        }
    }

    /// Dispatches Init and lands on `route`.
    pub fn bootstrap(&mut self, route: &str) {
        self.init();
        self.navigate(route);
    }

    /// Clears the whole form and asks for provinces again.
    pub fn init(&mut self) {
        self.focus = Level::Province;
        self.cursors = [0; 3];
        self.filter = FilterState::default();
        let request = self.form.init();
        self.controller.dispatch(request);
        self.status_message = "Loading provinces...".to_string();
    }

    pub fn current_view(&self) -> &View {
        self.router.current()
    }

    pub fn navigate(&mut self, path: &str) {
        let view = self.router.navigate_to(path).clone();
        self.status_message = match view {
            View::NotFound { path } => format!("No page at {path}"),
            _ => String::new(),
        };
    }

    /// Follows header link `index` (0-based).
    pub fn follow_link(&mut self, index: usize) {
        if let Some(link) = NAV_LINKS.get(index) {
            let view = self.router.follow(link.href).clone();
            tracing::debug!(label = link.label, %view, "followed link");
            self.status_message.clear();
        }
    }

    pub fn stage(&self) -> Option<StageSnapshot> {
        self.store.current()
    }

    pub fn stage_label(&self) -> String {
        self.stage().map_or_else(
            || "Stage unknown".to_string(),
            |snapshot| format!("Stage {}", snapshot.status.stage),
        )
    }

    /// Option indices of `level` currently shown, in option order.
    pub fn visible_options(&self, level: Level) -> Vec<usize> {
        let options = self.form.dropdown(level).options();
        if level == self.focus && !self.filter.query.is_empty() {
            filter_indices(options, &self.filter.query)
        } else {
            (0..options.len()).collect()
        }
    }

    pub fn cursor(&self, level: Level) -> usize {
        let visible = self.visible_options(level).len();
        self.cursors[level_slot(level)].min(visible.saturating_sub(1))
    }

    pub fn set_cursor(&mut self, level: Level, index: usize) {
        self.cursors[level_slot(level)] = index;
    }

    pub fn focus_on(&mut self, level: Level) {
        if self.focus != level {
            self.filter = FilterState::default();
            self.focus = level;
        }
    }

    /// Chooses the highlighted option of the focused dropdown.
    pub fn choose_highlighted(&mut self) {
        let level = self.focus;
        let visible = self.visible_options(level);
        let Some(&index) = visible.get(self.cursor(level)) else {
            return;
        };

        let Some(request) = self.form.choose(level, index) else {
            return;
        };

        self.filter = FilterState::default();
        self.set_cursor(level, index);
        for lower in Level::ALL.into_iter().filter(|l| level_slot(*l) > level_slot(level)) {
            self.set_cursor(lower, 0);
        }

        self.status_message = format!("Loading {}...", request.control());
        self.controller.dispatch(request);

        if level != Level::Place {
            self.focus = level.next();
        }
    }

    /// Applies every finished chain. Returns how many were applied.
    ///
    /// Failed steps leave their control empty; the form logs them and nothing
    /// reaches the status line.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions.try_recv() {
            let control = completion.request.control();
            self.form.complete(completion);

            self.status_message.clear();
            if let Some(level) = control_level(control) {
                self.set_cursor(level, 0);
            }
            applied += 1;
        }
        applied
    }

    pub fn is_loading(&self) -> bool {
        [
            Control::Provinces,
            Control::Municipalities,
            Control::Places,
            Control::Schedule,
        ]
        .into_iter()
        .any(|control| self.form.is_loading(control))
    }

    /// Advances the loading animation.
    pub fn update(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_frame) >= THROBBER_STEP {
            self.throbber.calc_next();
            self.last_frame = now;
        }
    }
}

const fn level_slot(level: Level) -> usize {
    match level {
        Level::Province => 0,
        Level::Municipality => 1,
        Level::Place => 2,
    }
}

const fn control_level(control: Control) -> Option<Level> {
    match control {
        Control::Provinces => Some(Level::Province),
        Control::Municipalities => Some(Level::Municipality),
        Control::Places => Some(Level::Place),
        Control::Schedule => None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use lightsched_tui::cascade::{CascadeClient, Outcome, Request};
    use lightsched_tui::error::TransportError;
    use lightsched_tui::http::{HttpReply, Transport};
    use lightsched_tui::store::{status_store, StatusWriter};
    use lightsched_tui::Locator;
    use std::sync::Arc;
    use url::Url;

    /// Every request fails as if the services were down.
    struct Offline;

    #[async_trait]
    impl Transport for Offline {
        async fn get(&self, url: &Url) -> Result<HttpReply, TransportError> {
            Err(TransportError::new(url.as_str(), "offline"))
        }
    }

    pub(crate) fn offline_app() -> App {
        offline_app_with_stage().0
    }

    /// Like [`offline_app`], plus the writer feeding its stage display.
    pub(crate) fn offline_app_with_stage() -> (App, StatusWriter) {
        let discovery = Url::parse("http://discovery.test/url").expect("discovery url");
        let client = CascadeClient::new(Locator::new(Arc::new(Offline), discovery));
        let (controller, completions) = CascadeController::new(client);
        let (writer, store) = status_store();
        (
            App::new(controller, completions, store, "%Y-%m-%d"),
            writer,
        )
    }

    /// Applies a listing as if its chain had just finished.
    pub(crate) fn populate(app: &mut App, request: Request, names: &[&str]) {
        app.form.complete(Completion {
            request,
            result: Ok(Outcome::Listing(
                names.iter().map(ToString::to_string).collect(),
            )),
        });
    }

    #[tokio::test]
    async fn choosing_moves_focus_down_the_cascade() {
        let mut app = offline_app();
        app.bootstrap("/");
        populate(&mut app, Request::Provinces, &["Gauteng", "Western Cape"]);

        app.set_cursor(Level::Province, 2);
        app.choose_highlighted();

        assert_eq!(app.form.state().province.as_deref(), Some("Western Cape"));
        assert_eq!(app.focus, Level::Municipality);
        assert_eq!(app.status_message, "Loading municipalities...");
    }

    #[tokio::test]
    async fn the_prompt_row_cannot_be_chosen() {
        let mut app = offline_app();
        app.bootstrap("/");
        populate(&mut app, Request::Provinces, &["Gauteng"]);

        app.set_cursor(Level::Province, 0);
        app.choose_highlighted();

        assert_eq!(app.form.state().province, None);
        assert_eq!(app.focus, Level::Province);
    }

    #[tokio::test]
    async fn a_filter_narrows_only_the_focused_dropdown() {
        let mut app = offline_app();
        app.bootstrap("/");
        populate(&mut app, Request::Provinces, &["Gauteng", "Western Cape", "Eastern Cape"]);

        app.filter.query = "cape".to_string();
        assert_eq!(app.visible_options(Level::Province), vec![2, 3]);

        app.set_cursor(Level::Province, 1);
        app.choose_highlighted();
        assert_eq!(app.form.state().province.as_deref(), Some("Eastern Cape"));
        assert!(!app.filter.is_active());
    }

    #[tokio::test]
    async fn failed_chains_leave_the_control_empty_and_say_nothing(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut app = offline_app();
        app.bootstrap("/");
        assert_eq!(app.status_message, "Loading provinces...");

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.drain_completions() == 0 {
            if Instant::now() > deadline {
                return Err("province chain never finished".into());
            }
            tokio::task::yield_now().await;
        }

        assert!(app.status_message.is_empty());
        assert!(app.form.dropdown(Level::Province).is_empty());
        assert!(!app.form.dropdown(Level::Province).is_bound());
        assert!(!app.is_loading());
        Ok(())
    }

    #[tokio::test]
    async fn stage_label_falls_back_until_a_poll_lands() {
        let app = offline_app();
        assert_eq!(app.stage_label(), "Stage unknown");
    }
}
