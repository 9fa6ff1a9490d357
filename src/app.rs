use crate::audio::WebAudio;
use crate::constants::*;
use crate::{api, dom, overlay, wheel};
use instant::Instant;
use oracle_core::{
    theme, EngineParams, History, HistoryItem, KeyValueStore, OracleResponse, Probability,
    Settings, SpinOutcomeEngine, SpinRequest, WheelFace,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type WebEngine = SpinOutcomeEngine<WebAudio, StdRng>;

pub struct AppState {
    pub settings: Settings,
    pub history: History,
    store: Box<dyn KeyValueStore>,
    /// A question is in flight or the wheel is turning.
    pub busy: bool,
    question: String,
    pending: Option<OracleResponse>,
}

impl AppState {
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let settings = Settings::load(store.as_ref()).unwrap_or_else(|e| {
            log::warn!("[settings] ignoring stored settings: {}", e);
            Settings::default()
        });
        let history = History::load(store.as_ref()).unwrap_or_else(|e| {
            log::warn!("[history] ignoring stored history: {}", e);
            History::default()
        });
        Self {
            settings,
            history,
            store,
            busy: false,
            question: String::new(),
            pending: None,
        }
    }

    fn save_settings(&mut self) {
        if let Err(e) = self.settings.save(self.store.as_mut()) {
            log::error!("[settings] save failed: {}", e);
        }
    }

    fn save_history(&mut self) {
        if let Err(e) = self.history.save(self.store.as_mut()) {
            log::error!("[history] save failed: {}", e);
        }
    }
}

pub struct App {
    pub document: web::Document,
    pub engine: RefCell<WebEngine>,
    pub state: RefCell<AppState>,
    epoch: Instant,
}

impl App {
    pub fn new(document: web::Document, store: Box<dyn KeyValueStore>) -> Self {
        let state = AppState::load(store);
        let feedback = WebAudio::new(
            state.settings.sound_enabled,
            document.get_element_by_id(POINTER_ID),
        );
        let params = EngineParams {
            theme: state.settings.theme,
            ..EngineParams::default()
        };
        let engine = SpinOutcomeEngine::new(params, feedback, StdRng::from_entropy());
        Self {
            document,
            engine: RefCell::new(engine),
            state: RefCell::new(state),
            epoch: Instant::now(),
        }
    }

    /// Monotonic time since the app started; the engine's clock.
    pub fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    /// Push current settings and history into the DOM.
    pub fn sync_view(&self) {
        let state = self.state.borrow();
        let s = &state.settings;
        if let Some(el) = dom::input(&self.document, BASE_URL_INPUT_ID) {
            el.set_value(&s.base_url);
        }
        if let Some(el) = dom::input(&self.document, REDUCE_MOTION_ID) {
            el.set_checked(s.reduce_motion);
        }
        if let Some(el) = dom::input(&self.document, SOUND_ID) {
            el.set_checked(s.sound_enabled);
        }
        if let Some(el) = dom::select(&self.document, THEME_SELECT_ID) {
            el.set_value(s.theme.as_str());
        }
        wheel::apply_theme(&self.document, s.theme, state.busy);
        wheel::render_face(&self.document, &WheelFace::new(Probability::HALF));
        wheel::set_rotation(&self.document, self.engine.borrow().rotation());
        overlay::render_history(&self.document, &state.history);
    }

    fn is_locked(&self) -> bool {
        self.state.borrow().busy || self.engine.borrow().is_spinning()
    }

    fn set_busy(&self, busy: bool) {
        self.state.borrow_mut().busy = busy;
        dom::set_disabled(&self.document, ASK_BUTTON_ID, busy);
        dom::set_disabled(&self.document, QUESTION_INPUT_ID, busy);
    }

    pub fn on_question_focus(&self) {
        if !self.is_locked() {
            self.engine.borrow_mut().feedback_mut().play_chime();
        }
    }

    pub fn ask(self: &Rc<Self>) {
        let question = dom::input(&self.document, QUESTION_INPUT_ID)
            .map(|el| el.value())
            .unwrap_or_default();
        if question.trim().is_empty() || self.is_locked() {
            return;
        }
        self.set_busy(true);
        overlay::hide_result(&self.document);
        let msg = LOADING_MESSAGES[rand::random::<usize>() % LOADING_MESSAGES.len()];
        dom::set_text(&self.document, STATUS_ID, msg);
        self.engine.borrow_mut().feedback_mut().play_whoosh();

        let base_url = self.state.borrow().settings.base_url.clone();
        let app = self.clone();
        spawn_local(async move {
            match api::ask_oracle(&base_url, &question).await {
                Ok(answer) => app.begin_spin(question, answer),
                Err(e) => app.fail(&e.to_string()),
            }
        });
    }

    /// Spin a past answer again. Ignored while another spin is underway.
    pub fn replay(self: &Rc<Self>, index: usize) {
        if self.is_locked() {
            return;
        }
        let Some(item) = self.state.borrow().history.items().get(index).cloned() else {
            return;
        };
        log::info!("[history] replaying #{}: {}", index, item.question);
        self.set_busy(true);
        overlay::hide_result(&self.document);
        self.begin_spin(item.question, item.result);
    }

    fn fail(&self, message: &str) {
        log::error!("[oracle] {}", message);
        self.set_busy(false);
        let hint = theme(self.state.borrow().settings.theme).idle_hint;
        dom::set_text(&self.document, STATUS_ID, hint);
        overlay::show_toast(&self.document, &format!("Oracle Silent: {}", message));
    }

    fn begin_spin(self: &Rc<Self>, question: String, answer: OracleResponse) {
        let request = match SpinRequest::from_response(&answer) {
            Ok(r) => r,
            Err(e) => return self.fail(&e.to_string()),
        };
        wheel::render_face(&self.document, &WheelFace::new(request.probability));
        dom::set_text(&self.document, STATUS_ID, "");
        let reduce_motion = {
            let mut state = self.state.borrow_mut();
            state.question = question;
            state.pending = Some(answer);
            state.settings.reduce_motion
        };

        let app = self.clone();
        let started = self.engine.borrow_mut().start_spin(
            request.probability.p_yes(),
            request.outcome,
            reduce_motion,
            self.now(),
            move || app.finish_spin(),
        );
        if let Err(e) = started {
            self.state.borrow_mut().pending = None;
            self.fail(&e.to_string());
        }
    }

    // Runs from inside the engine's completion, so it must not touch the engine.
    fn finish_spin(&self) {
        let (question, answer) = {
            let mut state = self.state.borrow_mut();
            let Some(answer) = state.pending.take() else {
                return;
            };
            let question = state.question.clone();
            state.history.push(HistoryItem {
                question: question.clone(),
                result: answer.clone(),
                timestamp: dom::now_ms(),
            });
            state.save_history();
            (question, answer)
        };
        self.set_busy(false);
        overlay::show_result(&self.document, &question, &answer);
        overlay::render_history(&self.document, &self.state.borrow().history);
    }

    pub fn reset_result(&self) {
        overlay::hide_result(&self.document);
        let hint = theme(self.state.borrow().settings.theme).idle_hint;
        dom::set_text(&self.document, STATUS_ID, hint);
    }

    /// Apply a settings edit, persist it and push it to the engine.
    pub fn update_settings(&self, edit: impl FnOnce(&mut Settings)) {
        let (settings, busy) = {
            let mut state = self.state.borrow_mut();
            edit(&mut state.settings);
            state.save_settings();
            (state.settings.clone(), state.busy)
        };
        {
            let mut engine = self.engine.borrow_mut();
            engine.set_theme(settings.theme);
            engine.feedback_mut().enabled = settings.sound_enabled;
        }
        wheel::apply_theme(&self.document, settings.theme, busy);
        log::info!(
            "[settings] theme={} sound={} reduce_motion={}",
            settings.theme,
            settings.sound_enabled,
            settings.reduce_motion
        );
    }
}
