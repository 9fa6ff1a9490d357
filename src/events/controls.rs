use crate::app::App;
use crate::constants::*;
use crate::dom;
use oracle_core::ThemeId;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_ask_controls(document: &web::Document, app: &Rc<App>) {
    let app_ask = app.clone();
    dom::add_click_listener(document, ASK_BUTTON_ID, move || app_ask.ask());

    let app_focus = app.clone();
    dom::add_listener(document, QUESTION_INPUT_ID, "focus", move || {
        app_focus.on_question_focus()
    });

    let app_reset = app.clone();
    dom::add_click_listener(document, RESULT_RESET_ID, move || app_reset.reset_result());
}

pub fn wire_settings(document: &web::Document, app: &Rc<App>) {
    let app_url = app.clone();
    let doc = document.clone();
    dom::add_listener(document, BASE_URL_INPUT_ID, "change", move || {
        if let Some(el) = dom::input(&doc, BASE_URL_INPUT_ID) {
            let url = el.value().trim().to_string();
            app_url.update_settings(|s| s.base_url = url);
        }
    });

    let app_motion = app.clone();
    let doc = document.clone();
    dom::add_listener(document, REDUCE_MOTION_ID, "change", move || {
        if let Some(el) = dom::input(&doc, REDUCE_MOTION_ID) {
            let on = el.checked();
            app_motion.update_settings(|s| s.reduce_motion = on);
        }
    });

    let app_sound = app.clone();
    let doc = document.clone();
    dom::add_listener(document, SOUND_ID, "change", move || {
        if let Some(el) = dom::input(&doc, SOUND_ID) {
            let on = el.checked();
            app_sound.update_settings(|s| s.sound_enabled = on);
        }
    });

    let app_theme = app.clone();
    let doc = document.clone();
    dom::add_listener(document, THEME_SELECT_ID, "change", move || {
        let Some(el) = dom::select(&doc, THEME_SELECT_ID) else {
            return;
        };
        match el.value().parse::<ThemeId>() {
            Ok(id) => app_theme.update_settings(|s| s.theme = id),
            Err(e) => log::warn!("[settings] {}", e),
        }
    });
}

/// Clicking a history entry spins its stored answer again.
pub fn wire_history(document: &web::Document, app: &Rc<App>) {
    let Some(list) = document.get_element_by_id(HISTORY_LIST_ID) else {
        return;
    };
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let index = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("li[data-index]").ok().flatten())
            .and_then(|li| li.get_attribute("data-index"))
            .and_then(|s| s.parse::<usize>().ok());
        if let Some(index) = index {
            app.replay(index);
        }
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
