use crate::app::App;
use crate::constants::QUESTION_INPUT_ID;
use crate::dom;
use std::rc::Rc;
use web_sys as web;

/// Enter submits the question; Shift+Enter is left alone.
pub fn wire_question_keydown(document: &web::Document, app: &Rc<App>) {
    let app = app.clone();
    dom::add_keydown_listener(document, QUESTION_INPUT_ID, move |ev: web::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() && !ev.is_composing() {
            ev.prevent_default();
            app.ask();
        }
    });
}
