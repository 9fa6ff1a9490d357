use crate::constants::*;
use crate::dom;
use oracle_core::{confidence_label, format_percentage, History, OracleResponse};
use std::cell::Cell;
use web_sys as web;

thread_local! {
    // Only the newest toast may hide the element
    static TOAST_SEQ: Cell<u32> = const { Cell::new(0) };
}

pub fn show_result(document: &web::Document, question: &str, result: &OracleResponse) {
    dom::set_text(document, RESULT_ANSWER_ID, &result.answer.as_str().to_uppercase());
    dom::set_text(document, RESULT_PERCENT_ID, &format_percentage(result.p_yes));
    dom::set_text(document, RESULT_LABEL_ID, confidence_label(result.p_yes));
    dom::set_text(document, RESULT_QUESTION_ID, question);
    dom::set_hidden(document, RESULT_PANEL_ID, false);
}

#[inline]
pub fn hide_result(document: &web::Document) {
    dom::set_hidden(document, RESULT_PANEL_ID, true);
}

pub fn show_toast(document: &web::Document, message: &str) {
    dom::set_text(document, TOAST_ID, message);
    dom::set_hidden(document, TOAST_ID, false);
    let seq = TOAST_SEQ.with(|s| {
        s.set(s.get().wrapping_add(1));
        s.get()
    });
    let doc = document.clone();
    dom::set_timeout(TOAST_MS, move || {
        if TOAST_SEQ.with(|s| s.get()) == seq {
            dom::set_hidden(&doc, TOAST_ID, true);
        }
    });
}

pub fn render_history(document: &web::Document, history: &History) {
    let Some(list) = document.get_element_by_id(HISTORY_LIST_ID) else {
        return;
    };
    list.set_text_content(None);
    for (i, item) in history.items().iter().enumerate() {
        let Ok(li) = document.create_element("li") else {
            continue;
        };
        _ = li.set_attribute("data-index", &i.to_string());
        _ = li.set_attribute("class", &format!("history-item {}", item.result.answer));
        li.set_text_content(Some(&format!(
            "{} · {} {}",
            item.question,
            item.result.answer.as_str().to_uppercase(),
            format_percentage(item.result.p_yes)
        )));
        _ = list.append_child(&li);
    }
}
