use crate::constants::*;
use crate::dom;
use oracle_core::{
    pin_positions, render_rotation, theme, Outcome, Theme, ThemeId, WheelFace, PIN_RADIUS,
};
use web_sys as web;

/// Create the 24 rim pins once; they do not depend on the probability.
pub fn build_pins(document: &web::Document) -> anyhow::Result<()> {
    let group = document
        .get_element_by_id(PINS_GROUP_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", PINS_GROUP_ID))?;
    group.set_text_content(None);
    for pos in pin_positions(PIN_RADIUS) {
        let pin = document
            .create_element_ns(Some(SVG_NS), "circle")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = pin.set_attribute("cx", &pos.x.to_string());
        _ = pin.set_attribute("cy", &pos.y.to_string());
        _ = pin.set_attribute("r", &PIN_DOT_RADIUS.to_string());
        _ = pin.set_attribute("class", "pin");
        _ = group.append_child(&pin);
    }
    Ok(())
}

/// Redraw sectors, divider and labels for a probability.
pub fn render_face(document: &web::Document, face: &WheelFace) {
    dom::set_attr(document, YES_SECTOR_ID, "d", &face.yes_sector_path());

    let end = face.boundary_point();
    dom::set_attr(document, BOUNDARY_LINE_ID, "x2", &end.x.to_string());
    dom::set_attr(document, BOUNDARY_LINE_ID, "y2", &end.y.to_string());
    dom::set_hidden(document, BOUNDARY_LINE_ID, !face.shows_boundary_line());

    dom::set_hidden(document, YES_LABEL_ID, true);
    dom::set_hidden(document, NO_LABEL_ID, true);
    for label in face.label_positions() {
        let id = match label.outcome {
            Outcome::Yes => YES_LABEL_ID,
            Outcome::No => NO_LABEL_ID,
        };
        dom::set_attr(document, id, "x", &label.position.x.to_string());
        dom::set_attr(document, id, "y", &label.position.y.to_string());
        dom::set_hidden(document, id, false);
    }
}

pub fn apply_theme(document: &web::Document, id: ThemeId, busy: bool) {
    let t: &Theme = theme(id);
    dom::set_attr(document, YES_SECTOR_ID, "fill", t.sector_color(Outcome::Yes));
    dom::set_attr(document, NO_SECTOR_ID, "fill", t.sector_color(Outcome::No));
    dom::set_attr(document, POINTER_ID, "fill", t.pointer_color);
    if let Some(body) = document.body() {
        _ = body.set_attribute("data-theme", id.as_str());
        _ = body.set_attribute("data-ambient", t.ambient.as_str());
    }
    if let Some(hint) = t.status_hint(busy) {
        dom::set_text(document, STATUS_ID, hint);
    }
}

/// Paint the wheel at a cumulative engine rotation.
#[inline]
pub fn set_rotation(document: &web::Document, rotation: f64) {
    let degrees = render_rotation(rotation);
    dom::set_attr(
        document,
        WHEEL_ID,
        "style",
        &format!("transform: rotate({degrees:.3}deg)"),
    );
}
