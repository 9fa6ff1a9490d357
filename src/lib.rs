#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod api;
mod app;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod storage;
mod wheel;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("oracle-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    wheel::build_pins(&document)?;
    let app = Rc::new(app::App::new(document.clone(), storage::open_store()));
    app.sync_view();

    events::wire_ask_controls(&document, &app);
    events::wire_question_keydown(&document, &app);
    events::wire_settings(&document, &app);
    events::wire_history(&document, &app);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app: app.clone(),
        last_rotation: app.engine.borrow().rotation(),
    }));
    frame::start_loop(frame_ctx);
    log::info!("oracle-web ready");
    Ok(())
}
