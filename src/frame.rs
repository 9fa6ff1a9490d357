use crate::app::App;
use oracle_core::SpinStatus;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<App>,
    pub last_rotation: f64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.app.now();
        let status = self.app.engine.borrow_mut().advance(now);
        match status {
            SpinStatus::Idle => {}
            SpinStatus::Spinning { rotation, .. } => self.paint(rotation),
            SpinStatus::Completed { rotation, outcome } => {
                self.paint(rotation);
                log::info!("[frame] settled on {} at {:.1}°", outcome, rotation);
            }
        }
    }

    fn paint(&mut self, rotation: f64) {
        if rotation != self.last_rotation {
            crate::wheel::set_rotation(&self.app.document, rotation);
            self.last_rotation = rotation;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
