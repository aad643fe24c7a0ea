use crate::core::AnimationGate;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = RefCell<Option<Closure<dyn FnMut(f64)>>>;

/// A `requestAnimationFrame` loop that can be torn down.
///
/// The scheduled callback only holds a weak reference to itself, so dropping
/// the loop frees the closure and breaks the reschedule chain. `stop` also
/// cancels the frame already queued with the browser.
pub struct FrameLoop {
    gate: Rc<RefCell<AnimationGate>>,
    tick: Rc<TickSlot>,
    label: &'static str,
}

impl FrameLoop {
    pub fn start(label: &'static str, mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let gate = Rc::new(RefCell::new(AnimationGate::new()));
        let tick: Rc<TickSlot> = Rc::new(RefCell::new(None));

        let gate_tick = gate.clone();
        let weak_tick: Weak<TickSlot> = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if !gate_tick.borrow_mut().begin_frame() {
                return;
            }
            on_frame(timestamp_ms);
            if let Some(slot) = weak_tick.upgrade() {
                schedule(&gate_tick, &slot);
            }
        }) as Box<dyn FnMut(f64)>));

        schedule(&gate, &tick);
        log::debug!("[{}] frame loop started", label);
        Self { gate, tick, label }
    }

    pub fn is_running(&self) -> bool {
        self.gate.borrow().is_mounted()
    }

    pub fn frames_run(&self) -> u64 {
        self.gate.borrow().frames_run()
    }

    pub fn stop(&self) {
        let pending = {
            let mut gate = self.gate.borrow_mut();
            if !gate.is_mounted() {
                return;
            }
            gate.unmount()
        };
        if let (Some(handle), Some(w)) = (pending, web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        log::debug!(
            "[{}] frame loop stopped after {} frames",
            self.label,
            self.frames_run()
        );
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Frees the closure; must not happen from inside the callback itself.
        if let Ok(mut slot) = self.tick.try_borrow_mut() {
            slot.take();
        }
    }
}

fn schedule(gate: &Rc<RefCell<AnimationGate>>, slot: &TickSlot) {
    let Some(window) = web::window() else {
        return;
    };
    let handle = {
        let cb = slot.borrow();
        let Some(cb) = cb.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(h) => h,
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                return;
            }
        }
    };
    if !gate.borrow_mut().arm(handle) {
        _ = window.cancel_animation_frame(handle);
    }
}
