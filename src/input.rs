use crate::core::PointerState;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Pointer position shared between one event listener (writer) and one frame
/// callback (reader). Both run on the main thread.
pub type SharedPointer = Rc<Cell<PointerState>>;

const OFFSCREEN: f32 = -1.0e6;

/// Starts far off-screen so nothing is attracted before the first move.
pub fn new_shared_pointer() -> SharedPointer {
    Rc::new(Cell::new(PointerState {
        x: OFFSCREEN,
        y: OFFSCREEN,
    }))
}

#[inline]
pub fn pointer_from_event(ev: &web::MouseEvent) -> PointerState {
    PointerState {
        x: ev.client_x() as f32,
        y: ev.client_y() as f32,
    }
}
