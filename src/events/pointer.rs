use crate::dom;
use crate::input::{self, SharedPointer};
use crate::core::Subscription;
use web_sys as web;

/// Keep `pointer` updated with the latest viewport-space pointer position.
pub fn track_pointer(pointer: SharedPointer) -> anyhow::Result<Subscription> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        pointer.set(input::pointer_from_event(&ev));
    })
}

/// Call `handler` with the viewport-space position on every pointer move.
pub fn on_pointer_move(
    mut handler: impl FnMut(f32, f32) + 'static,
) -> anyhow::Result<Subscription> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        handler(ev.client_x() as f32, ev.client_y() as f32);
    })
}
