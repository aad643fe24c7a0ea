use crate::core::Subscription;
use crate::dom;
use web_sys as web;

pub fn on_resize(mut handler: impl FnMut() + 'static) -> anyhow::Result<Subscription> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    dom::listen(&window, "resize", move |_: web::Event| handler())
}
