use crate::core::hero::backing_size;
use crate::core::{ContainerGeometry, Subscription};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{} has an unexpected element type", id))
}

pub fn query_all(root: &web::Element, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = root.query_selector_all(selector).map_err(js_err)?;
    Ok(collect_elements(&list))
}

pub fn query_all_in(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    Ok(collect_elements(&list))
}

fn collect_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Register `handler` for `event` on `target`. The returned subscription
/// removes the listener and frees the closure when cancelled or dropped.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> anyhow::Result<Subscription>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    let target = target.clone();
    Ok(Subscription::new(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    }))
}

pub fn add_click_listener(
    element: &web::Element,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<Subscription> {
    listen(element, "click", move |_: web::Event| handler())
}

pub fn geometry_of(element: &web::Element) -> ContainerGeometry {
    let rect = element.get_bounding_client_rect();
    ContainerGeometry {
        width: rect.width() as f32,
        height: rect.height() as f32,
        left: rect.left() as f32,
        top: rect.top() as f32,
    }
}

pub fn viewport_size() -> (f32, f32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    match web::window() {
        Some(w) => (read(w.inner_width()), read(w.inner_height())),
        None => (0.0, 0.0),
    }
}

/// Match the canvas backing store to its CSS box, returning the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = backing_size(rect.width(), rect.height(), dpr);
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
    (w, h)
}

#[inline]
pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    _ = element.style().set_property(property, value);
}

#[inline]
pub fn clear_style(element: &web::HtmlElement, property: &str) {
    _ = element.style().remove_property(property);
}

#[inline]
pub fn set_class(element: &web::Element, class: &str, on: bool) {
    let cl = element.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}
