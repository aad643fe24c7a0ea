use crate::constants::{HERO_CANVAS_ID, HERO_ID, HERO_LOADED_CLASS, HERO_LOADED_DELAY_MS};
use crate::core::hero::pointer_uv;
use crate::core::Subscription;
use crate::dom;
use crate::events;
use crate::frame::FrameLoop;
use crate::render::HeroRenderer;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type RendererSlot = Rc<RefCell<Option<HeroRenderer>>>;

/// Full-viewport shader behind the hero heading.
pub struct Hero {
    renderer: RendererSlot,
    frame_loop: Option<FrameLoop>,
    _pointer: Subscription,
    _resize: Subscription,
    loaded_timer: Option<(i32, Closure<dyn FnMut()>)>,
}

impl Hero {
    pub async fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let section: web::Element = dom::element_by_id(document, HERO_ID)?;
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, HERO_CANVAS_ID)?;
        dom::sync_canvas_backing_size(&canvas);

        let mouse_uv = Rc::new(Cell::new([0.5_f32, 0.5]));
        let pointer = {
            let mouse_uv = mouse_uv.clone();
            events::pointer::on_pointer_move(move |x, y| {
                let (w, h) = dom::viewport_size();
                mouse_uv.set(pointer_uv(x, y, w, h));
            })?
        };
        let resize = {
            let canvas = canvas.clone();
            events::resize::on_resize(move || {
                dom::sync_canvas_backing_size(&canvas);
            })?
        };

        let renderer: RendererSlot = Rc::new(RefCell::new(None));
        let frame_loop = match HeroRenderer::new(&canvas).await {
            Ok(r) => {
                *renderer.borrow_mut() = Some(r);
                Some(start_render_loop(renderer.clone(), canvas, mouse_uv))
            }
            Err(e) => {
                log::error!("[hero] GPU init error, shader disabled: {:?}", e);
                None
            }
        };

        let loaded_timer = schedule_loaded_class(section);

        Ok(Self {
            renderer,
            frame_loop,
            _pointer: pointer,
            _resize: resize,
            loaded_timer,
        })
    }

    pub fn is_rendering(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(FrameLoop::is_running)
    }
}

impl Drop for Hero {
    fn drop(&mut self) {
        self.frame_loop.take();
        if let Some((handle, _closure)) = self.loaded_timer.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(handle);
            }
        }
        if let Some(r) = self.renderer.borrow_mut().take() {
            r.dispose();
        }
        log::info!("[hero] unmounted");
    }
}

fn start_render_loop(
    renderer: RendererSlot,
    canvas: web::HtmlCanvasElement,
    mouse_uv: Rc<Cell<[f32; 2]>>,
) -> FrameLoop {
    let started = Instant::now();
    FrameLoop::start("hero", move |_| {
        let mut slot = renderer.borrow_mut();
        let Some(r) = slot.as_mut() else {
            return;
        };
        r.resize_if_needed(canvas.width(), canvas.height());
        match r.render(started.elapsed().as_secs_f32(), mouse_uv.get()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => r.reconfigure(),
            Err(e) => log::error!("[hero] render error: {:?}", e),
        }
    })
}

fn schedule_loaded_class(section: web::Element) -> Option<(i32, Closure<dyn FnMut()>)> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(move || {
        dom::set_class(&section, HERO_LOADED_CLASS, true);
    }) as Box<dyn FnMut()>);
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        HERO_LOADED_DELAY_MS,
    ) {
        Ok(handle) => Some((handle, closure)),
        Err(e) => {
            log::warn!("[hero] setTimeout failed: {:?}", e);
            None
        }
    }
}
