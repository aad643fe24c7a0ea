use crate::constants::{NAV_COMPACT_CLASS, NAV_ID, NAV_ITEM_SELECTOR};
use crate::core::config::SETTING_ATTRIBUTES;
use crate::core::{compact_badge, compute_frame, LayoutMode, NavSettings, PointerState, Subscription};
use crate::dom;
use crate::events;
use crate::frame::FrameLoop;
use crate::input::{self, SharedPointer};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Debug)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub path: String,
}

struct NavView {
    container: web::Element,
    items: Vec<NavItem>,
    elements: Vec<web::HtmlElement>,
    settings: NavSettings,
}

/// Everything that only exists while the orbit is animating.
struct OrbitSession {
    _pointer: Subscription,
    _frame_loop: FrameLoop,
}

type SessionSlot = Rc<RefCell<Option<OrbitSession>>>;

/// The orbiting navigation widget.
///
/// Dropping it cancels the frame loop and detaches the pointer and resize
/// listeners.
pub struct OrbitalNav {
    view: Rc<NavView>,
    mode: Rc<Cell<LayoutMode>>,
    session: SessionSlot,
    _resize: Subscription,
}

impl OrbitalNav {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let container: web::Element = dom::element_by_id(document, NAV_ID)?;
        let settings = NavSettings::from_lookup(|key| container.get_attribute(key))?;
        let overridden: Vec<&str> = SETTING_ATTRIBUTES
            .iter()
            .copied()
            .filter(|a| container.has_attribute(a))
            .collect();
        if !overridden.is_empty() {
            log::debug!("[nav] settings from {}: {:?}", overridden.join(", "), settings);
        }
        let (items, elements) = read_items(&container)?;
        log::info!(
            "[nav] mounted {} items: {}",
            items.len(),
            items
                .iter()
                .map(|i| format!("{}->{}", i.id, i.path))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let view = Rc::new(NavView {
            container,
            items,
            elements,
            settings,
        });
        let session: SessionSlot = Rc::new(RefCell::new(None));
        let (viewport_w, _) = dom::viewport_size();
        let initial = LayoutMode::for_viewport(viewport_w, settings.breakpoint);
        apply_mode(&view, &session, initial)?;
        let mode = Rc::new(Cell::new(initial));

        let resize = {
            let view = view.clone();
            let session = session.clone();
            let mode = mode.clone();
            events::resize::on_resize(move || {
                let (viewport_w, _) = dom::viewport_size();
                let next = LayoutMode::for_viewport(viewport_w, view.settings.breakpoint);
                if next == mode.get() {
                    return;
                }
                log::info!("[nav] layout {:?} -> {:?} at {}px", mode.get(), next, viewport_w);
                mode.set(next);
                if let Err(e) = apply_mode(&view, &session, next) {
                    log::error!("[nav] mode switch failed: {:?}", e);
                }
            })?
        };

        Ok(Self {
            view,
            mode,
            session,
            _resize: resize,
        })
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode.get()
    }

    pub fn item_count(&self) -> usize {
        self.view.items.len()
    }
}

impl Drop for OrbitalNav {
    fn drop(&mut self) {
        self.session.borrow_mut().take();
        log::info!("[nav] unmounted");
    }
}

fn read_items(container: &web::Element) -> anyhow::Result<(Vec<NavItem>, Vec<web::HtmlElement>)> {
    let mut items = Vec::new();
    let mut elements = Vec::new();
    for (i, el) in dom::query_all(container, NAV_ITEM_SELECTOR)?.into_iter().enumerate() {
        let id = el
            .get_attribute("data-nav-id")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                let id = el.id();
                if id.is_empty() {
                    format!("item-{}", i)
                } else {
                    id
                }
            });
        let label = el
            .get_attribute("data-label")
            .or_else(|| el.text_content())
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        let path = el.get_attribute("href").unwrap_or_else(|| "#".to_string());
        let html = el
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow::anyhow!("nav item {} is not an HTML element", id))?;
        items.push(NavItem { id, label, path });
        elements.push(html);
    }
    Ok((items, elements))
}

fn apply_mode(view: &Rc<NavView>, session: &SessionSlot, mode: LayoutMode) -> anyhow::Result<()> {
    // Always tear down first so a failed start never leaves two loops behind.
    session.borrow_mut().take();
    dom::set_class(&view.container, NAV_COMPACT_CLASS, mode == LayoutMode::Compact);
    if !mode.tracks_pointer() {
        for (item, el) in view.items.iter().zip(&view.elements) {
            dom::clear_style(el, "transform");
            dom::clear_style(el, "opacity");
            _ = el.set_attribute("data-badge", &compact_badge(&item.label));
        }
        return Ok(());
    }
    for el in &view.elements {
        _ = el.remove_attribute("data-badge");
        dom::set_style(el, "opacity", "0");
    }
    *session.borrow_mut() = Some(start_orbit(view.clone())?);
    Ok(())
}

fn start_orbit(view: Rc<NavView>) -> anyhow::Result<OrbitSession> {
    let pointer: SharedPointer = input::new_shared_pointer();
    let pointer_sub = events::pointer::track_pointer(pointer.clone())?;
    let started = Instant::now();
    let frame_loop = FrameLoop::start("nav", move |_| {
        render_orbit_frame(&view, started.elapsed().as_secs_f32(), pointer.get());
    });
    Ok(OrbitSession {
        _pointer: pointer_sub,
        _frame_loop: frame_loop,
    })
}

fn render_orbit_frame(view: &NavView, elapsed_sec: f32, pointer: PointerState) {
    let geometry = dom::geometry_of(&view.container);
    let orbit = &view.settings.orbit;
    let Some(poses) = compute_frame(view.elements.len(), elapsed_sec, &geometry, pointer, orbit)
    else {
        return;
    };
    let entrance = &view.settings.entrance;
    for (i, (pose, el)) in poses.iter().zip(&view.elements).enumerate() {
        let offset = pose.offset(orbit.item_half_extent);
        let scale = pose.scale * entrance.factor(i, elapsed_sec);
        dom::set_style(
            el,
            "transform",
            &format!("translate({:.2}px, {:.2}px) scale({:.4})", offset.x, offset.y, scale),
        );
        dom::set_style(el, "opacity", &format!("{:.3}", entrance.opacity(i, elapsed_sec)));
    }
}
