// Host-side tests for frame-loop teardown and listener unsubscription.
// A fake requestAnimationFrame and listener registry stand in for the browser.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Queues frame handles like requestAnimationFrame; cancelled handles are dropped.
#[derive(Default)]
struct FakeRaf {
    next: i32,
    queued: Vec<i32>,
    cancelled: Vec<i32>,
}

impl FakeRaf {
    fn request(&mut self) -> i32 {
        self.next += 1;
        self.queued.push(self.next);
        self.next
    }

    fn cancel(&mut self, handle: i32) {
        self.queued.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

/// Mirrors the browser loop: each delivered frame runs the body and asks for the next.
struct Probe {
    gate: AnimationGate,
    calls: u32,
}

impl Probe {
    fn new(raf: &mut FakeRaf) -> Self {
        let mut p = Self {
            gate: AnimationGate::new(),
            calls: 0,
        };
        p.schedule(raf);
        p
    }

    fn schedule(&mut self, raf: &mut FakeRaf) {
        let h = raf.request();
        if !self.gate.arm(h) {
            raf.cancel(h);
        }
    }

    fn unmount(&mut self, raf: &mut FakeRaf) {
        if let Some(h) = self.gate.unmount() {
            raf.cancel(h);
        }
    }
}

/// Deliver every queued frame once, the way one browser tick would.
fn tick(raf: &mut FakeRaf, probe: &mut Probe) {
    let due: Vec<i32> = std::mem::take(&mut raf.queued);
    for _ in due {
        if probe.gate.begin_frame() {
            probe.calls += 1;
            probe.schedule(raf);
        }
    }
}

#[test]
fn loop_runs_once_per_tick_while_mounted() {
    let mut raf = FakeRaf::default();
    let mut probe = Probe::new(&mut raf);
    for _ in 0..3 {
        tick(&mut raf, &mut probe);
    }
    assert_eq!(probe.calls, 3);
    assert_eq!(probe.gate.frames_run(), 3);
    assert_eq!(raf.queued.len(), 1);
    assert_eq!(probe.gate.pending(), Some(raf.queued[0]));
}

#[test]
fn unmount_cancels_pending_frame() {
    let mut raf = FakeRaf::default();
    let mut probe = Probe::new(&mut raf);
    tick(&mut raf, &mut probe);
    let pending = probe.gate.pending().unwrap();

    probe.unmount(&mut raf);
    assert_eq!(raf.cancelled, vec![pending]);
    assert!(raf.queued.is_empty());

    for _ in 0..5 {
        tick(&mut raf, &mut probe);
    }
    assert_eq!(probe.calls, 1);
    assert!(!probe.gate.is_mounted());
}

#[test]
fn stale_frame_after_unmount_is_refused() {
    let mut raf = FakeRaf::default();
    let mut probe = Probe::new(&mut raf);
    tick(&mut raf, &mut probe);

    // Close the gate without cancelling: the browser still delivers the frame.
    probe.gate.unmount();
    tick(&mut raf, &mut probe);
    assert_eq!(probe.calls, 1);
    assert!(raf.queued.is_empty(), "no new frame requested after unmount");
}

#[test]
fn arming_a_closed_gate_is_rejected() {
    let mut gate = AnimationGate::new();
    assert!(gate.arm(7));
    assert_eq!(gate.unmount(), Some(7));
    assert!(!gate.arm(8));
    assert_eq!(gate.pending(), None);
    assert_eq!(gate.unmount(), None);
}

/// Listener registry counting live registrations.
#[derive(Default)]
struct Registry {
    live: RefCell<Vec<&'static str>>,
}

fn register(registry: &Rc<Registry>, event: &'static str) -> Subscription {
    registry.live.borrow_mut().push(event);
    let registry = registry.clone();
    Subscription::new(move || {
        let mut live = registry.live.borrow_mut();
        if let Some(i) = live.iter().position(|e| *e == event) {
            live.remove(i);
        }
    })
}

#[test]
fn dropping_a_subscription_detaches_the_listener() {
    let registry = Rc::new(Registry::default());
    let sub = register(&registry, "pointermove");
    assert!(sub.is_active());
    assert_eq!(registry.live.borrow().len(), 1);
    drop(sub);
    assert!(registry.live.borrow().is_empty());
}

#[test]
fn detach_runs_exactly_once() {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let mut sub = Subscription::new(move || c.set(c.get() + 1));
    sub.cancel();
    assert!(!sub.is_active());
    sub.cancel();
    drop(sub);
    assert_eq!(count.get(), 1);
}

/// A component shaped like the orbital nav: one frame loop plus listeners.
struct Component {
    probe: Probe,
    _pointer: Subscription,
    _resize: Subscription,
}

#[test]
fn component_teardown_leaves_no_callbacks_or_listeners() {
    let registry = Rc::new(Registry::default());
    let mut raf = FakeRaf::default();
    let mut component = Component {
        probe: Probe::new(&mut raf),
        _pointer: register(&registry, "pointermove"),
        _resize: register(&registry, "resize"),
    };
    tick(&mut raf, &mut component.probe);
    tick(&mut raf, &mut component.probe);
    assert_eq!(component.probe.calls, 2);
    assert_eq!(registry.live.borrow().len(), 2);

    component.probe.unmount(&mut raf);
    let calls = component.probe.calls;
    drop(component);

    assert!(registry.live.borrow().is_empty());
    assert!(raf.queued.is_empty());
    assert_eq!(calls, 2);
}
