/// Bookkeeping for a self-rescheduling frame callback.
///
/// The loop records every requested frame handle with `arm`. `unmount` flips
/// the gate closed and hands back the pending handle so the caller can cancel
/// it; any callback the platform still delivers afterwards is refused by
/// `begin_frame`.
#[derive(Debug)]
pub struct AnimationGate {
    mounted: bool,
    pending: Option<i32>,
    frames_run: u64,
}

impl Default for AnimationGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationGate {
    pub fn new() -> Self {
        Self {
            mounted: true,
            pending: None,
            frames_run: 0,
        }
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    #[inline]
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Record a freshly requested frame. Returns false when the gate is
    /// already closed; the caller must cancel `handle` itself.
    pub fn arm(&mut self, handle: i32) -> bool {
        if !self.mounted {
            return false;
        }
        self.pending = Some(handle);
        true
    }

    /// Called at the top of the frame callback.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if self.mounted {
            self.frames_run += 1;
        }
        self.mounted
    }

    pub fn unmount(&mut self) -> Option<i32> {
        self.mounted = false;
        self.pending.take()
    }
}

/// Unsubscribe handle returned by every listener registration.
///
/// The detach action runs exactly once, on `cancel` or when dropped.
#[must_use = "dropping a Subscription detaches the listener immediately"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
