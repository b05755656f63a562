//! Light state shared between execution contexts
//!
//! Built on `critical-section`, so it works the same from tasks and
//! interrupts.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::driver::ChannelDriver;
use crate::intent::LightIntent;
use crate::snapshot::LightSnapshot;
use crate::state::LightState;

/// A [`LightState`] behind a critical-section mutex
///
/// All access goes through [`lock`](Self::lock), so mutations from
/// different contexts never interleave.
pub struct SharedLight<D> {
    inner: Mutex<RefCell<LightState<D>>>,
}

impl<D: ChannelDriver> SharedLight<D> {
    pub const fn new(light: LightState<D>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(light)),
        }
    }

    /// Run `f` with exclusive access to the light
    ///
    /// Must not be called again from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut LightState<D>) -> R) -> R {
        critical_section::with(|cs| {
            let mut light = self.inner.borrow(cs).borrow_mut();
            f(&mut light)
        })
    }

    /// Apply an intent under the lock
    pub fn apply(&self, intent: &LightIntent) {
        self.lock(|light| light.apply(intent));
    }

    pub fn state(&self) -> bool {
        self.lock(|light| light.state())
    }

    pub fn snapshot(&self) -> LightSnapshot {
        self.lock(|light| light.snapshot())
    }

    pub fn into_inner(self) -> LightState<D> {
        self.inner.into_inner().into_inner()
    }
}
