//! `requestAnimationFrame` loop with an explicit cancel handle.
//!
//! ARCHITECTURE
//! ============
//! The frame callback lives in a shared slot that the callback itself also
//! references. The cycle is broken when the step returns
//! [`FrameControl::Stop`] or the loop is cancelled: the slot is emptied and
//! the closure dropped. Dropping a [`FrameHandle`] does not stop the loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::{Error, Result};

/// Returned by a frame step to keep or end the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

struct FrameSlot {
    window: Window,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameSlot {
    fn request(&self) -> Result<()> {
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return Ok(());
        };
        let id = self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|err| Error::dom("requestAnimationFrame", &err))?;
        self.pending.set(Some(id));
        Ok(())
    }

    fn finish(&self) {
        self.pending.set(None);
        self.callback.borrow_mut().take();
    }
}

/// Handle to a running frame loop.
#[derive(Clone)]
pub struct FrameHandle {
    slot: Rc<FrameSlot>,
}

impl FrameHandle {
    /// Whether the loop still has frames to run.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.slot.callback.borrow().is_some()
    }

    /// Cancel the pending frame and release the callback.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dom`] when the browser rejects the cancellation; the
    /// callback is released either way.
    pub fn cancel(&self) -> Result<()> {
        let pending = self.slot.pending.take();
        self.slot.finish();
        match pending {
            Some(id) => self
                .slot
                .window
                .cancel_animation_frame(id)
                .map_err(|err| Error::dom("cancelAnimationFrame", &err)),
            None => Ok(()),
        }
    }
}

/// Call `step` once per display frame with the frame timestamp until it
/// returns [`FrameControl::Stop`] or the handle is cancelled.
///
/// # Errors
///
/// Returns [`Error::Dom`] when the first frame cannot be requested.
pub fn run<F>(window: &Window, mut step: F) -> Result<FrameHandle>
where
    F: FnMut(f64) -> FrameControl + 'static,
{
    let slot = Rc::new(FrameSlot { window: window.clone(), pending: Cell::new(None), callback: RefCell::new(None) });

    let slot_for_cb = Rc::clone(&slot);
    let cb = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        slot_for_cb.pending.set(None);
        match step(timestamp) {
            FrameControl::Continue => {
                if let Err(err) = slot_for_cb.request() {
                    log::warn!("frame loop stopped: {err}");
                    slot_for_cb.finish();
                }
            }
            FrameControl::Stop => slot_for_cb.finish(),
        }
    });
    *slot.callback.borrow_mut() = Some(cb);

    if let Err(err) = slot.request() {
        slot.finish();
        return Err(err);
    }
    Ok(FrameHandle { slot })
}
