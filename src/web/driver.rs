//! Runs one [`Activity`] in the page: forwards calls, drains effects, and
//! keeps a `setInterval` ticker alive only while the activity asks for ticks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use super::feedback::{self, Hooks};
use crate::activity::Activity;
use crate::settings::Settings;

pub struct Driver<A: Activity + 'static> {
    activity: Rc<RefCell<A>>,
    hooks: Rc<Hooks>,
    interval: Rc<Cell<Option<i32>>>,
    tick_ms: i32,
    callback: Closure<dyn FnMut()>,
}

fn stop_interval(interval: &Cell<Option<i32>>) {
    if let Some(id) = interval.take() {
        if let Some(w) = window() {
            w.clear_interval_with_handle(id);
        }
    }
}

impl<A: Activity + 'static> Driver<A> {
    pub fn new(activity: A, settings: &Settings) -> Self {
        let activity = Rc::new(RefCell::new(activity));
        let hooks = Rc::new(Hooks::default());
        let interval = Rc::new(Cell::new(None));
        let dt = settings.tick_secs();
        let callback = {
            let (activity, hooks, interval) = (activity.clone(), hooks.clone(), interval.clone());
            Closure::wrap(Box::new(move || {
                // a page callback re-entering the handle already holds the activity
                let Ok(mut running) = activity.try_borrow_mut() else {
                    return;
                };
                running.tick(dt);
                let effects = running.take_effects();
                let idle = !running.needs_ticks();
                drop(running);
                feedback::dispatch(effects, &hooks);
                hooks.notify_change();
                if idle {
                    // clearing only the timer; the closure stays owned by the driver
                    stop_interval(&interval);
                }
            }) as Box<dyn FnMut()>)
        };
        Self {
            activity,
            hooks,
            interval,
            tick_ms: i32::try_from(settings.tick_ms).unwrap_or(i32::MAX),
            callback,
        }
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Applies `f`, plays the effects it produced and notifies the page.
    pub fn with<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
        let (result, effects) = {
            let mut running = self.activity.borrow_mut();
            let result = f(&mut running);
            (result, running.take_effects())
        };
        feedback::dispatch(effects, &self.hooks);
        self.hooks.notify_change();
        self.sync_ticker();
        result
    }

    pub fn read<R>(&self, f: impl FnOnce(&A) -> R) -> R {
        f(&self.activity.borrow())
    }

    fn sync_ticker(&self) {
        let wanted = self.activity.borrow().needs_ticks();
        match (wanted, self.interval.get()) {
            (true, None) => self.start_interval(),
            (false, Some(_)) => stop_interval(&self.interval),
            _ => {}
        }
    }

    fn start_interval(&self) {
        let Some(w) = window() else {
            log::warn!("no window; ticker not started");
            return;
        };
        match w.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            self.tick_ms,
        ) {
            Ok(id) => self.interval.set(Some(id)),
            Err(e) => log::error!("setInterval failed: {e:?}"),
        }
    }
}

impl<A: Activity + 'static> Drop for Driver<A> {
    fn drop(&mut self) {
        stop_interval(&self.interval);
    }
}
