//! Click, keyboard, wheel, resize and form-control listeners for `PageViewer`.
//!
//! Each listener converts the raw event with the pure mapping in
//! [`crate::input`] and calls back into the `internal_*` helpers in `mod.rs`.
//! The closures are owned by [`Listeners`] and live as long as the viewer.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, KeyboardEvent, MouseEvent, WheelEvent};

use super::host::HostPage;
use super::{PageViewer, SharedState};
use crate::error::{Result, ViewerError};
use crate::input::{click_direction, key_action, wheel_direction, InputAction};
use crate::navigation::Direction;
use crate::render::RenderBackend;

/// Registered event closures.
pub(crate) struct Listeners {
    _click: Closure<dyn FnMut(MouseEvent)>,
    _key: Closure<dyn FnMut(KeyboardEvent)>,
    _wheel: Closure<dyn FnMut(WheelEvent)>,
    _resize: Closure<dyn FnMut(Event)>,
    _paging: Option<Closure<dyn FnMut(Event)>>,
    _toggles: Vec<Closure<dyn FnMut(Event)>>,
}

fn listen(target: &EventTarget, event: &str, callback: &JsValue) -> Result<()> {
    target
        .add_event_listener_with_callback(event, callback.unchecked_ref())
        .map_err(|e| ViewerError::from_js(event, &e))
}

impl PageViewer {
    pub(crate) fn bind_events(
        state: &Rc<RefCell<SharedState>>,
        host: &Rc<HostPage>,
    ) -> Result<Listeners> {
        let window: &EventTarget = host.window.as_ref();
        let r2l = state.borrow().viewer.config().r2l;

        // Click zones on the canvas
        let click = {
            let state = Rc::clone(state);
            let host_ref = Rc::clone(host);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = host_ref.canvas.get_bounding_client_rect();
                let x = f64::from(event.client_x()) - rect.left();
                let canvas_width = state.borrow().renderer.size().width;
                if let Some(direction) = click_direction(canvas_width, x) {
                    Self::internal_pagemove(&state, &host_ref, direction, None);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        listen(host.canvas.as_ref(), "click", click.as_ref())?;

        // Arrow keys page, Escape/Q leave
        let key = {
            let state = Rc::clone(state);
            let host_ref = Rc::clone(host);
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                match key_action(&event.code()) {
                    Some(InputAction::Navigate(direction)) => {
                        Self::internal_pagemove(&state, &host_ref, direction, None);
                    }
                    Some(InputAction::Exit) => host_ref.history_back(),
                    None => {}
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };
        listen(window, "keydown", key.as_ref())?;

        let wheel = {
            let state = Rc::clone(state);
            let host_ref = Rc::clone(host);
            Closure::wrap(Box::new(move |event: WheelEvent| {
                let direction = wheel_direction(event.delta_y(), r2l);
                Self::internal_pagemove(&state, &host_ref, direction, None);
            }) as Box<dyn FnMut(WheelEvent)>)
        };
        listen(window, "wheel", wheel.as_ref())?;

        let resize = {
            let state = Rc::clone(state);
            let host_ref = Rc::clone(host);
            Closure::wrap(Box::new(move |_event: Event| {
                Self::internal_redraw(&state, &host_ref);
            }) as Box<dyn FnMut(Event)>)
        };
        listen(window, "resize", resize.as_ref())?;

        // Pagination slider jumps to its value
        let paging = match &host.page_control {
            Some(control) => {
                let state = Rc::clone(state);
                let host_ref = Rc::clone(host);
                let closure = Closure::wrap(Box::new(move |_event: Event| {
                    let value = host_ref
                        .page_control
                        .as_ref()
                        .map(|control| control.value());
                    if let Some(value) = value {
                        Self::internal_pagemove(&state, &host_ref, Direction::Both, Some(&value));
                    }
                }) as Box<dyn FnMut(Event)>);
                listen(control.as_ref(), "input", closure.as_ref())?;
                Some(closure)
            }
            None => None,
        };

        // Any checkbox change rebuilds the list
        let mut toggles = Vec::new();
        let checkboxes = [
            &host.spread_toggle,
            &host.highlight_toggle,
            &host.pageshift_toggle,
        ];
        for checkbox in checkboxes.into_iter().flatten() {
            let state = Rc::clone(state);
            let host_ref = Rc::clone(host);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                Self::internal_reconfigure(&state, &host_ref);
            }) as Box<dyn FnMut(Event)>);
            listen(checkbox.as_ref(), "change", closure.as_ref())?;
            toggles.push(closure);
        }

        Ok(Listeners {
            _click: click,
            _key: key,
            _wheel: wheel,
            _resize: resize,
            _paging: paging,
            _toggles: toggles,
        })
    }
}
