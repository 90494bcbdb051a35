//! Main PageViewer struct - the browser entry point.
//!
//! This module provides the WASM-exported `PageViewer` that handles:
//! - Reading the host page contract and building the page list
//! - Redrawing the canvas whenever the page or the window size changes
//! - Navigation and look-ahead preloading
//! - Handling user input (click, keyboard, wheel, pagination, toggles)
//!
//! Event handlers are registered when the viewer is created - no manual
//! JavaScript wiring required.

mod events;
mod host;

use std::cell::RefCell;
use std::rc::Rc;

use log::LevelFilter;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use self::events::Listeners;
use self::host::HostPage;
use crate::error::{Result, ViewerError};
use crate::layout::CanvasSize;
use crate::loader;
use crate::navigation::{Direction, ViewerState};
use crate::render::{draw_pair, usable, CanvasRenderer, RenderBackend};

/// Shared state that can be accessed by event handlers
pub(crate) struct SharedState {
    pub(crate) viewer: ViewerState,
    pub(crate) renderer: CanvasRenderer,
}

/// The main viewer struct exported to JavaScript
#[wasm_bindgen]
pub struct PageViewer {
    state: Rc<RefCell<SharedState>>,
    host: Rc<HostPage>,
    #[allow(dead_code)]
    listeners: Listeners,
}

#[wasm_bindgen]
impl PageViewer {
    /// Create a viewer bound to the current document.
    ///
    /// Reads the configuration element and checkboxes, builds the page list,
    /// wires input handlers and shows the start page.
    #[wasm_bindgen(constructor)]
    pub fn new() -> std::result::Result<PageViewer, JsValue> {
        console_error_panic_hook::set_once();
        crate::logging::init(LevelFilter::Info);

        let window =
            web_sys::window().ok_or_else(|| ViewerError::Dom("no window".to_string()))?;
        let host = Rc::new(HostPage::from_window(window)?);

        let toggles = host.toggles();
        let config = host
            .attributes()
            .into_configuration(&host.search_query(), toggles)?;
        host.set_pageshift_enabled(toggles.pageshift_enabled());

        let viewer = ViewerState::new(config);
        host.set_paging(viewer.paging());
        let start = viewer.start();
        let initial = viewer.initial_direction();
        log::info!(
            "viewer ready: {} slot(s), start {start}, {initial} first",
            viewer.pages().len()
        );

        let renderer = CanvasRenderer::new(host.canvas.clone())?;
        let state = Rc::new(RefCell::new(SharedState { viewer, renderer }));
        let listeners = Self::bind_events(&state, &host)?;

        Self::internal_pagemove(&state, &host, initial, Some(&start.to_string()));

        Ok(PageViewer {
            state,
            host,
            listeners,
        })
    }

    /// Move `"left"`, `"right"` or `"both"` (no move, preload both sides),
    /// or jump to `pos` when given.
    #[wasm_bindgen]
    pub fn pagemove(&self, direction: &str, pos: Option<String>) -> std::result::Result<(), JsValue> {
        let direction: Direction = direction.parse()?;
        Self::internal_pagemove(&self.state, &self.host, direction, pos.as_deref());
        Ok(())
    }

    /// Resize the canvas to the window and draw the current page(s).
    #[wasm_bindgen]
    pub fn redraw(&self) {
        Self::internal_redraw(&self.state, &self.host);
    }

    /// Re-read the checkboxes and rebuild the page list.
    #[wasm_bindgen]
    pub fn reconfigure(&self) {
        Self::internal_reconfigure(&self.state, &self.host);
    }

    /// Current position, page number, layout and page list.
    #[wasm_bindgen]
    pub fn state(&self) -> std::result::Result<JsValue, JsValue> {
        let snapshot = self.state.borrow_mut().viewer.snapshot();
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| ViewerError::Serialization(e.to_string()).into())
    }
}

impl PageViewer {
    pub(crate) fn internal_pagemove(
        state: &Rc<RefCell<SharedState>>,
        host: &HostPage,
        direction: Direction,
        pos: Option<&str>,
    ) {
        let (navigation, windows) = {
            let mut s = state.borrow_mut();
            let navigation = s.viewer.navigate(direction, pos);
            let windows: Vec<_> = navigation
                .preloads
                .iter()
                .map(|request| (*request, s.viewer.preload_window(request)))
                .collect();
            (navigation, windows)
        };
        host.show_position(&navigation);
        Self::internal_redraw(state, host);

        for (request, window) in windows {
            spawn_local(loader::preload(window, request.pos, request.direction));
        }
    }

    pub(crate) fn internal_redraw(state: &Rc<RefCell<SharedState>>, host: &HostPage) {
        let (client_width, client_height) = host.viewport_size();
        let canvas = CanvasSize::from_viewport(client_width, client_height);
        let spread_toggle = host.toggles().spread;

        let (generation, first, second) = {
            let mut s = state.borrow_mut();
            if let Err(e) = s.renderer.resize(&canvas) {
                log::error!("{e}");
            }
            if s.viewer.apply_canvas(&canvas, spread_toggle) {
                host.set_paging(s.viewer.paging());
            }
            let generation = s.viewer.begin_render();
            let (first, second) = s.viewer.path();
            s.renderer.set_busy(true);
            (generation, first, second)
        };

        let state = Rc::clone(state);
        spawn_local(async move {
            if let Err(e) = Self::draw(&state, generation, first, second).await {
                log::error!("render {generation}: {e}");
            }
        });
    }

    /// Load both slots concurrently, then paint unless a newer render
    /// started meanwhile.
    async fn draw(
        state: &Rc<RefCell<SharedState>>,
        generation: u64,
        first: Option<String>,
        second: Option<String>,
    ) -> Result<()> {
        let mut loaded = loader::load_all(&[first, second]).await.into_iter().map(usable);
        let first = loaded.next().flatten();
        let second = loaded.next().flatten();

        let mut s = state.borrow_mut();
        if !s.viewer.is_current_render(generation) {
            log::debug!("render {generation} superseded, not painting");
            return Ok(());
        }
        let drawn = draw_pair(&mut s.renderer, first.as_ref(), second.as_ref());
        s.renderer.set_busy(false);
        drawn.map(|_| ())
    }

    pub(crate) fn internal_reconfigure(state: &Rc<RefCell<SharedState>>, host: &HostPage) {
        let toggles = host.toggles();
        host.set_pageshift_enabled(toggles.pageshift_enabled());
        {
            let mut s = state.borrow_mut();
            s.viewer.reconfigure(toggles);
            host.set_paging(s.viewer.paging());
        }
        Self::internal_pagemove(state, host, Direction::Both, None);
    }
}
