//! Host page contract.
//!
//! The page embedding the viewer provides a configuration element, the
//! canvas, a search box, a pagination range control, a page number display
//! and three checkboxes. Only the configuration element and the canvas are
//! required; the viewer degrades gracefully when the others are absent.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement, Window};

use crate::config::{HostAttributes, Toggles};
use crate::error::{Result, ViewerError};
use crate::navigation::Navigation;
use crate::pages::PagingControl;

pub(crate) const CONFIG_ELEMENT_ID: &str = "data-container";
pub(crate) const CANVAS_ID: &str = "canvas";
pub(crate) const SEARCH_QUERY_ID: &str = "search_query";
pub(crate) const PAGE_CONTROL_ID: &str = "pagecontrol";
pub(crate) const POSITION_ID: &str = "position";
pub(crate) const SPREAD_TOGGLE_ID: &str = "spread";
pub(crate) const HIGHLIGHT_TOGGLE_ID: &str = "highlight";
pub(crate) const PAGESHIFT_TOGGLE_ID: &str = "pageshift";

/// Elements of the host page the viewer reads from and writes to.
pub(crate) struct HostPage {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) config_element: Element,
    pub(crate) canvas: HtmlCanvasElement,
    pub(crate) search_query: Option<HtmlInputElement>,
    pub(crate) page_control: Option<HtmlInputElement>,
    pub(crate) position: Option<Element>,
    pub(crate) spread_toggle: Option<HtmlInputElement>,
    pub(crate) highlight_toggle: Option<HtmlInputElement>,
    pub(crate) pageshift_toggle: Option<HtmlInputElement>,
}

fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

impl HostPage {
    pub(crate) fn from_window(window: Window) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| ViewerError::Dom("window has no document".to_string()))?;
        let config_element = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .ok_or_else(|| ViewerError::MissingElement(CONFIG_ELEMENT_ID.to_string()))?;
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| ViewerError::MissingElement(CANVAS_ID.to_string()))?;

        Ok(Self {
            search_query: input_by_id(&document, SEARCH_QUERY_ID),
            page_control: input_by_id(&document, PAGE_CONTROL_ID),
            position: document.get_element_by_id(POSITION_ID),
            spread_toggle: input_by_id(&document, SPREAD_TOGGLE_ID),
            highlight_toggle: input_by_id(&document, HIGHLIGHT_TOGGLE_ID),
            pageshift_toggle: input_by_id(&document, PAGESHIFT_TOGGLE_ID),
            window,
            document,
            config_element,
            canvas,
        })
    }

    pub(crate) fn attributes(&self) -> HostAttributes {
        let attr = |name: &str| self.config_element.get_attribute(name);
        HostAttributes {
            start_from: attr("start_from"),
            spread: attr("spread"),
            r2l: attr("r2l"),
            number: attr("number"),
            pagenum: attr("pagenum"),
        }
    }

    pub(crate) fn search_query(&self) -> String {
        self.search_query
            .as_ref()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    /// Checkbox state; a missing spread checkbox falls back to the
    /// document's stored preference.
    pub(crate) fn toggles(&self) -> Toggles {
        let checked = |toggle: &Option<HtmlInputElement>| toggle.as_ref().map(HtmlInputElement::checked);
        let spread = checked(&self.spread_toggle).unwrap_or_else(|| {
            self.attributes().spread_flag().unwrap_or_else(|e| {
                log::warn!("{e}");
                false
            })
        });
        Toggles {
            spread,
            highlight: checked(&self.highlight_toggle).unwrap_or(false),
            pageshift: checked(&self.pageshift_toggle).unwrap_or(false),
        }
    }

    pub(crate) fn set_pageshift_enabled(&self, enabled: bool) {
        if let Some(toggle) = &self.pageshift_toggle {
            toggle.set_disabled(!enabled);
        }
    }

    pub(crate) fn set_paging(&self, paging: PagingControl) {
        if let Some(control) = &self.page_control {
            control.set_step(&paging.step.to_string());
            control.set_max(&paging.max.to_string());
        }
    }

    pub(crate) fn show_position(&self, navigation: &Navigation) {
        if let Some(control) = &self.page_control {
            control.set_value(&navigation.position.to_string());
        }
        if let Some(display) = &self.position {
            let indicator = navigation.indicator.to_string();
            match display.dyn_ref::<HtmlInputElement>() {
                Some(input) => input.set_value(&indicator),
                None => display.set_text_content(Some(&indicator)),
            }
        }
    }

    /// Client area of the document element in CSS pixels.
    pub(crate) fn viewport_size(&self) -> (f64, f64) {
        self.document
            .document_element()
            .map(|root| (f64::from(root.client_width()), f64::from(root.client_height())))
            .unwrap_or((0.0, 0.0))
    }

    pub(crate) fn history_back(&self) {
        match self.window.history() {
            Ok(history) => {
                if let Err(e) = history.back() {
                    log::warn!("{}", ViewerError::from_js("history.back", &e));
                }
            }
            Err(e) => log::warn!("{}", ViewerError::from_js("history", &e)),
        }
    }
}
