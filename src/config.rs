//! Viewer configuration and the host page contract.
//!
//! The host page carries a configuration element whose attributes
//! (`start_from`, `spread`, `r2l`, `number`, `pagenum`) describe the document,
//! plus three checkboxes (`spread`, `highlight`, `pageshift`) holding the
//! reader's current preferences. [`HostAttributes`] captures the raw strings;
//! [`HostAttributes::into_configuration`] turns them into a [`Configuration`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// Immutable snapshot of everything the viewer needs to build its page list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Page index (0-based, reading order) to open at.
    pub start_from: i64,
    /// Two-page layout requested by the reader.
    pub spread: bool,
    /// Right-to-left reading order.
    pub r2l: bool,
    /// Number of pages in the document.
    pub page_count: usize,
    /// Series (document) identifier used in resource paths.
    pub series_id: String,
    /// Current search text, appended to resource paths when highlighting.
    pub search_query: String,
    /// Ask the image server to highlight `search_query` matches.
    pub highlight: bool,
    /// Insert a blank leading slot so spreads pair on the other parity.
    pub pageshift: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            start_from: 0,
            spread: false,
            r2l: false,
            page_count: 0,
            series_id: String::new(),
            search_query: String::new(),
            highlight: false,
            pageshift: false,
        }
    }
}

impl Configuration {
    /// Pageshift only means something when pages are paired.
    pub fn pageshift_effective(&self) -> bool {
        self.spread && self.pageshift
    }

    /// Query suffix for resource paths, if highlighting is on.
    pub fn query_suffix(&self) -> Option<String> {
        self.highlight
            .then(|| format!("?query={}", self.search_query))
    }

    /// Same document, with the reader's checkbox state applied.
    pub fn with_toggles(&self, toggles: Toggles) -> Self {
        Self {
            spread: toggles.spread,
            highlight: toggles.highlight,
            pageshift: toggles.pageshift,
            ..self.clone()
        }
    }
}

/// Current state of the host page's checkboxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggles {
    pub spread: bool,
    pub highlight: bool,
    pub pageshift: bool,
}

impl Toggles {
    /// Whether the pageshift checkbox should be enabled for interaction.
    pub fn pageshift_enabled(&self) -> bool {
        self.spread
    }
}

/// Raw attribute strings of the host configuration element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostAttributes {
    pub start_from: Option<String>,
    pub spread: Option<String>,
    pub r2l: Option<String>,
    pub number: Option<String>,
    pub pagenum: Option<String>,
}

impl HostAttributes {
    /// Spread preference stored with the document; seeds the checkbox.
    pub fn spread_flag(&self) -> Result<bool> {
        parse_flag("spread", self.spread.as_deref())
    }

    /// Build the configuration from the attributes and current UI state.
    ///
    /// The checkboxes win over the `spread` attribute: the attribute only
    /// provides the checkbox's initial value.
    pub fn into_configuration(self, search_query: &str, toggles: Toggles) -> Result<Configuration> {
        let start_from = parse_int("start_from", self.start_from.as_deref())?;
        let r2l = parse_flag("r2l", self.r2l.as_deref())?;
        let page_count = parse_count("pagenum", self.pagenum.as_deref())?;
        let series_id = self.number.unwrap_or_default().trim().to_string();

        Ok(Configuration {
            start_from,
            spread: toggles.spread,
            r2l,
            page_count,
            series_id,
            search_query: search_query.to_string(),
            highlight: toggles.highlight,
            pageshift: toggles.pageshift_enabled() && toggles.pageshift,
        })
    }
}

/// Parse integer text the way form controls hand it over: surrounding
/// whitespace is ignored and a fractional part is truncated.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let value = text.parse::<f64>().ok()?;
    if !value.is_finite() || value.abs() >= 9.0e15 {
        return None;
    }
    Some(value.trunc() as i64)
}

fn attribute_error(name: &str, value: &str) -> ViewerError {
    ViewerError::Attribute {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn parse_int(name: &str, value: Option<&str>) -> Result<i64> {
    match value.map(str::trim) {
        None | Some("") => Ok(0),
        Some(text) => parse_integer(text).ok_or_else(|| attribute_error(name, text)),
    }
}

fn parse_count(name: &str, value: Option<&str>) -> Result<usize> {
    let count = parse_int(name, value)?;
    usize::try_from(count).map_err(|_| attribute_error(name, value.unwrap_or_default()))
}

fn parse_flag(name: &str, value: Option<&str>) -> Result<bool> {
    let Some(text) = value.map(str::trim) else {
        return Ok(false);
    };
    match text.to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "none" => Ok(false),
        "true" => Ok(true),
        other => parse_integer(other)
            .map(|n| n != 0)
            .ok_or_else(|| attribute_error(name, text)),
    }
}
