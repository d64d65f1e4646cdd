//! JS-facing views of core types and conversions at the boundary.

use imgpress_core::{CompressError, Session, SessionOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// One preview as handed to the page.
///
/// `url` is an object URL over the item's current bytes, suitable for an
/// `<img src>` or a download link.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PreviewView<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub size: usize,
    pub size_label: String,
    pub media_type: &'a str,
}

/// Pair each preview with the object URL created for it.
///
/// `urls` is kept in lockstep with the previews; a missing URL renders as
/// an empty string rather than failing the whole list.
pub(crate) fn preview_views<'a>(session: &'a Session, urls: &'a [String]) -> Vec<PreviewView<'a>> {
    session
        .previews()
        .iter()
        .enumerate()
        .map(|(index, item)| PreviewView {
            name: &item.name,
            url: urls.get(index).map(String::as_str).unwrap_or_default(),
            size: item.size(),
            size_label: imgpress_core::format_kilobytes(item.size()),
            media_type: item.media_type.as_str(),
        })
        .collect()
}

/// Parse a `{ defaultPercent }` options object. `null` and `undefined`
/// give the defaults.
pub(crate) fn parse_options(options: JsValue) -> Result<SessionOptions, JsValue> {
    if options.is_null() || options.is_undefined() {
        return Ok(SessionOptions::default());
    }

    serde_wasm_bindgen::from_value(options)
        .map_err(|err| JsValue::from_str(&format!("Invalid options: {err}")))
}

pub(crate) fn compress_error(err: CompressError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
