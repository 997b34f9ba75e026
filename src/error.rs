//! Mount errors
//!
//! Nothing here reaches the visitor: the entry point logs these and moves on
//! to the next effect.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
    /// No `window` or `document` (not running in a browser page)
    #[error("no browser window/document")]
    NoWindow,

    /// Markup for the effect is absent from this page
    #[error("element not found: {0}")]
    MissingElement(&'static str),

    /// Selector matched an element of the wrong kind
    #[error("element {0} is not a {1}")]
    WrongElement(&'static str, &'static str),

    /// Canvas refused a 2D context
    #[error("canvas has no 2d context")]
    NoContext,

    /// A DOM call threw
    #[error("javascript error: {0}")]
    Js(String),
}

impl FxError {
    /// Absent markup is expected on pages that skip a section
    pub fn is_missing_markup(&self) -> bool {
        matches!(self, FxError::MissingElement(_))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FxError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_markup_is_quiet() {
        assert!(FxError::MissingElement("#about").is_missing_markup());
        assert!(!FxError::NoContext.is_missing_markup());
        assert_eq!(
            FxError::WrongElement("#canvas-bg", "canvas").to_string(),
            "element #canvas-bg is not a canvas"
        );
    }
}
