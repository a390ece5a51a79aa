//! Error type shared by every interactive component.
//!
//! Nothing on the page is fatal: the bootstrap logs these and moves on to
//! the next component.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element: {selector}")]
    MissingElement { selector: String },
    #[error("element is not the expected kind: {selector}")]
    NotAnElement { selector: String },
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid landing config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl LandingError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_selector() {
        let err = LandingError::missing(".modal");
        assert_eq!(err.to_string(), "missing element: .modal");
    }

    #[test]
    fn config_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LandingError = parse.into();
        assert!(matches!(err, LandingError::Config(_)));
        assert!(err.to_string().starts_with("invalid landing config"));
    }
}
