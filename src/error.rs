use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a page feature did not install.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no window or document available")]
    NoDocument,
    #[error("required element `{0}` not found")]
    MissingElement(&'static str),
    #[error("{0} is not loaded")]
    Unavailable(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
            .unwrap_or_else(|| format!("{:?}", value));
        SetupError::Js(message)
    }
}

impl SetupError {
    /// Absent markup or libraries are expected on some pages and only worth a
    /// debug line; anything else is a real failure.
    pub fn log(&self, feature: &str) {
        match self {
            SetupError::MissingElement(_) | SetupError::Unavailable(_) => {
                log::debug!("{} skipped: {}", feature, self)
            }
            _ => log::warn!("{} failed to initialize: {}", feature, self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            SetupError::MissingElement("#bg-canvas").to_string(),
            "required element `#bg-canvas` not found"
        );
        assert_eq!(SetupError::Unavailable("THREE").to_string(), "THREE is not loaded");
    }
}
