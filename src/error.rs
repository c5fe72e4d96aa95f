use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Browser window is not available")]
    NoWindow,
    #[error("Document is not available")]
    NoDocument,
    #[error("Document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SiteError::Dom(message)
    }
}
