/// Address of a dataset service running next to the client.
pub const LOCAL_BASE_URL: &str = "http://127.0.0.1:8080";

/// Largest message the client will decode.
pub const MAX_DECODING_MESSAGE_SIZE: usize = 64 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub max_decoding_message_size: usize,
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> ClientConfig {
        ClientConfig {
            base_url: base_url.into(),
            max_decoding_message_size: MAX_DECODING_MESSAGE_SIZE,
        }
    }

    pub fn local() -> ClientConfig {
        ClientConfig::with_base_url(LOCAL_BASE_URL)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::with_base_url(default_base_url())
    }
}

/// Origin of the hosting page, or an empty string outside a browser.
#[cfg(target_arch = "wasm32")]
pub fn default_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Origin of the hosting page, or an empty string outside a browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_base_url() -> String {
    String::new()
}
