//! Side effects the core asks the shell to perform.
//!
//! We use Crux's built-in Render capability directly because it provides
//! all necessary functionality for triggering view updates. HTTP and
//! key/value storage come from `crux_http` and `crux_kv`; the submodules
//! wrap their results in the core's own error types.

mod http;
mod kv;

pub use self::http::{read_json, Endpoint, HttpError, HttpResult, ValidatedUrl, MAX_URL_LENGTH};
pub use self::kv::{read_string, write_ack, KvError, KvKey, KvResult, THEME_KEY};

pub use crux_core::render::Render;
pub use crux_http::Http;
pub use crux_kv::KeyValue;

// The Effect derive implements `WithContext<App, Effect>` for the `App` in scope.
#[allow(unused_imports)]
use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub key_value: KeyValue<Event>,
    pub render: Render<Event>,
}
