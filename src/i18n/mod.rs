//! Internationalization (i18n) for the admin console.
//!
//! # Architecture
//!
//! - `registry`: the closed set of supported locales and their metadata
//! - `resolver`: narrows a route segment to a `Locale`, or signals not-found
//! - `messages`: loads the JSON message bundle for a locale, per request
//!
//! # Example
//!
//! ```rust,ignore
//! use admin_console::i18n::{request_config, Locale};
//!
//! let locale = Locale::resolve("en")?;
//! let ctx = request_config(Path::new("messages"), locale.code()).await?;
//! println!("{}", ctx.t("admin.products.title"));
//! ```

mod messages;
mod registry;
mod resolver;

pub use messages::{bundle_path, load_messages, request_config, MessageBundle, RequestConfig};
pub use registry::{Direction, Locale, LocaleConfig};
