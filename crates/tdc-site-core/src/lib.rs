//! Behavior of the Tour Da Cape site scripts, independent of the browser.
//!
//! Each component is a small controller that owns its state and writes
//! through a view trait. The wasm frontend implements those traits over the
//! DOM; tests implement them with recorders and drive time through
//! [`scheduler::Scheduler`].

pub mod anchor;
pub mod carousel;
pub mod contact;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod menu;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod validate;
pub mod whatsapp;

#[cfg(test)]
pub(crate) mod testing;

pub use error::SiteError;
pub use tdc_site_types as types;
