//! Core logic for the admin panel of a bilingual (Persian/English) personal
//! website.
//!
//! The interesting part lives in [`controller`]: every Persian input field is
//! bound to its English counterpart, and translations are requested on blur,
//! on an explicit manual action, or as a sequential batch pass right before a
//! form is submitted. Translated text is only ever written into an empty
//! target field, so operator-entered English is never clobbered.
//!
//! Everything else is thin glue: a typed field registry standing in for the
//! DOM ([`fields`]), a single-slot auto-dismissing notification ([`notify`]),
//! and a CRUD client for posts, skills, and the profile record ([`api`]).

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod fields;
pub mod language;
pub mod models;
pub mod notify;
pub mod panel;
pub mod strings;
pub mod translator;

pub use api::{AdminApi, Confirm};
pub use controller::TranslationController;
pub use error::ApiError;
pub use fields::{ActionControl, FieldHandle, FieldPair, FieldRegistry};
pub use notify::Notifier;
pub use panel::AdminPanel;
pub use translator::Translator;
