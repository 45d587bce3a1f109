//! Field Validator
//!
//! Required-field and URL validation for server-rendered forms. Rules are
//! pure ([`rules`]), the per-field state machine is DOM-free
//! ([`lifecycle`]), and [`form`] does the wiring.

mod field;
mod form;
mod lifecycle;
mod rules;

pub use field::FormField;
pub use form::enhance_forms;
