//! Common reusable UI components
//!
//! Building blocks shared by the exam dialogs and the auth pages.

pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use form::{CheckboxField, FormField};
pub use message::{ErrorMessage, SuccessMessage};
pub use modal::{DialogActions, Modal};
pub use spinner::{LoadingSpinner, Spinner, SpinnerSize};
