//! Authentication UI module
//!
//! Session context plus the sign-in, sign-up and user menu components.

mod context;
mod login_form;
mod register_form;
mod user_menu;

pub use context::{SessionContext, provide_session_context, use_session};
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use user_menu::UserMenu;
