//! Application pages module
//!
//! - Exam overview (home)
//! - Login page
//! - Register page
//! - 404 page

mod exams;
mod layout;
mod login;
mod not_found;
mod register;

pub use exams::ExamsPage;
pub use layout::PageLayout;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
