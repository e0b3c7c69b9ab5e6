//! View controller: handlers that call the API and render the outcome.

mod forms;
mod handlers;

pub use forms::{LoginForm, RegisterForm};
pub use handlers::Controller;
