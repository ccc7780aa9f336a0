pub mod classifier;
pub mod sanitizer;
pub mod validator;
