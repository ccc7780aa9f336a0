mod registry;
pub mod shell;

pub use registry::{execute, AppContext};
pub use shell::ShellCommand;
