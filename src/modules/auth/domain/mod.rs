mod credentials;

pub use credentials::{Credentials, MIN_PASSWORD_LEN};
