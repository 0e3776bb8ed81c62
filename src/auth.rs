//! Account credentials, resource identifiers, and secret wrappers.

pub mod credentials;
pub mod id;
pub mod secret;

pub use credentials::*;
pub use id::*;
pub use secret::*;
