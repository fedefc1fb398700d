//! Identity provider clients.

mod identity_client;
mod memory;

pub use identity_client::{HttpIdentityClient, IdentityService};
pub use memory::InMemoryIdentityService;

#[cfg(any(test, feature = "test-utils"))]
pub use identity_client::MockIdentityService;
