//! User directory interface (external collaborator)

mod mock;
#[allow(clippy::module_inception)]
mod r#trait;

pub use mock::MockUserRepository;
pub use r#trait::UserRepository;
