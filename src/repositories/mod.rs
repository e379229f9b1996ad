pub mod session;

pub use session::{SessionRepository, SessionRepositoryTrait};
