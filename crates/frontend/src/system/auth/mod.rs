pub mod actor;
pub mod api;
pub mod context;
pub mod guard;
pub mod jwt;
pub mod storage;

pub use actor::CurrentActor;
pub use context::{use_actor, use_auth, AuthProvider, AuthState};
pub use guard::RequirePermission;
