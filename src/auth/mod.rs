pub mod context;
pub mod gate;
pub mod service;

pub use context::{Session, SessionHandle};
pub use gate::{route_access, RouteAccess};
pub use service::{AuthResponse, AuthService, Credentials, Registration};
