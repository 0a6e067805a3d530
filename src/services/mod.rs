pub mod backend_client;
pub mod session;

pub use backend_client::*;
pub use session::*;
