pub mod handle;
pub mod session;

pub use handle::*;
pub use session::*;
