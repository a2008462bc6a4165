pub mod user;
pub mod stats;
pub mod score;

pub use user::*;
pub use stats::*;
pub use score::*;
