pub mod app;
pub mod error;
pub mod follow;
pub mod model;
pub mod tweet;
pub mod user;
pub mod wall;

pub use app::App;
pub use error::*;
pub use model::{Tweet, User};
