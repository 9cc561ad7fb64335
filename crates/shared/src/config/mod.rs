mod app;
mod database;

pub use self::app::Config;
pub use self::database::{ConnectionManager, ConnectionPool};
