mod logs;

pub use self::logs::init_logger;
