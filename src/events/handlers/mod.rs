pub mod notice_handler;

pub use notice_handler::register_notice_handlers;
