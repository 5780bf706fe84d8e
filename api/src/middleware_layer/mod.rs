pub mod cors;
pub mod panic_guard;
pub mod request_log;
pub mod security_headers;
