//! Mail module - HTTP mail-provider client

mod http_mailer;

pub use http_mailer::HttpMailer;
