use std::path::PathBuf;

use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_password: String,
    pub from_address: String,
    pub from_name: String,
    pub to_address: String,
    pub to_name: String,
    pub debug: bool,
    pub template_path: PathBuf,
    pub transport: MailTransport,
}

#[derive(Debug, Clone)]
pub enum MailTransport {
    Smtp,
    File(PathBuf),
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let transport = match std::env::var("MAIL_TRANSPORT").as_deref() {
            Ok("file") => MailTransport::File(PathBuf::from(
                std::env::var("MAIL_OUTBOX_DIR").unwrap_or_else(|_| "outbox".to_owned()),
            )),
            _ => MailTransport::Smtp,
        };

        Ok(Self {
            smtp_host: std::env::var("MAILGUN_SMTP_HOST")?,
            smtp_port: std::env::var("MAILGUN_SMTP_PORT")?.parse()?,
            smtp_user: std::env::var("MAILGUN_SMTP_USER")?,
            smtp_password: std::env::var("MAILGUN_SMTP_PASSWORD")?,
            from_address: std::env::var("MAIL_FROM_ADDRESS")?,
            from_name: std::env::var("MAIL_FROM_NAME")?,
            to_address: std::env::var("MAIL_TO_ADDRESS")?,
            to_name: std::env::var("MAIL_TO_NAME")?,
            debug: std::env::var("APP_DEBUG").map(|v| v == "true").unwrap_or(false),
            template_path: PathBuf::from(
                std::env::var("EMAIL_TEMPLATE_PATH")
                    .unwrap_or_else(|_| "email-template.html".to_owned()),
            ),
            transport,
        })
    }
}
