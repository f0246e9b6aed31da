use std::time::Duration;

use lettre::{
    message::{Mailbox, MultiPart},
    transport::{
        file::FileTransport,
        smtp::{authentication::Credentials, PoolConfig},
    },
    Address, Message, SmtpTransport, Transport,
};

use crate::{
    config::{Config, MailTransport},
    contact::ContactRequest,
    error::Error,
    template,
};

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

pub enum Mailer {
    Smtp(SmtpTransport),
    File(FileTransport),
}

impl Mailer {
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        match &config.transport {
            MailTransport::Smtp => {
                let credentials =
                    Credentials::new(config.smtp_user.clone(), config.smtp_password.clone());
                Ok(Self::Smtp(
                    SmtpTransport::starttls_relay(&config.smtp_host)?
                        .port(config.smtp_port)
                        .credentials(credentials)
                        .timeout(Some(SEND_TIMEOUT))
                        .pool_config(PoolConfig::new())
                        .build(),
                ))
            }
            MailTransport::File(dir) => {
                std::fs::create_dir_all(dir)?;
                Ok(Self::File(FileTransport::new(dir)))
            }
        }
    }

    fn send(&self, message: &Message) -> Result<(), Error> {
        match self {
            Self::Smtp(transport) => transport.send(message).map(|_| ()).map_err(Error::from),
            Self::File(transport) => transport
                .send(message)
                .map(|_| ())
                .map_err(|err| Error::Generic(err.to_string())),
        }
    }
}

pub fn send_contact_email(
    config: &Config,
    mailer: &Mailer,
    contact: &ContactRequest,
    reply_to: Address,
) -> Result<(), Error> {
    let html_body = template::render(&config.template_path, &contact.escaped())?;
    let message = build_message(config, contact, reply_to, html_body)?;
    mailer.send(&message)
}

fn build_message(
    config: &Config,
    contact: &ContactRequest,
    reply_to: Address,
    html_body: String,
) -> Result<Message, Error> {
    Message::builder()
        .from(Mailbox::new(
            Some(config.from_name.clone()),
            config.from_address.parse()?,
        ))
        .to(Mailbox::new(
            Some(config.to_name.clone()),
            config.to_address.parse()?,
        ))
        .reply_to(Mailbox::new(Some(contact.name.clone()), reply_to))
        .subject(format!(
            "رسالة جديدة من {} - {}",
            contact.name, contact.company_name
        ))
        .multipart(MultiPart::alternative_plain_html(
            plain_summary(contact),
            html_body,
        ))
        .map_err(Error::from)
}

fn plain_summary(contact: &ContactRequest) -> String {
    format!(
        "الاسم: {}\nالبريد الإلكتروني: {}\nالهاتف: {}\nالشركة: {}\nالخدمة: {}\nالرسالة: {}",
        contact.name,
        contact.email,
        contact.phone,
        contact.company_name,
        contact.service,
        contact.message
    )
}
