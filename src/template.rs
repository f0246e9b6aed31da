use std::path::Path;

use crate::{contact::EscapedContact, error::Error};

pub fn render(path: &Path, contact: &EscapedContact) -> Result<String, Error> {
    if !path.exists() {
        return Err(Error::TemplateNotFound(path.display().to_string()));
    }
    let template = std::fs::read_to_string(path)?;
    Ok(substitute(&template, contact))
}

fn substitute(template: &str, contact: &EscapedContact) -> String {
    template
        .replace("{{name}}", &contact.name)
        .replace("{{email}}", &contact.email)
        .replace("{{phone}}", &contact.phone)
        .replace("{{service}}", &contact.service)
        .replace("{{companyName}}", &contact.company_name)
        .replace("{{message}}", &nl2br(&contact.message))
}

fn nl2br(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "<br />\n")
}
