use serde::Deserialize;

use crate::response::Lang;

pub const REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "email",
    "phone",
    "service",
    "companyName",
    "message",
];

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default, rename = "companyName")]
    pub company_name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub lang: Option<String>,
}

impl ContactRequest {
    pub fn lang(&self) -> Lang {
        match self.lang.as_deref() {
            Some("en") => Lang::En,
            _ => Lang::Ar,
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            &self.name,
            &self.email,
            &self.phone,
            &self.service,
            &self.company_name,
            &self.message,
        ];
        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn escaped(&self) -> EscapedContact {
        EscapedContact {
            name: escape_html(&self.name),
            email: escape_html(&self.email),
            phone: escape_html(&self.phone),
            service: escape_html(&self.service),
            company_name: escape_html(&self.company_name),
            message: escape_html(&self.message),
        }
    }
}

pub struct EscapedContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub company_name: String,
    pub message: String,
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ContactRequest {
        serde_json::from_str(
            r#"{
                "name": "أحمد محمد",
                "email": "ahmed.test@example.com",
                "phone": "+966501234567",
                "service": "تطوير المواقع",
                "companyName": "شركة التقنية المتقدمة",
                "message": "أرغب في الاستفسار عن خدمات تطوير المواقع"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn complete_request_has_no_missing_fields() {
        assert!(valid_request().missing_fields().is_empty());
    }

    #[test]
    fn absent_and_empty_fields_both_count_as_missing() {
        let request: ContactRequest =
            serde_json::from_str(r#"{"name": "", "email": "a@b.com"}"#).unwrap();
        assert_eq!(
            request.missing_fields(),
            vec!["name", "phone", "service", "companyName", "message"]
        );
    }

    #[test]
    fn missing_fields_follow_declaration_order() {
        let request: ContactRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.missing_fields(), REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn lang_defaults_to_arabic() {
        let mut request = valid_request();
        assert_eq!(request.lang(), Lang::Ar);

        request.lang = Some("en".to_owned());
        assert_eq!(request.lang(), Lang::En);

        request.lang = Some("fr".to_owned());
        assert_eq!(request.lang(), Lang::Ar);
    }

    #[test]
    fn escape_html_covers_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn escaped_copies_every_field() {
        let mut request = valid_request();
        request.name = "<script>".to_owned();
        request.message = "a < b".to_owned();
        let escaped = request.escaped();
        assert_eq!(escaped.name, "&lt;script&gt;");
        assert_eq!(escaped.message, "a &lt; b");
        assert_eq!(escaped.email, "ahmed.test@example.com");
    }
}
