use serde::Serialize;

use crate::error::Error;

const SENT_EN: &str = "Email sent successfully! We will contact you soon.";
const SENT_AR: &str = "تم إرسال البريد الإلكتروني بنجاح! سنتواصل معك قريباً.";
const MISSING_FIELDS_EN: &str = "Missing required fields: ";
const MISSING_FIELDS_AR: &str = "حقول مطلوبة مفقودة: ";
const INVALID_EMAIL_EN: &str = "Invalid email address";
const INVALID_EMAIL_AR: &str = "عنوان البريد الإلكتروني غير صالح";
const METHOD_NOT_ALLOWED_EN: &str = "Method not allowed. Only POST requests are accepted.";
const METHOD_NOT_ALLOWED_AR: &str = "الطريقة غير مسموح بها. يتم قبول طلبات POST فقط.";
const SEND_FAILED_EN: &str = "Failed to send email. Please try again later.";
const SEND_FAILED_AR: &str = "فشل إرسال البريد الإلكتروني. يرجى المحاولة مرة أخرى لاحقاً.";
const HIDDEN_ERROR: &str = "Internal server error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ar,
}

impl Lang {
    fn pick(self, en: &str, ar: &str) -> String {
        match self {
            Lang::En => en.to_owned(),
            Lang::Ar => ar.to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    success: bool,
    message: String,
    #[serde(rename = "messageAr")]
    message_ar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing_fields: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ApiResponse {
    pub fn sent(lang: Lang) -> Self {
        Self {
            success: true,
            message: lang.pick(SENT_EN, SENT_AR),
            message_ar: SENT_AR.to_owned(),
            missing_fields: None,
            error: None,
        }
    }

    pub fn missing_fields(lang: Lang, fields: Vec<&'static str>) -> Self {
        let listed = fields.join(", ");
        Self {
            success: false,
            message: match lang {
                Lang::En => format!("{MISSING_FIELDS_EN}{listed}"),
                Lang::Ar => format!("{MISSING_FIELDS_AR}{listed}"),
            },
            message_ar: format!("{MISSING_FIELDS_AR}{listed}"),
            missing_fields: Some(fields),
            error: None,
        }
    }

    pub fn invalid_email(lang: Lang) -> Self {
        Self {
            success: false,
            message: lang.pick(INVALID_EMAIL_EN, INVALID_EMAIL_AR),
            message_ar: INVALID_EMAIL_AR.to_owned(),
            missing_fields: None,
            error: None,
        }
    }

    pub fn method_not_allowed() -> Self {
        Self {
            success: false,
            message: METHOD_NOT_ALLOWED_EN.to_owned(),
            message_ar: METHOD_NOT_ALLOWED_AR.to_owned(),
            missing_fields: None,
            error: None,
        }
    }

    pub fn send_failed(lang: Lang, error: &Error, debug: bool) -> Self {
        Self {
            success: false,
            message: lang.pick(SEND_FAILED_EN, SEND_FAILED_AR),
            message_ar: SEND_FAILED_AR.to_owned(),
            missing_fields: None,
            error: Some(if debug {
                error.to_string()
            } else {
                HIDDEN_ERROR.to_owned()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sent_carries_both_languages() {
        let value = serde_json::to_value(ApiResponse::sent(Lang::En)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], SENT_EN);
        assert_eq!(value["messageAr"], SENT_AR);
        assert!(value.get("missing_fields").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn arabic_is_the_default_primary() {
        let value = serde_json::to_value(ApiResponse::sent(Lang::Ar)).unwrap();
        assert_eq!(value["message"], SENT_AR);
    }

    #[test]
    fn missing_fields_lists_names_in_message_and_array() {
        let value = serde_json::to_value(ApiResponse::missing_fields(
            Lang::En,
            vec!["name", "email"],
        ))
        .unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Missing required fields: name, email");
        assert_eq!(
            value["missing_fields"],
            serde_json::json!(["name", "email"])
        );
    }

    #[test]
    fn send_failure_hides_detail_unless_debug() {
        let error = Error::Generic("connection refused".to_owned());
        let hidden = serde_json::to_value(ApiResponse::send_failed(Lang::Ar, &error, false)).unwrap();
        assert_eq!(hidden["error"], HIDDEN_ERROR);

        let shown = serde_json::to_value(ApiResponse::send_failed(Lang::Ar, &error, true)).unwrap();
        assert_eq!(shown["error"], "generic error: connection refused");
    }
}
