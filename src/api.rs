/// Mailjet send API constants and wire types.
///
/// Field names here must match the provider byte-for-byte; serde renames
/// carry the mapping so the rest of the crate can use Rust names.
use std::collections::BTreeMap;

use serde::Serialize;

pub const MAILJET_BASE_URI: &str = "https://api.mailjet.com/v3";
pub const SEND_PATH: &str = "/send";

/// Full send-endpoint URL for the given base URI (production endpoint
/// when no override is configured).
pub fn send_url(base_uri: Option<&str>) -> String {
    format!(
        "{}{}",
        base_uri.unwrap_or(MAILJET_BASE_URI).trim_end_matches('/'),
        SEND_PATH
    )
}

/// One entry of the structured `recipients` array. `name` is only present
/// when the address carries a non-empty display name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recipient {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One entry of the `attachments` array. `content` is the attachment's
/// raw payload, base64-encoded.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttachmentPart {
    #[serde(rename = "content-type")]
    pub content_type: String,
    pub filename: String,
    pub content: String,
}

/// Body of a send call. Optional fields serialize only when set, so keys
/// the provider treats as "absent" never appear as null or empty.
///
/// Exactly one recipient encoding is populated per request: either the
/// flat `to`/`cc`/`bcc` strings or the structured `recipients` array,
/// never both.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SendBody {
    #[serde(rename = "fromname", skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(rename = "fromemail")]
    pub from_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "text-part", skip_serializing_if = "Option::is_none")]
    pub text_part: Option<String>,
    #[serde(rename = "html-part", skip_serializing_if = "Option::is_none")]
    pub html_part: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<Recipient>>,
    #[serde(rename = "mj-templateid", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    #[serde(
        rename = "mj-templatelanguage",
        skip_serializing_if = "Option::is_none"
    )]
    pub template_language: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<BTreeMap<String, String>>,
    #[serde(rename = "Mj-CustomID", skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(rename = "Mj-EventPayLoad", skip_serializing_if = "Option::is_none")]
    pub event_payload: Option<String>,
    #[serde(
        rename = "Mj-MonitoringCategory",
        skip_serializing_if = "Option::is_none"
    )]
    pub monitoring_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AttachmentPart>>,
}
