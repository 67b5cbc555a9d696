/// Pure request construction: message + config in, fully-formed outbound
/// request out. No I/O happens here.
use std::collections::BTreeMap;

use crate::api::{self, AttachmentPart, Recipient, SendBody};
use crate::config::Config;
use crate::email::{self, Address, Email};
use crate::error::Error;

/// How the recipient lists go on the wire. Decided once per send and
/// threaded through body construction; the two encodings never mix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecipientEncoding {
    /// Comma-joined `to`/`cc`/`bcc` string fields.
    Flat,
    /// One `recipients` object per address. Used whenever any address in
    /// to/cc/bcc carries a display name, since the flat fields cannot
    /// represent per-recipient names reliably.
    Structured,
}

/// Everything needed to perform the HTTP call.
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: SendBody,
}

/// Pick the recipient encoding for a message: structured as soon as any
/// to/cc/bcc entry has a non-empty display name, flat otherwise.
pub fn recipient_encoding(email: &Email) -> RecipientEncoding {
    let any_named = email
        .to
        .iter()
        .chain(email.cc.iter())
        .chain(email.bcc.iter())
        .any(|a| a.display_name().is_some());

    if any_named {
        RecipientEncoding::Structured
    } else {
        RecipientEncoding::Flat
    }
}

/// Build the outbound request for one message.
///
/// Deterministic: identical inputs produce identical requests. Fails only
/// when a credential is missing, before anything else is assembled.
pub fn build(email: &Email, config: &Config) -> Result<OutboundRequest, Error> {
    config.validate()?;

    let url = api::send_url(config.base_uri.as_deref());

    let token = base64::encode(format!("{}:{}", config.api_key, config.api_private_key));
    let mut headers = BTreeMap::new();
    headers.insert("Authorization".to_string(), format!("Basic {}", token));
    // Custom message headers pass through verbatim
    for (name, value) in &email.headers {
        headers.insert(name.clone(), value.clone());
    }

    let mut body = SendBody {
        from_name: email.from.display_name().map(str::to_string),
        from_email: email.from.email.clone(),
        subject: email.subject.clone(),
        text_part: email.text_body.clone(),
        html_part: email.html_body.clone(),
        ..Default::default()
    };

    match recipient_encoding(email) {
        RecipientEncoding::Flat => {
            body.to = join(&email.to);
            body.cc = join(&email.cc);
            body.bcc = join(&email.bcc);
        }
        RecipientEncoding::Structured => {
            let recipients = email
                .to
                .iter()
                .chain(email.cc.iter())
                .chain(email.bcc.iter())
                .map(|a| Recipient {
                    email: a.email.clone(),
                    name: a.display_name().map(str::to_string),
                })
                .collect();
            body.recipients = Some(recipients);
        }
    }

    body.template_id = email.options.template_id;
    body.template_language = email.options.template_language;
    body.vars = email.options.vars.clone();
    body.custom_id = email.options.custom_id.clone();
    body.event_payload = email.options.event_payload.clone();
    body.monitoring_category = email.options.monitoring_category.clone();

    if !email.attachments.is_empty() {
        let attachments = email
            .attachments
            .iter()
            .map(|a| AttachmentPart {
                content_type: a.content_type.clone(),
                filename: a.filename.clone(),
                content: base64::encode(&a.data),
            })
            .collect();
        body.attachments = Some(attachments);
    }

    Ok(OutboundRequest { url, headers, body })
}

/// Comma-joined address list, or `None` for an empty list so the key is
/// omitted entirely.
fn join(addresses: &[Address]) -> Option<String> {
    if addresses.is_empty() {
        None
    } else {
        Some(email::render_list(addresses))
    }
}
