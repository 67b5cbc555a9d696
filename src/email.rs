/// Generic email message handed to the adapter.
/// The idea is to keep this provider-agnostic and map it onto the
/// provider's wire format at request-build time.
use std::collections::BTreeMap;

/// A single mail address with an optional display name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Address {
    pub email: String,
    pub name: Option<String>,
}

impl Address {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }

    /// Display name, if set and non-empty. An empty name counts as absent.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// `name <email>` when a display name is present, bare email otherwise.
    pub fn render(&self) -> String {
        match self.display_name() {
            Some(name) => format!("{} <{}>", name, self.email),
            None => self.email.clone(),
        }
    }
}

/// Render a list of addresses as a single comma-joined string,
/// in original order.
pub fn render_list(addresses: &[Address]) -> String {
    addresses
        .iter()
        .map(Address::render)
        .collect::<Vec<_>>()
        .join(",")
}

/// A single attachment. `data` holds the raw bytes; base64 encoding
/// happens at request-build time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Provider-specific send options. The source message model keeps these in
/// an open key/value bag; here they are enumerated so the adapter's
/// vocabulary is explicit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SendOptions {
    pub template_id: Option<i64>,
    pub template_language: Option<bool>,
    pub vars: Option<BTreeMap<String, String>>,
    pub custom_id: Option<String>,
    pub event_payload: Option<String>,
    pub monitoring_category: Option<String>,
}

/// A single outbound email.
///
/// `from` and every entry of `to`/`cc`/`bcc` must carry a non-empty email
/// address; the adapter does not re-validate addresses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Email {
    pub from: Address,
    pub to: Vec<Address>,
    pub cc: Vec<Address>,
    pub bcc: Vec<Address>,
    pub subject: Option<String>,
    pub text_body: Option<String>,
    pub html_body: Option<String>,

    /// Custom headers, passed through to the request verbatim.
    pub headers: BTreeMap<String, String>,
    pub attachments: Vec<Attachment>,
    pub options: SendOptions,
}

impl Email {
    pub fn new() -> Self {
        Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_bare_email() {
        let addr = Address::new("foo@bar.com");
        assert_eq!(addr.render(), "foo@bar.com");
    }

    #[test]
    fn render_named_email() {
        let addr = Address::named("Foo Bar", "foo@bar.com");
        assert_eq!(addr.render(), "Foo Bar <foo@bar.com>");
    }

    #[test]
    fn empty_name_renders_bare() {
        let addr = Address::named("", "foo@bar.com");
        assert_eq!(addr.display_name(), None);
        assert_eq!(addr.render(), "foo@bar.com");
    }

    #[test]
    fn render_list_preserves_order() {
        let list = vec![
            Address::named("foo1", "foo1@bar.com"),
            Address::new("foo2@bar.com"),
            Address::new("foo3@bar.com"),
        ];
        assert_eq!(
            render_list(&list),
            "foo1 <foo1@bar.com>,foo2@bar.com,foo3@bar.com"
        );
    }
}
