use crate::domain::validation::ValidationError;
use crate::domain::value::Channel;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One call to `v1/ping/verify`: either sends a fresh code or checks one.
///
/// String options follow "present and non-empty" semantics: setting `code`,
/// `display_name` or `redirect_url` to `""` is the same as not setting it.
pub struct VerifyContact {
    channel: Channel,
    contact: String,
    code: Option<String>,
    display_name: Option<String>,
    redirect_url: Option<String>,
    expiration_minutes: Option<u32>,
    promote_to_list_ids: Option<Vec<i64>>,
}

impl VerifyContact {
    pub fn new(channel: Channel, contact: impl Into<String>) -> Self {
        Self {
            channel,
            contact: contact.into(),
            code: None,
            display_name: None,
            redirect_url: None,
            expiration_minutes: None,
            promote_to_list_ids: None,
        }
    }

    pub fn phone(phone: impl Into<String>) -> Self {
        Self::new(Channel::Phone, phone)
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self::new(Channel::Email, email)
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = non_empty(code.into());
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = non_empty(name.into());
        self
    }

    /// Where the emailed link should land. SmartPings only honors this for email.
    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = non_empty(url.into());
        self
    }

    pub fn expiration_minutes(mut self, minutes: u32) -> Self {
        self.expiration_minutes = Some(minutes);
        self
    }

    /// Contact lists the contact is added to once verified.
    pub fn promote_to_list_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.promote_to_list_ids = Some(ids.into_iter().collect());
        self
    }

    pub(crate) fn with_optional_name(self, name: Option<String>) -> Self {
        match name {
            Some(name) => self.display_name(name),
            None => self,
        }
    }

    pub(crate) fn with_optional_redirect_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => self.redirect_url(url),
            None => self,
        }
    }

    pub(crate) fn with_optional_expiration(mut self, minutes: Option<u32>) -> Self {
        self.expiration_minutes = minutes;
        self
    }

    pub(crate) fn with_optional_list_ids(mut self, ids: Option<Vec<i64>>) -> Self {
        self.promote_to_list_ids = ids;
        self
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn code_value(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn display_name_value(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn redirect_url_value(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    pub fn expiration_minutes_value(&self) -> Option<u32> {
        self.expiration_minutes
    }

    pub fn promote_to_list_ids_value(&self) -> Option<&[i64]> {
        self.promote_to_list_ids.as_deref()
    }
}

// Only the empty string counts as absent; "0", "false" or whitespace are sent as given.
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ordered SMS destinations.
///
/// Converts from a single number as well as from collections, so
/// `"+15551234567"` and `["+15551234567"]` produce the same value.
pub struct Recipients(Vec<String>);

impl Recipients {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Self(vec![value.to_owned()])
    }
}

impl From<String> for Recipients {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<String>> for Recipients {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(value: Vec<&str>) -> Self {
        value.as_slice().into()
    }
}

impl From<&[&str]> for Recipients {
    fn from(value: &[&str]) -> Self {
        Self(value.iter().map(|it| (*it).to_owned()).collect())
    }
}

impl From<&[String]> for Recipients {
    fn from(value: &[String]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(value: [&str; N]) -> Self {
        value.as_slice().into()
    }
}

impl<const N: usize> From<[String; N]> for Recipients {
    fn from(value: [String; N]) -> Self {
        Self(value.into())
    }
}

impl FromIterator<String> for Recipients {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One call to `v1/ping/message`.
pub struct SendSms {
    message: String,
    recipients: Recipients,
}

impl SendSms {
    /// JSON key for the recipient list.
    pub const DESTINATION_FIELD: &'static str = "destination";

    /// Build an SMS request.
    ///
    /// Fails with [`ValidationError::Empty`] when no recipients are given.
    pub fn new(
        message: impl Into<String>,
        recipients: impl Into<Recipients>,
    ) -> Result<Self, ValidationError> {
        let recipients = recipients.into();
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::DESTINATION_FIELD,
            });
        }
        Ok(Self {
            message: message.into(),
            recipients,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn recipients(&self) -> &[String] {
        self.recipients.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_contact_treats_empty_strings_as_absent() {
        let request = VerifyContact::email("a@example.com")
            .code("")
            .display_name("")
            .redirect_url("");
        assert_eq!(request.code_value(), None);
        assert_eq!(request.display_name_value(), None);
        assert_eq!(request.redirect_url_value(), None);
    }

    #[test]
    fn verify_contact_keeps_falsy_looking_strings() {
        let request = VerifyContact::phone("+15551234567")
            .code("0")
            .display_name(" ");
        assert_eq!(request.code_value(), Some("0"));
        assert_eq!(request.display_name_value(), Some(" "));
    }

    #[test]
    fn verify_contact_keeps_zero_and_empty_list() {
        let request = VerifyContact::phone("+15551234567")
            .expiration_minutes(0)
            .promote_to_list_ids(Vec::new());
        assert_eq!(request.expiration_minutes_value(), Some(0));
        assert_eq!(request.promote_to_list_ids_value(), Some(&[][..]));
    }

    #[test]
    fn single_recipient_becomes_one_element_list() {
        let request = SendSms::new("hi", "+15551234567").unwrap();
        assert_eq!(request.recipients(), ["+15551234567".to_owned()]);
    }

    #[test]
    fn recipients_preserve_order_and_duplicates() {
        let request = SendSms::new("hi", ["+2", "+1", "+2"]).unwrap();
        assert_eq!(request.recipients(), ["+2", "+1", "+2"].map(str::to_owned));
    }

    #[test]
    fn send_sms_requires_a_recipient() {
        let err = SendSms::new("hi", Vec::<String>::new()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: SendSms::DESTINATION_FIELD
            }
        );
    }
}
