use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Contact medium a verification code is delivered through.
pub enum Channel {
    Phone,
    Email,
}

impl Channel {
    /// Wire name of the channel (`phone` / `email`).
    ///
    /// The same string is sent as `type` and used as the key that carries the contact.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_wire_names() {
        assert_eq!(Channel::Phone.as_str(), "phone");
        assert_eq!(Channel::Email.as_str(), "email");
        assert_eq!(Channel::Email.to_string(), "email");
    }
}
