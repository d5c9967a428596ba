use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wrapper for contact details (emails, phone numbers) that redacts the value
/// in `Debug` and `Display` output.
///
/// Serialization is transparent: stored documents and API payloads carry the
/// real value. Only formatting through log macros such as
/// `tracing::info!("{:?}", inquiry)` is masked.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Masked({})", redact(self.0.as_ref()))
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0.as_ref()))
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl From<String> for Masked<String> {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Keeps the first character and, for emails, the domain: `john@example.com`
/// becomes `j***@example.com`, `+1234567890` becomes `+***`.
fn redact(value: &str) -> String {
    let mut chars = value.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };

    match value.split_once('@') {
        Some((_, domain)) => format!("{}***@{}", first, domain),
        None => format!("{}***", first),
    }
}
