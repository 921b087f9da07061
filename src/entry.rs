use ldap3::SearchEntry;
use serde::Serialize;
use std::collections::HashMap;

/// A given name and surname to look up. Duplicates are looked up independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub first_name: String,
    pub last_name: String,
}

impl NamePair {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        NamePair {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// The four attributes we request for each matched user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub common_name: String,
    pub email: String,
    pub given_name: String,
    pub surname: String,
}

pub const ATTR_CN: &str = "cn";
pub const ATTR_MAIL: &str = "mail";
pub const ATTR_GIVEN_NAME: &str = "givenName";
pub const ATTR_SN: &str = "sn";

pub const REQUESTED_ATTRS: [&str; 4] = [ATTR_CN, ATTR_MAIL, ATTR_GIVEN_NAME, ATTR_SN];

// Servers are free to return attribute names in their own case.
fn attr_value(attrs: &HashMap<String, Vec<String>>, name: &str) -> String {
    attrs
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, values)| values.join(", "))
        .unwrap_or_default()
}

impl From<SearchEntry> for DirectoryEntry {
    fn from(entry: SearchEntry) -> Self {
        DirectoryEntry {
            common_name: attr_value(&entry.attrs, ATTR_CN),
            email: attr_value(&entry.attrs, ATTR_MAIL),
            given_name: attr_value(&entry.attrs, ATTR_GIVEN_NAME),
            surname: attr_value(&entry.attrs, ATTR_SN),
        }
    }
}
