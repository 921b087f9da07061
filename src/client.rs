use crate::entry::{DirectoryEntry, NamePair, REQUESTED_ATTRS};
use crate::error::SleuthError;
use ldap3::{Ldap, LdapConnAsync, LdapResult, Scope, SearchEntry};
use tracing::{debug, instrument, warn};

const LDAP_SUCCESS: u32 = 0;
const LDAP_INVALID_CREDENTIALS: u32 = 49;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMethod {
    /// Domain credential binding, as Active Directory expects.
    Ntlm,
    Simple,
}

/// Anything that can look up users by given name and surname. An empty
/// result is a valid answer, not an error.
#[allow(async_fn_in_trait)]
pub trait Directory {
    async fn search(&mut self, pair: &NamePair) -> Result<Vec<DirectoryEntry>, SleuthError>;
}

/// Escape a value for use inside an ldap filter assertion (RFC 4515).
pub fn escape_filter_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\5c"),
            '*' => out.push_str("\\2a"),
            '(' => out.push_str("\\28"),
            ')' => out.push_str("\\29"),
            '\0' => out.push_str("\\00"),
            c => out.push(c),
        }
    }
    out
}

pub fn name_filter(pair: &NamePair) -> String {
    format!(
        "(&(givenName={})(sn={}))",
        escape_filter_value(&pair.first_name),
        escape_filter_value(&pair.last_name)
    )
}

fn check_bind(result: LdapResult) -> Result<(), SleuthError> {
    match result.rc {
        LDAP_SUCCESS => Ok(()),
        LDAP_INVALID_CREDENTIALS => Err(SleuthError::Connection(format!(
            "invalid credentials ({})",
            result.text
        ))),
        rc => Err(SleuthError::Connection(format!(
            "bind failed with code {}: {}",
            rc, result.text
        ))),
    }
}

/// Opens and releases directory sessions.
#[allow(async_fn_in_trait)]
pub trait Connector {
    type Session: Directory;

    async fn connect(&self, password: &str) -> Result<Self::Session, SleuthError>;

    async fn disconnect(&self, session: Self::Session);
}

/// Where and how to bind. The password is only held for the duration of
/// `connect`.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    url: url::Url,
    username: String,
    method: BindMethod,
    search_base: String,
}

impl DirectoryClient {
    pub fn new(url: url::Url, username: &str, method: BindMethod, search_base: &str) -> Self {
        DirectoryClient {
            url,
            username: username.to_string(),
            method,
            search_base: search_base.to_string(),
        }
    }
}

impl Connector for DirectoryClient {
    type Session = Session;

    /// Open a connection to the server and bind. No session exists unless
    /// the bind succeeded.
    #[instrument(skip(self, password), fields(url = %self.url, user = %self.username))]
    async fn connect(&self, password: &str) -> Result<Session, SleuthError> {
        debug!("Connecting to directory server");
        let (conn, mut ldap) = LdapConnAsync::new(self.url.as_str())
            .await
            .map_err(|e| SleuthError::Connection(e.to_string()))?;

        // The current thread runtime drives this alongside our requests.
        tokio::spawn(async move {
            if let Err(e) = conn.drive().await {
                warn!(error = %e, "ldap connection driver error");
            }
        });

        let result = match self.method {
            BindMethod::Ntlm => ntlm_bind(&mut ldap, &self.username, password).await?,
            BindMethod::Simple => ldap
                .simple_bind(&self.username, password)
                .await
                .map_err(|e| SleuthError::Connection(e.to_string()))?,
        };
        check_bind(result)?;
        debug!("Bind complete");

        Ok(Session {
            ldap,
            search_base: self.search_base.clone(),
        })
    }

    async fn disconnect(&self, session: Session) {
        session.unbind().await
    }
}

#[cfg(feature = "ntlm")]
async fn ntlm_bind(
    ldap: &mut Ldap,
    username: &str,
    password: &str,
) -> Result<LdapResult, SleuthError> {
    ldap.sasl_ntlm_bind(username, password)
        .await
        .map_err(|e| SleuthError::Connection(e.to_string()))
}

#[cfg(not(feature = "ntlm"))]
async fn ntlm_bind(
    _ldap: &mut Ldap,
    _username: &str,
    _password: &str,
) -> Result<LdapResult, SleuthError> {
    Err(SleuthError::Connection(
        "NTLM support is not enabled in this build, use --simple-bind".to_string(),
    ))
}

/// An authenticated connection. Release it with `unbind`.
pub struct Session {
    ldap: Ldap,
    search_base: String,
}

impl Session {
    pub async fn unbind(mut self) {
        if let Err(e) = self.ldap.unbind().await {
            warn!(error = %e, "Error during ldap unbind");
        }
    }
}

impl Directory for Session {
    #[instrument(skip(self))]
    async fn search(&mut self, pair: &NamePair) -> Result<Vec<DirectoryEntry>, SleuthError> {
        let filter = name_filter(pair);
        let query_err = |reason: String| SleuthError::Query {
            first_name: pair.first_name.clone(),
            last_name: pair.last_name.clone(),
            reason,
        };
        debug!(filter = %filter, base = %self.search_base, "Searching");

        let (entries, _) = self
            .ldap
            .search(&self.search_base, Scope::Subtree, &filter, REQUESTED_ATTRS.to_vec())
            .await
            .map_err(|e| query_err(e.to_string()))?
            .success()
            .map_err(|e| query_err(e.to_string()))?;

        debug!(found = entries.len(), "Search complete");
        Ok(entries
            .into_iter()
            .map(SearchEntry::construct)
            .map(DirectoryEntry::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_filter() {
        let pair = NamePair::new("Alice", "Smith");
        assert_eq!(name_filter(&pair), "(&(givenName=Alice)(sn=Smith))");
    }

    #[test]
    fn test_name_filter_escapes_values() {
        let pair = NamePair::new("Al*", "(Smith)\\");
        assert_eq!(
            name_filter(&pair),
            "(&(givenName=Al\\2a)(sn=\\28Smith\\29\\5c))"
        );
        assert_eq!(escape_filter_value("a\0b"), "a\\00b");
        assert_eq!(escape_filter_value("O'Brien"), "O'Brien");
    }

    #[test]
    fn test_check_bind() {
        let ok = LdapResult {
            rc: 0,
            matched: String::new(),
            text: String::new(),
            refs: Vec::new(),
            ctrls: Vec::new(),
        };
        assert!(check_bind(ok).is_ok());

        let denied = LdapResult {
            rc: 49,
            matched: String::new(),
            text: "80090308: LdapErr".to_string(),
            refs: Vec::new(),
            ctrls: Vec::new(),
        };
        match check_bind(denied) {
            Err(SleuthError::Connection(msg)) => assert!(msg.starts_with("invalid credentials")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
