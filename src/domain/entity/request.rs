use std::fmt::{Display, Formatter, Result as FmtResult};
use std::net::SocketAddr;

/// The method a sleep request arrived with. Only [`RequestMethod::Post`] may
/// lead to a suspension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMethod {
    Post,
    Other(String),
}

impl From<&str> for RequestMethod {
    fn from(value: &str) -> Self {
        match value {
            "POST" => Self::Post,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl Display for RequestMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Post => write!(f, "POST"),
            Self::Other(method) => write!(f, "{method}"),
        }
    }
}

/// An inbound request to put the machine to sleep. It lives only as long as
/// the HTTP exchange that carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepRequest {
    remote: Option<SocketAddr>,
    method: RequestMethod,
}

impl SleepRequest {
    /// Creates a new [`SleepRequest`].
    pub fn new(remote: Option<SocketAddr>, method: RequestMethod) -> Self {
        Self { remote, method }
    }

    pub fn remote(&self) -> Option<SocketAddr> {
        self.remote
    }

    pub fn method(&self) -> &RequestMethod {
        &self.method
    }

    /// Whether this request is allowed to schedule a suspension.
    pub fn is_accepted(&self) -> bool {
        self.method == RequestMethod::Post
    }
}
