use std::fmt;

/// HTTP verb of a documented call.
///
/// `Metadata` and `Undelete` are first-class verbs of the documented API and
/// follow the same header/body/status contract as the standard ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Metadata,
    Undelete,
}

impl Method {
    /// Upper-case wire name of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Metadata => "METADATA",
            Method::Undelete => "UNDELETE",
        }
    }

    /// Update-in-place verbs render every form parameter as optional in the
    /// documentation table, whatever the schema says.
    pub fn is_update_in_place(&self) -> bool {
        matches!(self, Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
