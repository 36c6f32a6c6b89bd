/// Browser family of the requesting client.
///
/// Families the rules never match (for example an unrecognized bot) land in
/// `Other`; unknown clients are a configuration concern, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientFamily {
    Ie,
    Firefox,
    Chromium,
    Webkit,
    Other,
}

impl ClientFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientFamily::Ie => "ie",
            ClientFamily::Firefox => "firefox",
            ClientFamily::Chromium => "chromium",
            ClientFamily::Webkit => "webkit",
            ClientFamily::Other => "other",
        }
    }
}

/// Descriptor of the requesting client, as detected from its user agent.
#[derive(Clone, Debug)]
pub struct Client {
    pub family: ClientFamily,

    /// Major browser version when the user agent disclosed one.
    pub major_version: Option<u32>,

    /// The raw user-agent string the descriptor was derived from.
    pub user_agent: String,
}

/// Read-only request environment handed to the rule chain.
///
/// A context without a client descriptor is malformed input for rule
/// processing: rules surface that as an error rather than defaulting.
#[derive(Clone, Debug, Default)]
pub struct ClientContext {
    client: Option<Client>,
}

impl ClientContext {
    pub fn with_client(client: Client) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}
