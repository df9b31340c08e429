use super::{ClientResult, WikiClient};
use crate::config::Credentials;
use crate::error::ClientError;
use crate::model::{Content, ContentList, ContentQuery};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Page size requested from the child-page listing. Larger trees are paged through.
const CHILD_PAGE_LIMIT: usize = 50;

/// Stands in for an error response body that could not be read.
const UNREADABLE_BODY: &str = "<unreadable body>";

/// REST root of a Confluence Cloud site.
pub fn rest_url(account: &str) -> String {
    format!("https://{account}.atlassian.net/wiki/rest/api")
}

/// Blocking client for the Confluence Cloud REST API, authenticated with
/// basic auth (user + API token).
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    user: String,
    token: String,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl HttpClient {
    pub fn new(
        base_url: impl Into<String>,
        user: impl Into<String>,
        token: impl Into<String>,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("wikitree/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user: user.into(),
            token: token.into(),
        })
    }

    pub fn from_credentials(credentials: &Credentials) -> ClientResult<Self> {
        Self::new(
            rest_url(&credentials.account),
            &credentials.user,
            &credentials.token,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn content_url(&self, id: &str) -> String {
        format!("{}/content/{}", self.base_url, id)
    }

    fn child_pages_url(&self, id: &str) -> String {
        format!("{}/content/{}/child/page", self.base_url, id)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.user, Some(&self.token))
    }

    fn read_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let response = check_status(method, url, self.authed(request).send()?)?;
        let text = response.text()?;
        trace!(method, url, body = %text, "response");
        Ok(serde_json::from_str(&text)?)
    }

    fn list_page(&self, id: &str, start: usize) -> ClientResult<ContentList> {
        let url = self.child_pages_url(id);
        debug!(page_id = id, start, "listing child pages");
        let request = self.client.get(&url).query(&[
            ("start", start.to_string()),
            ("limit", CHILD_PAGE_LIMIT.to_string()),
        ]);
        self.read_json("GET", &url, request)
    }
}

fn check_status(method: &'static str, url: &str, response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
    Err(ClientError::Status {
        method,
        url: url.to_string(),
        status: status.as_u16(),
        body,
    })
}

impl WikiClient for HttpClient {
    fn get_content_by_id(&self, id: &str, query: &ContentQuery) -> ClientResult<Content> {
        let url = self.content_url(id);
        debug!(page_id = id, "fetching content");
        let request = self.client.get(&url).query(&query.to_params());
        self.read_json("GET", &url, request)
    }

    fn get_child_pages(&self, id: &str) -> ClientResult<ContentList> {
        let mut listing = self.list_page(id, 0)?;
        let mut next = listing.has_next();
        while next {
            let page = self.list_page(id, listing.results.len())?;
            // A server that advertises more but returns nothing would loop forever.
            if page.results.is_empty() {
                break;
            }
            next = page.has_next();
            listing.results.extend(page.results);
        }
        listing.size = listing.results.len();
        listing.links.next = None;
        Ok(listing)
    }

    fn create_content(&self, content: &Content) -> ClientResult<Content> {
        let url = format!("{}/content", self.base_url);
        debug!(title = %content.title, space = %content.space.key, "creating content");
        trace!(?content, "create payload");
        let request = self.client.post(&url).json(content);
        self.read_json("POST", &url, request)
    }

    fn delete_content(&self, id: &str) -> ClientResult<()> {
        let url = self.content_url(id);
        debug!(page_id = id, "deleting content");
        let request = self.authed(self.client.delete(&url));
        check_status("DELETE", &url, request.send()?)?;
        Ok(())
    }
}
