//! NID cookie negotiation for Google Trends endpoints.

use crate::error::TrendsError;
use crate::internal::net;
use reqwest::header::SET_COOKIE;
use std::time::Duration;

impl super::TrendsClient {
    /// Negotiates the provider session once per handle and its clones. Later calls are no-ops.
    ///
    /// `timeout` bounds the session request on top of the client-wide timeout.
    pub(crate) async fn ensure_session(&self, timeout: Option<Duration>) -> Result<(), TrendsError> {
        if self.state.read().await.established {
            return Ok(());
        }

        // Concurrent callers wait here; the first one negotiates for all of them.
        let _guard = self.session_lock.lock().await;
        if self.state.read().await.established {
            return Ok(());
        }

        let mut url = self.cookie_url.clone();
        if let Some(region) = self.region() {
            url.query_pairs_mut().append_pair("geo", region);
        }

        let mut req = self.http.get(url.clone());
        if let Some(t) = timeout {
            req = req.timeout(t);
        }
        // The session page is HTML; only the status matters.
        let resp = net::check_status(req.send().await?, &url).await?;

        // The cookie store keeps the cookie for later requests; we only remember it was handed out.
        let nid = resp
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(nid_from_set_cookie);

        #[cfg(feature = "tracing")]
        {
            match &nid {
                Some(_) => tracing::debug!(%url, "provider session established with NID cookie"),
                None => tracing::debug!(%url, "provider session established without NID cookie"),
            }
        }

        let mut state = self.state.write().await;
        state.established = true;
        state.nid = nid;
        Ok(())
    }

    /// The `NID` cookie value handed out during session negotiation, if any.
    pub async fn session_cookie(&self) -> Option<String> {
        self.state.read().await.nid.clone()
    }
}

fn nid_from_set_cookie(header: &str) -> Option<String> {
    let pair = header.split(';').next()?.trim();
    let value = pair.strip_prefix("NID=")?;
    (!value.is_empty()).then(|| value.to_string())
}
