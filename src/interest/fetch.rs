use std::time::Duration;

use url::Url;

use crate::client::TrendsClient;
use crate::error::TrendsError;
use crate::interest::wire::{
    ComparisonItem, ExploreEnvelope, ExploreRequest, MultilineEnvelope, TimelineNode, Widget,
};
use crate::internal::net;
use crate::query::Query;

const TIMESERIES_WIDGET: &str = "TIMESERIES";

/// Token and request of the interest-over-time widget, as handed out by the explore API.
#[derive(Debug)]
pub(crate) struct TimeseriesWidget {
    pub(crate) token: String,
    pub(crate) request: serde_json::Value,
}

pub(crate) fn explore_url(client: &TrendsClient, query: &Query) -> Result<Url, TrendsError> {
    let req = ExploreRequest {
        comparison_item: query
            .keywords()
            .iter()
            .map(|k| ComparisonItem {
                keyword: k,
                time: query.timeframe().as_str(),
                geo: query.geo().as_str(),
            })
            .collect(),
        category: query.category(),
        property: query.property().as_str(),
    };

    let mut url = client.explore_url().clone();
    url.query_pairs_mut()
        .append_pair("hl", client.locale())
        .append_pair("tz", &client.tz_offset().to_string())
        .append_pair("req", &serde_json::to_string(&req)?);
    Ok(url)
}

pub(crate) fn multiline_url(
    client: &TrendsClient,
    widget: &TimeseriesWidget,
) -> Result<Url, TrendsError> {
    let mut url = client.multiline_url().clone();
    url.query_pairs_mut()
        .append_pair("req", &serde_json::to_string(&widget.request)?)
        .append_pair("token", &widget.token)
        .append_pair("tz", &client.tz_offset().to_string());
    Ok(url)
}

/// Step 1: exchange the comparison payload for the TIMESERIES widget token.
pub(crate) async fn fetch_widget(
    client: &TrendsClient,
    query: &Query,
    fixture_key: &str,
    timeout: Option<Duration>,
) -> Result<TimeseriesWidget, TrendsError> {
    let url = explore_url(client, query)?;

    let mut req = client.http().post(url.clone());
    if let Some(t) = timeout {
        req = req.timeout(t);
    }
    let resp = net::check_response(req.send().await?, &url).await?;
    let body = net::get_text(resp, "explore", fixture_key, "json").await?;

    decode_widget(&body)
}

/// Step 2: fetch the timeline rows for the widget.
pub(crate) async fn fetch_timeline(
    client: &TrendsClient,
    widget: &TimeseriesWidget,
    fixture_key: &str,
    timeout: Option<Duration>,
) -> Result<Vec<TimelineNode>, TrendsError> {
    let url = multiline_url(client, widget)?;

    let mut req = client.http().get(url.clone());
    if let Some(t) = timeout {
        req = req.timeout(t);
    }
    let resp = net::check_response(req.send().await?, &url).await?;
    let body = net::get_text(resp, "multiline", fixture_key, "json").await?;

    decode_timeline(&body)
}

pub(crate) fn decode_widget(body: &str) -> Result<TimeseriesWidget, TrendsError> {
    let env: ExploreEnvelope = serde_json::from_str(net::strip_xssi(body))
        .map_err(|e| TrendsError::Data(format!("explore json parse error: {e}")))?;

    let Widget { token, request, .. } = env
        .widgets
        .into_iter()
        .find(|w| w.id.as_deref() == Some(TIMESERIES_WIDGET))
        .ok_or_else(|| TrendsError::Data("explore response has no TIMESERIES widget".into()))?;

    #[cfg(feature = "tracing")]
    tracing::debug!("found TIMESERIES widget");

    Ok(TimeseriesWidget {
        token: token.ok_or_else(|| TrendsError::Data("TIMESERIES widget has no token".into()))?,
        request: request
            .ok_or_else(|| TrendsError::Data("TIMESERIES widget has no request".into()))?,
    })
}

pub(crate) fn decode_timeline(body: &str) -> Result<Vec<TimelineNode>, TrendsError> {
    let env: MultilineEnvelope = serde_json::from_str(net::strip_xssi(body))
        .map_err(|e| TrendsError::Data(format!("multiline json parse error: {e}")))?;

    let node = env
        .default
        .ok_or_else(|| TrendsError::Data("missing default".into()))?;
    Ok(node.timeline_data)
}
