use url::Url;

use crate::core::{NewsClient, NewsError};
use crate::provider::model::{RawArticle, RawResponse};
use crate::provider::wire;

/// Upstream `display` parameter bounds.
const MAX_DISPLAY: u32 = 100;

fn build_url(client: &NewsClient, phrase: &str, cap: u32) -> Url {
    let mut url = client.base_search().clone();
    url.query_pairs_mut()
        .append_pair("query", phrase)
        .append_pair("display", &cap.clamp(1, MAX_DISPLAY).to_string())
        .append_pair("start", "1")
        .append_pair("sort", "date");
    url
}

async fn send(client: &NewsClient, phrase: &str, cap: u32) -> Result<reqwest::Response, NewsError> {
    let (id, secret) = client.credentials().ok_or(NewsError::MissingCredentials)?;
    let req = client
        .http()
        .get(build_url(client, phrase, cap))
        .header("X-Naver-Client-Id", id)
        .header("X-Naver-Client-Secret", secret)
        .header("accept", "application/json");
    client.send_with_retry(req, None).await
}

pub(super) async fn fetch_news(
    client: &NewsClient,
    phrase: &str,
    cap: u32,
) -> Result<Vec<RawArticle>, NewsError> {
    let resp = send(client, phrase, cap).await?;
    if !resp.status().is_success() {
        return Err(NewsError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await.map_err(NewsError::Http)?;
    let envelope: wire::SearchEnvelope = serde_json::from_str(&body)?;

    let articles = envelope
        .items
        .unwrap_or_default()
        .into_iter()
        .map(adapt_item)
        .collect();
    Ok(articles)
}

/// Raw status + body, bypassing the parse step. Non-2xx statuses are data
/// here, not errors.
pub(super) async fn fetch_raw(
    client: &NewsClient,
    phrase: &str,
    cap: u32,
) -> Result<RawResponse, NewsError> {
    let resp = send(client, phrase, cap).await?;
    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(NewsError::Http)?;
    Ok(RawResponse { status, body })
}

/// Map a wire item to a raw article. The portal link wins over the original
/// publisher link; validity filtering happens later, during the merge fold.
fn adapt_item(it: wire::WireItem) -> RawArticle {
    let link = [it.link, it.originallink]
        .into_iter()
        .flatten()
        .find(|l| !l.trim().is_empty())
        .unwrap_or_default();
    RawArticle {
        title: it.title.unwrap_or_default(),
        link,
        published_at: it
            .pub_date
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| "-".to_string()),
    }
}
