use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    #[allow(dead_code)]
    #[serde(rename = "lastBuildDate")]
    pub(crate) last_build_date: Option<String>,
    #[allow(dead_code)]
    pub(crate) total: Option<i64>,
    #[allow(dead_code)]
    pub(crate) start: Option<i64>,
    #[allow(dead_code)]
    pub(crate) display: Option<i64>,
    pub(crate) items: Option<Vec<WireItem>>,
}

#[derive(Deserialize)]
pub(crate) struct WireItem {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) originallink: Option<String>,
    #[serde(default)]
    pub(crate) link: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(rename = "pubDate")]
    #[serde(default)]
    pub(crate) pub_date: Option<String>,
}
