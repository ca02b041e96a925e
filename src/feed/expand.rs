//! Query expansion: preset keys, synonym tables, suffix modifiers.

/// Maximum number of search phrases one logical request may fan out to.
pub(crate) const MAX_PHRASES: usize = 8;

/// Suffix modifiers in priority order. The plain form always comes first;
/// non-empty suffixes are joined with a single space.
const SUFFIXES: &[&str] = &["", "시세", "전망", "뉴스"];

/// Fixed topic list for the economy bundle. Not a synonym composition, but
/// still bounded by [`MAX_PHRASES`].
const ECONOMY_TOPICS: &[&str] = &[
    "경제",
    "금리",
    "환율",
    "증시",
    "코스피",
    "나스닥",
    "연준",
    "물가",
];

/// A tracked instrument with a curated synonym list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsKey {
    /// 삼성전자 (005930)
    Samsung,
    /// SK하이닉스 (000660)
    SkHynix,
    /// LG에너지솔루션 (373220)
    Lges,
    /// Apple (AAPL)
    Apple,
    /// NVIDIA (NVDA)
    Nvidia,
    /// 비트코인 (BTC)
    Bitcoin,
    /// 이더리움 (ETH)
    Ethereum,
    /// 리플 (XRP)
    Ripple,
    /// 도지코인 (DOGE)
    Doge,
    /// 솔라나 (SOL)
    Solana,
}

impl NewsKey {
    /// Stable name used in cache keys and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Samsung => "SAMSUNG",
            Self::SkHynix => "SKHYNIX",
            Self::Lges => "LGES",
            Self::Apple => "APPLE",
            Self::Nvidia => "NVIDIA",
            Self::Bitcoin => "BITCOIN",
            Self::Ethereum => "ETHEREUM",
            Self::Ripple => "RIPPLE",
            Self::Doge => "DOGE",
            Self::Solana => "SOLANA",
        }
    }

    /// Base synonyms in priority order; the first entry is the primary query.
    const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Samsung => &["삼성전자", "Samsung Electronics"],
            Self::SkHynix => &["SK하이닉스", "SK Hynix"],
            Self::Lges => &["LG에너지솔루션", "LG Energy Solution"],
            Self::Apple => &["Apple", "애플", "AAPL"],
            Self::Nvidia => &["NVIDIA", "엔비디아", "NVDA"],
            Self::Bitcoin => &["비트코인", "BTC", "BTC/KRW"],
            Self::Ethereum => &["이더리움", "ETH", "ETH/KRW"],
            Self::Ripple => &["리플", "XRP"],
            Self::Doge => &["도지코인", "DOGE"],
            Self::Solana => &["솔라나", "SOL"],
        }
    }
}

/// Expand a preset key into at most [`MAX_PHRASES`] unique phrases.
pub(crate) fn expand_key(key: NewsKey) -> Vec<String> {
    compose(key.synonyms())
}

/// Expand free text: trimmed, upper-cased, single-synonym fallback with the
/// same suffix composition. Blank input yields no phrases at all.
pub(crate) fn expand_free_text(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let synonym = trimmed.to_uppercase();
    compose(&[synonym.as_str()])
}

pub(crate) fn economy_phrases() -> Vec<String> {
    ECONOMY_TOPICS.iter().map(|t| (*t).to_string()).collect()
}

/// All plain synonyms first, then each suffix across the synonyms, skipping
/// exact duplicates, stopping hard at [`MAX_PHRASES`].
fn compose(synonyms: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    'suffixes: for suffix in SUFFIXES {
        for syn in synonyms {
            let phrase = if suffix.is_empty() {
                (*syn).to_string()
            } else {
                format!("{syn} {suffix}")
            };
            if out.contains(&phrase) {
                continue;
            }
            out.push(phrase);
            if out.len() >= MAX_PHRASES {
                break 'suffixes;
            }
        }
    }
    out
}

/// Map a chart symbol or listing code to a preset key.
///
/// Pair notations keep only the base asset (`ETH/KRW` → `ETH`). The
/// `RBAQ`-prefixed codes are the broker's overseas listing identifiers.
pub(crate) fn key_for_symbol(symbol: &str) -> Option<NewsKey> {
    let mut s = symbol.trim().to_uppercase();
    if let Some(slash) = s.find('/')
        && slash > 0
    {
        s.truncate(slash);
    }
    match s.as_str() {
        "005930" => Some(NewsKey::Samsung),
        "000660" => Some(NewsKey::SkHynix),
        "373220" => Some(NewsKey::Lges),
        "RBAQAAPL" | "AAPL" => Some(NewsKey::Apple),
        "RBAQNVDA" | "NVDA" => Some(NewsKey::Nvidia),
        "BTC" => Some(NewsKey::Bitcoin),
        "ETH" => Some(NewsKey::Ethereum),
        "XRP" => Some(NewsKey::Ripple),
        "DOGE" => Some(NewsKey::Doge),
        "SOL" => Some(NewsKey::Solana),
        _ => None,
    }
}
