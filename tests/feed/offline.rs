use std::time::Duration;

use httpmock::Method::GET;
use ratenews_rs::{NewsError, NewsFeed, NewsKey};

use crate::common::{
    SEARCH_PATH, builder_for, empty_body, naver_body, naver_item, no_retry_client, setup_server,
    uncached_client,
};

const PUB: &str = "Mon, 08 Sep 2025 16:20:00 +0900";

#[tokio::test]
async fn preset_key_fans_out_dedups_and_renumbers() {
    let server = setup_server();

    // Specific phrase mocks first; the catch-all below answers the rest.
    let first_phrase = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "비트코인")
            .query_param("display", "3")
            .query_param("start", "1")
            .query_param("sort", "date");
        then.status(200)
            .header("content-type", "application/json")
            .body(naver_body(&[
                naver_item(
                    "<b>비트코인</b> 급등",
                    "https://news.example.com/a?utm_source=naver",
                    PUB,
                ),
                naver_item("코인 시장 동향", "https://news.example.com/b", PUB),
                naver_item("채굴 난이도 상승", "https://news.example.com/c", PUB),
            ]));
    });
    let second_phrase = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "BTC");
        then.status(200)
            .header("content-type", "application/json")
            .body(naver_body(&[
                // Same article as above, differing only by tracking params.
                naver_item(
                    "비트코인 급등 (재송)",
                    "https://news.example.com/a?utm_source=daum",
                    PUB,
                ),
                naver_item("ETF 자금 유입", "https://news.example.com/d", PUB),
            ]));
    });
    let rest = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_body());
    });

    let feed = NewsFeed::new(&uncached_client(&server));
    let items = feed.by_key(NewsKey::Bitcoin, 10).await;

    first_phrase.assert();
    second_phrase.assert();
    // 8 expanded phrases, 2 answered above.
    rest.assert_hits(6);

    assert_eq!(items.len(), 4);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.no as usize, i + 1);
        assert!(!item.title.is_empty());
        assert!(!item.link.is_empty());
    }
    // Markup stripped, first occurrence of the duplicate link wins.
    assert_eq!(items[0].title, "비트코인 급등");
    assert_eq!(items[0].link, "https://news.example.com/a?utm_source=naver");
    assert!(
        !items
            .iter()
            .any(|i| i.link.contains("utm_source=daum"))
    );
    assert_eq!(items[0].published_at, PUB);
}

#[tokio::test]
async fn output_is_capped_in_first_seen_order() {
    let server = setup_server();

    let first_phrase = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "경제");
        then.status(200)
            .header("content-type", "application/json")
            .body(naver_body(&[
                naver_item("첫 번째", "https://news.example.com/1", PUB),
                naver_item("두 번째", "https://news.example.com/2", PUB),
                naver_item("세 번째", "https://news.example.com/3", PUB),
            ]));
    });
    let rest = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_body());
    });

    let feed = NewsFeed::new(&uncached_client(&server));
    let items = feed.economy(2).await;

    first_phrase.assert();
    // Three unique items stay under the 2x ceiling, so all 8 phrases run.
    rest.assert_hits(7);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "첫 번째");
    assert_eq!(items[1].title, "두 번째");
    assert_eq!(items[0].no, 1);
    assert_eq!(items[1].no, 2);
}

#[tokio::test]
async fn early_stop_skips_remaining_phrases() {
    let server = setup_server();

    // limit 2 -> ceiling 4; the first phrase alone reaches it.
    let first_phrase = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "경제");
        then.status(200)
            .header("content-type", "application/json")
            .body(naver_body(&[
                naver_item("a", "https://news.example.com/1", PUB),
                naver_item("b", "https://news.example.com/2", PUB),
                naver_item("c", "https://news.example.com/3", PUB),
                naver_item("d", "https://news.example.com/4", PUB),
            ]));
    });
    let rest = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_body());
    });

    let feed = NewsFeed::new(&uncached_client(&server));
    let items = feed.economy(2).await;

    first_phrase.assert();
    rest.assert_hits(0);
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn phrase_failure_is_tolerated() {
    let server = setup_server();

    let failing = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "경제");
        then.status(500).body("boom");
    });
    let working = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "금리");
        then.status(200)
            .header("content-type", "application/json")
            .body(naver_body(&[naver_item(
                "기준금리 동결",
                "https://news.example.com/rate",
                PUB,
            )]));
    });
    let rest = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_body());
    });

    let feed = NewsFeed::new(&no_retry_client(&server));
    let items = feed.economy(5).await;

    failing.assert();
    working.assert();
    rest.assert_hits(6);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "기준금리 동결");
    assert_eq!(items[0].no, 1);
}

#[tokio::test]
async fn total_failure_yields_an_empty_list_not_an_error() {
    let server = setup_server();
    let all_down = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(502).body("bad gateway");
    });

    let feed = NewsFeed::new(&no_retry_client(&server));
    let items = feed.free_text("XYZ123", 10).await;

    // Free text expands to the identifier plus its suffix variants.
    all_down.assert_hits(4);
    assert!(items.is_empty());
}

#[tokio::test]
async fn unknown_free_text_with_no_hits_is_empty() {
    let server = setup_server();
    let all_empty = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_body());
    });

    let feed = NewsFeed::new(&uncached_client(&server));
    let items = feed.free_text("XYZ123", 10).await;

    all_empty.assert_hits(4);
    assert!(items.is_empty());
}

#[tokio::test]
async fn blank_identifier_short_circuits_without_upstream_calls() {
    let server = setup_server();
    let any = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_body());
    });

    let feed = NewsFeed::new(&uncached_client(&server));
    assert!(feed.free_text("   ", 10).await.is_empty());
    assert!(feed.for_symbol("", 10).await.is_empty());

    any.assert_hits(0);
}

#[tokio::test]
async fn invalid_items_are_dropped_and_do_not_count_toward_the_ceiling() {
    let server = setup_server();

    // limit 1 -> ceiling 2. The first phrase returns three invalid items;
    // were they counted, the second phrase would never be queried.
    let first_phrase = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "경제");
        then.status(200)
            .header("content-type", "application/json")
            .body(naver_body(&[
                naver_item("<b></b>", "https://news.example.com/markup-only", PUB),
                naver_item("", "https://news.example.com/blank-title", PUB),
                naver_item("제목은 있는데 링크가 없음", "", PUB),
            ]));
    });
    let second_phrase = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "금리");
        then.status(200)
            .header("content-type", "application/json")
            .body(naver_body(&[naver_item(
                "유효한 기사",
                "https://news.example.com/ok",
                PUB,
            )]));
    });
    let rest = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_body());
    });

    let feed = NewsFeed::new(&uncached_client(&server));
    let items = feed.economy(1).await;

    first_phrase.assert();
    second_phrase.assert();
    let _ = rest;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "유효한 기사");
    assert_eq!(items[0].no, 1);
}

#[tokio::test]
async fn preset_results_are_cached() {
    let server = setup_server();
    let upstream = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(naver_body(&[naver_item(
                "캐시 대상",
                "https://news.example.com/cached",
                PUB,
            )]));
    });

    let client = builder_for(&server).build().unwrap();
    let feed = NewsFeed::new(&client);

    let first = feed.by_key(NewsKey::Bitcoin, 3).await;
    let second = feed.by_key(NewsKey::Bitcoin, 3).await;

    // 8 phrases on the first call; the second is served from cache.
    upstream.assert_hits(8);
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[tokio::test]
async fn cache_expires_after_ttl() {
    let server = setup_server();
    let upstream = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(naver_body(&[naver_item(
                "뉴스",
                "https://news.example.com/n",
                PUB,
            )]));
    });

    let client = builder_for(&server)
        .cache_ttl(Duration::from_millis(50))
        .build()
        .unwrap();
    let feed = NewsFeed::new(&client);

    feed.economy(3).await;
    tokio::time::sleep(Duration::from_millis(120)).await;
    feed.economy(3).await;

    // Both calls recomputed: 8 phrases each.
    upstream.assert_hits(16);
}

#[tokio::test]
async fn free_text_is_never_cached() {
    let server = setup_server();
    let upstream = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_body());
    });

    let client = builder_for(&server).build().unwrap();
    let feed = NewsFeed::new(&client);

    feed.free_text("XYZ123", 5).await;
    feed.free_text("XYZ123", 5).await;

    upstream.assert_hits(8);
}

#[tokio::test]
async fn for_symbol_maps_codes_to_presets() {
    let server = setup_server();
    let samsung = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "삼성전자");
        then.status(200)
            .header("content-type", "application/json")
            .body(naver_body(&[naver_item(
                "삼성전자 실적",
                "https://news.example.com/samsung",
                PUB,
            )]));
    });
    let rest = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_body());
    });

    let feed = NewsFeed::new(&uncached_client(&server));
    let items = feed.for_symbol("005930", 5).await;

    samsung.assert();
    let _ = rest;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "삼성전자 실적");
}

#[tokio::test]
async fn raw_phrase_surfaces_status_and_body() {
    let server = setup_server();
    let down = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("query", "BTC");
        then.status(503).body("upstream down");
    });

    let feed = NewsFeed::new(&no_retry_client(&server));
    let raw = feed.raw_phrase("BTC", 5).await.unwrap();

    down.assert();
    assert_eq!(raw.status, 503);
    assert_eq!(raw.body, "upstream down");
}

#[tokio::test]
async fn missing_credentials_mean_empty_results_and_no_calls() {
    let server = setup_server();
    let any = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body(empty_body());
    });

    let client = ratenews_rs::NewsClient::builder()
        .base_search(
            url::Url::parse(&format!("{}{}", server.base_url(), SEARCH_PATH)).unwrap(),
        )
        .no_cache()
        .build()
        .unwrap();
    let feed = NewsFeed::new(&client);

    let items = feed.by_key(NewsKey::Apple, 10).await;
    assert!(items.is_empty());
    any.assert_hits(0);

    let err = feed.raw_phrase("AAPL", 5).await.unwrap_err();
    assert!(matches!(err, NewsError::MissingCredentials));
}
