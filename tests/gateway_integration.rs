//! Integration tests for the HTTP gateway and the view loaders.
//!
//! Most tests run against a loopback responder that records every request
//! line and answers with a canned status and body. The `live_*` tests talk
//! to a real service and are `#[ignore]`d.
//!
//! Run the live tests with:
//! ```bash
//! PRESYO_API_URL=http://localhost:8000/api/v1 cargo test --test gateway_integration -- --ignored
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use bantay_presyo::prelude::*;

type Route = fn(&str) -> (u16, String);

/// Loopback HTTP responder.
struct Responder {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Responder {
    async fn start(route: Route) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let head = String::from_utf8_lossy(&buf);
                    let request_line = head.lines().next().unwrap_or_default().to_string();
                    let target = request_line.split(' ').nth(1).unwrap_or_default().to_string();
                    log.lock().unwrap().push(request_line);

                    let (status, body) = route(&target);
                    let content_type = if target.contains("/export") {
                        "text/csv"
                    } else {
                        "application/json"
                    };
                    let response = format!(
                        "HTTP/1.1 {status} X\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}/api/v1"),
            requests,
        }
    }

    fn client(&self) -> PresyoClient {
        PresyoClient::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

const CATALOG: &str = r#"[
    {"id": 1, "name": "Rice (Well-Milled)", "category": "Rice"},
    {"id": 2, "name": "Galunggong", "category": "Fish"}
]"#;

const HISTORY: &str = r#"[
    {"report_date": "2025-01-03", "price_prevailing": "182.00"},
    {"report_date": "2025-01-01", "price_prevailing": "178.50"},
    {"report_date": "2025-01-02", "price_prevailing": null, "price_average": 180}
]"#;

fn service(target: &str) -> (u16, String) {
    let path = target.split('?').next().unwrap_or_default();
    match path {
        "/api/v1/commodities" => (200, CATALOG.to_string()),
        "/api/v1/markets" => (200, r#"[{"id": "m1", "name": "Navotas", "region": "NCR"}]"#.to_string()),
        "/api/v1/trends/history/2" => (200, HISTORY.to_string()),
        "/api/v1/stats/dashboard" => (
            200,
            r#"{"commodities": {"count": 2, "change": 0}, "markets": {"count": 1, "change": 0}, "prices": {"count": 3, "change": 0}}"#
                .to_string(),
        ),
        "/api/v1/prices/daily" => (200, daily_prices(12)),
        "/api/v1/prices/export" => (200, "Commodity,Category,Market,Region,Low,High,Prevailing,Date\n".to_string()),
        p if p.starts_with("/api/v1/commodities/search/") => (200, CATALOG.to_string()),
        _ => (404, r#"{"detail": "Not Found"}"#.to_string()),
    }
}

fn daily_prices(n: usize) -> String {
    let rows: Vec<serde_json::Value> = (1..=n)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "commodity": {"id": i, "name": format!("Item {i}"), "category": "Fish"},
                "market": {"id": "m1", "name": "Navotas"},
                "price_prevailing": format!("{i}.00"),
                "report_date": "2025-12-22"
            })
        })
        .collect();
    serde_json::to_string(&rows).unwrap()
}

// ─── Gateway ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_category_all_is_no_filter() {
    let server = Responder::start(service).await;
    let client = server.client();

    client.commodities().list(Some("all")).await.unwrap();
    client.commodities().list(Some("Fish")).await.unwrap();
    client.commodities().list(None).await.unwrap();

    assert_eq!(
        server.requests(),
        vec![
            "GET /api/v1/commodities HTTP/1.1",
            "GET /api/v1/commodities?category=Fish HTTP/1.1",
            "GET /api/v1/commodities HTTP/1.1",
        ]
    );
}

#[tokio::test]
async fn test_path_and_query_values_are_encoded() {
    let server = Responder::start(service).await;
    let client = server.client();

    client.commodities().search("pork kasim").await.unwrap();
    let day = chrono::NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
    client.prices().daily(Some(day)).await.unwrap();
    client.prices().latest(20, 5000).await.unwrap();

    assert_eq!(
        server.requests(),
        vec![
            "GET /api/v1/commodities/search/pork%20kasim HTTP/1.1",
            "GET /api/v1/prices/daily?report_date=2025-12-22 HTTP/1.1",
            "GET /api/v1/prices/daily?skip=20&limit=1000 HTTP/1.1",
        ]
    );
}

#[tokio::test]
async fn test_history_limit_follows_date_range() {
    let server = Responder::start(service).await;
    let client = server.client();
    let id = CommodityId::from(2u64);

    for range in [DateRange::Day, DateRange::Month, DateRange::Year] {
        client.price_history().get(&id, range).await.unwrap();
    }

    assert_eq!(
        server.requests(),
        vec![
            "GET /api/v1/trends/history/2?limit=1 HTTP/1.1",
            "GET /api/v1/trends/history/2?limit=30 HTTP/1.1",
            "GET /api/v1/trends/history/2?limit=365 HTTP/1.1",
        ]
    );
}

#[tokio::test]
async fn test_non_success_status_names_the_resource() {
    let server = Responder::start(|_| (503, "maintenance".to_string())).await;
    let client = server.client();

    let err = client.markets().list().await.unwrap_err();
    match &err {
        PresyoError::Fetch(e) => {
            assert_eq!(e.resource, Resource::Markets);
            assert_eq!(e.status(), Some(503));
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Failed to fetch markets: Server error 503: maintenance");
}

#[tokio::test]
async fn test_not_found_and_bad_json() {
    let server = Responder::start(|target| {
        if target.contains("/stats/") {
            (200, "{not json".to_string())
        } else {
            (404, "missing".to_string())
        }
    })
    .await;
    let client = server.client();

    let err = client.commodities().get(&CommodityId::from("nope")).await.unwrap_err();
    assert!(matches!(
        err,
        PresyoError::Fetch(RemoteFetchError { resource: Resource::Commodity, source: HttpError::NotFound(_) })
    ));

    let err = client.stats().dashboard().await.unwrap_err();
    assert!(matches!(
        err,
        PresyoError::Fetch(RemoteFetchError { resource: Resource::DashboardStats, source: HttpError::Reqwest(_) })
    ));
}

#[tokio::test]
async fn test_stats_and_export() {
    let server = Responder::start(service).await;
    let client = server.client();

    let stats = client.stats().dashboard().await.unwrap();
    assert_eq!(stats.commodities.count, 2);
    assert_eq!(stats.prices.count, 3);

    let csv = client.prices().export_csv(None).await.unwrap();
    assert!(csv.starts_with("Commodity,Category,Market,Region"));
}

// ─── Resolver + series ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_fish_resolves_by_category() {
    let server = Responder::start(service).await;
    let resolution = server.client().commodities().resolve("fish").await.unwrap();
    assert_eq!(resolution.id(), Some(&CommodityId::from(2u64)));
    assert_eq!(resolution.name(), Some("Galunggong"));
}

#[tokio::test]
async fn test_history_becomes_ascending_series() {
    let server = Responder::start(service).await;
    let client = server.client();
    let mut rng = StdRng::seed_from_u64(11);

    let series = client
        .price_history()
        .series(&CommodityId::from(2u64), DateRange::Week, &mut rng)
        .await
        .unwrap();

    let labels: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(labels, vec!["Jan 1", "Jan 2", "Jan 3"]);
    assert_eq!(series[1].price.to_string(), "180");
    assert!(series.iter().all(|p| p.volume.is_synthetic()));
}

// ─── View loaders ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_chart_loader_ready() {
    init_tracing();
    let server = Responder::start(service).await;
    let loader = ChartLoader::new();

    let load = loader
        .load(&server.client(), &ChartRequest::new("galunggong", DateRange::Month))
        .await
        .expect("load should be current");

    match load {
        ChartLoad::Ready { commodity_name, series, summary, .. } => {
            assert_eq!(commodity_name, "Galunggong");
            assert_eq!(series.len(), 3);
            assert_eq!(summary.latest.to_string(), "182.00");
        }
        other => panic!("expected ready, got {other:?}"),
    }
}

#[tokio::test]
async fn test_chart_loader_unresolved_awaits_data() {
    let server = Responder::start(service).await;
    let load = ChartLoader::new()
        .load(&server.client(), &ChartRequest::new("durian", DateRange::Week))
        .await;
    assert_eq!(load, Some(ChartLoad::AwaitingData));
}

#[tokio::test]
async fn test_chart_loader_failure_is_a_state() {
    init_tracing();
    let server = Responder::start(|_| (500, "boom".to_string())).await;
    let load = ChartLoader::new()
        .load(&server.client(), &ChartRequest::new("rice", DateRange::Week))
        .await;
    match load {
        Some(ChartLoad::Failed { message }) => assert!(message.contains("commodities")),
        other => panic!("expected failed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_table_loader_pages_locally() {
    let server = Responder::start(service).await;
    let client = server.client();
    let loader = TableLoader::new();

    let data = loader.load(&client, None).await.unwrap();
    assert!(!data.failed);

    let query = TableQuery::new(DASHBOARD_PAGE_SIZE);
    let first = data.page(&query);
    assert_eq!(first.rows.len(), 8);
    assert_eq!(first.total_pages, 2);
    let second = data.page(&query.with_page(2));
    assert_eq!(second.rows.len(), 4);
    assert_eq!(second.rows[0].commodity, "Item 9");

    // paging never refetches
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_table_loader_failure_shows_empty_table() {
    init_tracing();
    let server = Responder::start(|_| (502, "bad gateway".to_string())).await;
    let data = TableLoader::new().load(&server.client(), None).await.unwrap();
    assert!(data.failed);
    let page = data.page(&TableQuery::default());
    assert!(page.rows.is_empty());
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_superseded_chart_load_is_dropped() {
    let server = Responder::start(service).await;
    let client = server.client();
    let loader = ChartLoader::new();

    let request = ChartRequest::new("fish", DateRange::Week);
    let (stale, fresh) = tokio::join!(
        loader.load(&client, &request),
        async {
            tokio::task::yield_now().await;
            loader.load(&client, &ChartRequest::new("rice", DateRange::Week)).await
        }
    );
    assert_eq!(stale, None);
    assert!(fresh.is_some());
}

// ─── Live service ────────────────────────────────────────────────────────────

fn live_client() -> PresyoClient {
    dotenvy::dotenv().ok();
    PresyoClientBuilder::from_env().build().expect("client should build")
}

#[tokio::test]
#[ignore]
async fn live_catalog_and_resolution() {
    init_tracing();
    let client = live_client();
    let catalog = client.commodities().list(None).await.unwrap();
    let all = resolve("all", &catalog);
    assert_eq!(all.is_resolved(), !catalog.is_empty());
}

#[tokio::test]
#[ignore]
async fn live_daily_prices_project() {
    init_tracing();
    let client = live_client();
    let records = client.prices().daily(None).await.unwrap();
    let page = project(&records, &TableQuery::new(MARKETS_PAGE_SIZE));
    assert!(page.total_pages >= 1);
    assert!(page.rows.len() <= MARKETS_PAGE_SIZE);
}
