//! End-to-end pipeline tests
//!
//! These tests use wiremock to serve a small fake catalogue and run the full
//! orchestrator against it in both single and multi mode.

use catalogue_bench::config::{BenchConfig, EmptyPagePolicy};
use catalogue_bench::crawler::{Orchestrator, RunMode, RunOutput};
use catalogue_bench::EnrichedItem;
use std::collections::HashSet;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIST_FIXTURE: &str = include_str!("../fixtures/list_page.html");
const DETAIL_FIXTURE: &str = include_str!("../fixtures/detail_page.html");

/// Creates a test configuration pointing at the mock server's catalogue
fn create_test_config(server: &MockServer, pages: u32, workers: usize) -> BenchConfig {
    let mut config = BenchConfig::default();
    config.catalogue.base_url = format!("{}/catalogue/", server.uri());
    config.catalogue.pages = pages;
    config.workers.count = workers;
    config.http.user_agent = "TestBench/1.0".to_string();
    config.http.request_timeout_secs = 5;
    config.http.connect_timeout_secs = 2;
    config
}

/// Runs the orchestrator off the async test thread
async fn run(config: BenchConfig, mode: RunMode) -> RunOutput {
    tokio::task::spawn_blocking(move || Orchestrator::new(config, mode).run())
        .await
        .expect("Orchestrator thread panicked")
        .expect("Run failed")
}

fn slug(page: u32, item: u32) -> String {
    format!("book-{}-{}_{}", page, item, page * 100 + item)
}

fn list_page(page: u32, items: u32) -> String {
    let nodes: String = (1..=items)
        .map(|item| {
            format!(
                r#"<li><article class="product_pod">
                    <h3><a href="{slug}/index.html" title="Book {page}.{item}">Book {page}.{item}</a></h3>
                    <div class="product_price"><p class="price_color">£{page}.{item:02}</p></div>
                </article></li>"#,
                slug = slug(page, item),
                page = page,
                item = item
            )
        })
        .collect();
    format!(
        r#"<html><body><section><ol class="row">{}</ol></section></body></html>"#,
        nodes
    )
}

fn detail_page(page: u32, item: u32) -> String {
    format!(
        r#"<html><body><article class="product_page">
            <div class="product_main">
                <h1>Book {page}.{item}</h1>
                <p class="price_color">£{page}.{item:02}</p>
                <p class="instock availability"><i class="icon-ok"></i> In stock ({item} available) </p>
            </div>
            <div id="product_description" class="sub-header"><h2>Product Description</h2></div>
            <p>Description of book {page}.{item}</p>
        </article></body></html>"#,
        page = page,
        item = item
    )
}

/// Mounts `pages` list pages with `items` items each, plus every detail page
async fn mount_catalogue(server: &MockServer, pages: u32, items: u32) {
    for page in 1..=pages {
        Mock::given(method("GET"))
            .and(path(format!("/catalogue/page-{}.html", page)))
            .respond_with(ResponseTemplate::new(200).set_body_string(list_page(page, items)))
            .mount(server)
            .await;

        for item in 1..=items {
            Mock::given(method("GET"))
                .and(path(format!("/catalogue/{}/index.html", slug(page, item))))
                .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(page, item)))
                .mount(server)
                .await;
        }
    }
}

fn as_set(items: &[EnrichedItem]) -> HashSet<EnrichedItem> {
    items.iter().cloned().collect()
}

#[tokio::test]
async fn test_two_pages_three_items_end_to_end() {
    let server = MockServer::start().await;
    mount_catalogue(&server, 2, 3).await;

    let output = run(create_test_config(&server, 2, 8), RunMode::Single).await;

    assert_eq!(output.items.len(), 6);
    assert_eq!(output.stats.items, 6);
    assert_eq!(output.stats.pages_taken, 2);
    assert!(output.stats.is_clean());

    let throughput = output.stats.throughput();
    assert!(throughput > 0.0 && throughput.is_finite());

    for item in &output.items {
        assert!(!item.summary.title.is_empty());
        assert!(item.summary.link.starts_with(&format!("{}/catalogue/", server.uri())));
        assert!(item.detail.is_complete(), "incomplete detail: {:?}", item);
    }

    let first = output
        .items
        .iter()
        .find(|i| i.summary.title == "Book 1.1")
        .expect("Book 1.1 missing");
    assert_eq!(first.detail.price.as_deref(), Some("£1.01"));
    assert_eq!(first.detail.availability.as_deref(), Some("In stock (1 available)"));
    assert_eq!(
        first.detail.description_length,
        Some("Description of book 1.1".len())
    );
}

#[tokio::test]
async fn test_single_and_multi_mode_produce_same_items() {
    let server = MockServer::start().await;
    mount_catalogue(&server, 6, 4).await;

    let single = run(create_test_config(&server, 6, 4), RunMode::Single).await;
    let multi = run(
        create_test_config(&server, 6, 4),
        RunMode::Multi { workers: 4 },
    )
    .await;

    assert_eq!(single.items.len(), 24);
    assert_eq!(multi.items.len(), 24);
    assert_eq!(as_set(&single.items), as_set(&multi.items));
    assert_eq!(multi.stats.mode, RunMode::Multi { workers: 4 });
}

#[tokio::test]
async fn test_more_workers_than_pages_dispatches_each_page_once() {
    let server = MockServer::start().await;

    for page in 1..=3 {
        Mock::given(method("GET"))
            .and(path(format!("/catalogue/page-{}.html", page)))
            .respond_with(ResponseTemplate::new(200).set_body_string(list_page(page, 5)))
            .expect(1)
            .mount(&server)
            .await;

        for item in 1..=5 {
            Mock::given(method("GET"))
                .and(path(format!("/catalogue/{}/index.html", slug(page, item))))
                .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(page, item)))
                .expect(1)
                .mount(&server)
                .await;
        }
    }

    let output = run(
        create_test_config(&server, 3, 8),
        RunMode::Multi { workers: 8 },
    )
    .await;

    assert_eq!(output.items.len(), 15);
    assert_eq!(as_set(&output.items).len(), 15);
    assert_eq!(output.stats.pages_taken, 3);

    server.verify().await;
}

#[tokio::test]
async fn test_failed_detail_page_is_isolated() {
    let server = MockServer::start().await;

    // Registered first so it takes precedence over the catalogue's own mock
    Mock::given(method("GET"))
        .and(path(format!("/catalogue/{}/index.html", slug(1, 2))))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_catalogue(&server, 2, 3).await;

    let output = run(
        create_test_config(&server, 2, 2),
        RunMode::Multi { workers: 2 },
    )
    .await;

    assert_eq!(output.items.len(), 5);
    assert_eq!(output.stats.items, 5);
    assert_eq!(output.stats.failed_items, 1);
    assert!(!output.stats.is_clean());
    assert!(!output
        .items
        .iter()
        .any(|i| i.summary.title == "Book 1.2"));
}

#[tokio::test]
async fn test_missing_list_page_is_counted() {
    let server = MockServer::start().await;
    mount_catalogue(&server, 2, 3).await;
    Mock::given(method("GET"))
        .and(path("/catalogue/page-3.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut config = create_test_config(&server, 3, 1);
    config.workers.on_empty_page = EmptyPagePolicy::Skip;
    let output = run(config, RunMode::Single).await;

    assert_eq!(output.items.len(), 6);
    assert_eq!(output.stats.failed_pages, 1);
    assert_eq!(output.stats.pages_taken, 3);
}

#[tokio::test]
async fn test_empty_page_stops_single_worker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogue/page-1.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(list_page(1, 0)))
        .mount(&server)
        .await;
    mount_catalogue(&server, 3, 2).await;

    let output = run(create_test_config(&server, 3, 1), RunMode::Single).await;

    assert!(output.items.is_empty());
    assert_eq!(output.stats.pages_taken, 1);
    assert_eq!(output.stats.workers_stopped_early, 1);
}

#[tokio::test]
async fn test_failed_list_page_stops_only_one_worker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogue/page-1.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_catalogue(&server, 4, 3).await;

    let config = create_test_config(&server, 4, 2);
    assert_eq!(config.workers.on_empty_page, EmptyPagePolicy::Stop);
    let output = run(config, RunMode::Multi { workers: 2 }).await;

    // Whichever worker takes page 1 stops; the other drains pages 2 to 4.
    assert_eq!(output.stats.failed_pages, 1);
    assert_eq!(output.stats.workers_stopped_early, 1);
    assert_eq!(output.stats.pages_taken, 4);
    assert_eq!(output.items.len(), 9);

    let titles: HashSet<String> = output.items.iter().map(|i| i.summary.title.clone()).collect();
    let expected: HashSet<String> = (2..=4)
        .flat_map(|page| (1..=3).map(move |item| format!("Book {}.{}", page, item)))
        .collect();
    assert_eq!(titles, expected);
}

#[tokio::test]
async fn test_reference_fixture_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogue/page-1.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LIST_FIXTURE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/catalogue/[^/]+/index\.html$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_FIXTURE))
        .expect(20)
        .mount(&server)
        .await;

    let output = run(create_test_config(&server, 1, 1), RunMode::Single).await;

    assert_eq!(output.items.len(), 20);
    assert!(output
        .items
        .iter()
        .all(|i| i.detail.price.as_deref() == Some("£51.77")));

    server.verify().await;
}
