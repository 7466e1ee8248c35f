//! Integration tests for the catalog walker
//!
//! These tests use wiremock to stand up a mock storefront and run the full
//! listing → product → export cycle end-to-end.

use sumi_shelf::config::{CatalogConfig, Config, HttpConfig, OutputConfig, PolitenessConfig};
use sumi_shelf::crawler::{crawl, CatalogWalker};
use sumi_shelf::output::{configured_sinks, export_all, StopReason};
use sumi_shelf::{Gender, ProductType};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the mock storefront, with no delays
fn create_test_config(base_url: &str, output_dir: &std::path::Path) -> Config {
    Config {
        catalog: CatalogConfig {
            base_url: base_url.to_string(),
            collection_url: format!("{}/collections/all", base_url),
            max_pages: 8,
        },
        http: HttpConfig {
            user_agent: "TestHarvester/1.0".to_string(),
            timeout_secs: 5,
        },
        politeness: PolitenessConfig {
            product_delay_ms: 0,
            page_delay_ms: 0,
        },
        output: OutputConfig {
            csv_path: output_dir.join("products.csv").display().to_string(),
            json_path: output_dir.join("products.json").display().to_string(),
        },
    }
}

fn listing_page(hrefs: &[&str]) -> String {
    let cards: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<li class="grid__item"><div class="card-wrapper">
                     <a class="full-unstyled-link" href="{}">Product</a>
                   </div></li>"#,
                href
            )
        })
        .collect();
    format!(
        r#"<html><body><ul id="product-grid">{}</ul></body></html>"#,
        cards
    )
}

fn product_page(title: &str, price: &str, sale: Option<&str>) -> String {
    let sale_html = sale
        .map(|s| format!(r#"<span class="price-item price-item--sale">{}</span>"#, s))
        .unwrap_or_default();
    format!(
        r#"<html><body>
             <h1>{}</h1>
             <span class="price-item price-item--regular">{}</span>
             {}
             <div class="product__description"><p>Soft 100% cotton, relaxed everyday fit.</p></div>
             <div class="product__media"><img src="//cdn.example.com/files/{}.jpg?width=800"></div>
             <select name="Size"><option>S</option><option>M</option><option>M</option></select>
           </body></html>"#,
        title,
        price,
        sale_html,
        title.len()
    )
}

fn empty_product_page(title: &str) -> String {
    format!("<html><body><h1>{}</h1><p>Coming soon</p></body></html>", title)
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_multi_page_crawl_stops_on_empty_page() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    // Page-specific listing mocks are mounted first so they win over the bare path
    Mock::given(method("GET"))
        .and(path("/collections/all"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_page(&["/products/navy-hoodie"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/collections/all"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/collections/all"))
        .and(query_param("page", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    mount_html(
        &mock_server,
        "/collections/all",
        listing_page(&["/products/black-tee", "/products/floral-dress"]),
    )
    .await;

    mount_html(
        &mock_server,
        "/products/black-tee",
        product_page("Men's Classic Black T-Shirt", "Rs. 1,200.00", None),
    )
    .await;
    mount_html(
        &mock_server,
        "/products/floral-dress",
        product_page("Women's Floral Dress", "Rs. 2,000.00", Some("Rs. 1,500.00")),
    )
    .await;
    mount_html(
        &mock_server,
        "/products/navy-hoodie",
        product_page("Navy Hoodie", "Rs. 3,000.00", None),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), dir.path());
    let mut walker = CatalogWalker::new(config).expect("Failed to create walker");
    let products = walker.crawl(8).await;

    let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Men's Classic Black T-Shirt",
            "Women's Floral Dress",
            "Navy Hoodie"
        ]
    );

    let tee = &products[0];
    assert_eq!(tee.product_type, ProductType::TShirt);
    assert_eq!(tee.gender, Gender::Men);
    assert_eq!(tee.price, 1200.0);
    assert_eq!(tee.sale_price, None);
    assert_eq!(tee.sizes, vec!["S".to_string(), "M".to_string()]);
    assert_eq!(tee.image_urls.len(), 1);
    assert!(tee.image_urls[0].starts_with("https://cdn.example.com/files/"));
    assert!(!tee.image_urls[0].contains("width="));

    let dress = &products[1];
    assert_eq!(dress.product_type, ProductType::Dress);
    assert_eq!(dress.gender, Gender::Women);
    assert_eq!(dress.sale_price, Some(1500.0));
    assert_eq!(dress.discount, Some(25));

    let stats = walker.stats();
    assert_eq!(stats.pages_requested, 3);
    assert_eq!(stats.pages_with_products, 2);
    assert_eq!(stats.products_extracted, 3);
    assert_eq!(stats.products_skipped, 0);
    assert_eq!(stats.products_with_issues, 0);
    assert_eq!(stats.stop_reason, Some(StopReason::EmptyPage { page: 3 }));
    assert!(stats.finished_at.is_some());
}

#[tokio::test]
async fn test_failed_products_are_skipped() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/collections/all",
        listing_page(&[
            "/products/gone",
            "/products/no-price",
            "/products/linen-shirt",
        ]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/products/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    mount_html(
        &mock_server,
        "/products/no-price",
        empty_product_page("Mystery Jacket"),
    )
    .await;
    mount_html(
        &mock_server,
        "/products/linen-shirt",
        product_page("Unisex Linen Shirt", "Rs. 1,800.00", None),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), dir.path());
    let mut walker = CatalogWalker::new(config).unwrap();
    let products = walker.crawl(1).await;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Unisex Linen Shirt");
    assert_eq!(products[0].gender, Gender::Unisex);

    let stats = walker.stats();
    assert_eq!(stats.product_links, 3);
    assert_eq!(stats.products_extracted, 1);
    assert_eq!(stats.products_skipped, 2);
    assert_eq!(stats.stop_reason, Some(StopReason::PageLimit));
}

#[tokio::test]
async fn test_import_issues_counted_but_product_kept() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/collections/all",
        listing_page(&["/products/qi", "/products/black-tee"]),
    )
    .await;
    // Two-character title: accepted by the assembler, flagged by the importer rules
    mount_html(
        &mock_server,
        "/products/qi",
        product_page("Qi", "Rs. 750", None),
    )
    .await;
    mount_html(
        &mock_server,
        "/products/black-tee",
        product_page("Black T-Shirt", "Rs. 999", None),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), dir.path());
    let (products, stats) = crawl(config, 1).await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Qi");
    assert_eq!(stats.products_extracted, 2);
    assert_eq!(stats.products_with_issues, 1);
}

#[tokio::test]
async fn test_empty_first_page_returns_no_products() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/collections/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), dir.path());
    let (products, stats) = crawl(config, 5).await.unwrap();

    assert!(products.is_empty());
    assert_eq!(stats.stop_reason, Some(StopReason::EmptyPage { page: 1 }));
}

#[tokio::test]
async fn test_listing_error_stops_crawl() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/collections/all"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_html(
        &mock_server,
        "/collections/all",
        listing_page(&["/products/black-tee"]),
    )
    .await;
    mount_html(
        &mock_server,
        "/products/black-tee",
        product_page("Black T-Shirt", "Rs. 999", None),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), dir.path());
    let (products, stats) = crawl(config, 4).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(stats.pages_requested, 2);
    assert_eq!(stats.stop_reason, Some(StopReason::PageFailed { page: 2 }));
}

#[tokio::test]
async fn test_page_limit_respected() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/collections/all"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(listing_page(&["/products/other"])),
        )
        .expect(0)
        .mount(&mock_server)
        .await;

    mount_html(
        &mock_server,
        "/collections/all",
        listing_page(&["/products/black-tee"]),
    )
    .await;
    mount_html(
        &mock_server,
        "/products/black-tee",
        product_page("Black T-Shirt", "Rs. 999", None),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), dir.path());
    let (products, stats) = crawl(config, 1).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(stats.stop_reason, Some(StopReason::PageLimit));
}

#[tokio::test]
async fn test_crawl_and_export() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_html(
        &mock_server,
        "/collections/all",
        listing_page(&["/products/floral-dress", "/products/black-tee"]),
    )
    .await;
    mount_html(
        &mock_server,
        "/products/floral-dress",
        product_page("Women's Floral Dress", "Rs. 2,000.00", Some("Rs. 1,500.00")),
    )
    .await;
    mount_html(
        &mock_server,
        "/products/black-tee",
        product_page("Men's Classic Black T-Shirt", "Rs. 1,200.00", None),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), dir.path());
    let sinks = configured_sinks(&config.output);
    let (products, _stats) = crawl(config, 1).await.unwrap();
    assert_eq!(export_all(&sinks, &products), 2);

    // CSV: header plus one row per product, listing order preserved
    let mut reader = csv::Reader::from_path(dir.path().join("products.csv")).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "title");
    assert_eq!(&headers[13], "imageURLs");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "Women's Floral Dress");
    assert_eq!(&rows[0][8], "25");
    assert_eq!(&rows[1][7], "");

    // JSON: array of objects with typed values
    let json = std::fs::read_to_string(dir.path().join("products.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["salePrice"], 1500.0);
    assert_eq!(items[0]["discount"], 25);
    assert!(items[1]["salePrice"].is_null());
    assert_eq!(items[1]["type"], "T-Shirt");
    assert_eq!(items[1]["inStock"], true);
}
