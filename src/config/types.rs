use serde::Deserialize;

/// Browser-like user agent; the storefront serves a stripped page to unknown clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Main configuration structure for Sumi-Shelf
///
/// Every section and key is optional; missing values fall back to the
/// defaults of the storefront the harvester was built for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub politeness: PolitenessConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which storefront to walk and how far
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Storefront root, used to resolve relative product and image links
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Collection listing page; page N>1 is this URL with `?page=N`
    #[serde(rename = "collection-url", default = "default_collection_url")]
    pub collection_url: String,

    /// Number of listing pages to walk when none is given on the command line
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Fixed delays between requests (milliseconds)
#[derive(Debug, Clone, Deserialize)]
pub struct PolitenessConfig {
    /// Pause after each product page fetch
    #[serde(rename = "product-delay-ms", default = "default_product_delay_ms")]
    pub product_delay_ms: u64,

    /// Pause between listing pages
    #[serde(rename = "page-delay-ms", default = "default_page_delay_ms")]
    pub page_delay_ms: u64,
}

/// Export destinations
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,

    #[serde(rename = "json-path", default = "default_json_path")]
    pub json_path: String,
}

fn default_base_url() -> String {
    "https://www.zeyrey.net".to_string()
}

fn default_collection_url() -> String {
    "https://www.zeyrey.net/collections/all".to_string()
}

fn default_max_pages() -> u32 {
    8
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_product_delay_ms() -> u64 {
    1500
}

fn default_page_delay_ms() -> u64 {
    2000
}

fn default_csv_path() -> String {
    "products_export.csv".to_string()
}

fn default_json_path() -> String {
    "products_export.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection_url: default_collection_url(),
            max_pages: default_max_pages(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PolitenessConfig {
    fn default() -> Self {
        Self {
            product_delay_ms: default_product_delay_ms(),
            page_delay_ms: default_page_delay_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            json_path: default_json_path(),
        }
    }
}
