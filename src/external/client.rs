use std::sync::LazyLock;
use std::time::Duration;

/// User-Agent sent on every outbound request. The news feed endpoint
/// rejects clients that do not look like a browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Global HTTP client shared by the content fetchers and the webhook client.
///
/// Initialized lazily on first access and reused for the process lifetime,
/// so connection pooling and DNS caching work across jobs. Timeouts bound
/// every fetch and send; a hung upstream stalls only the job that called it.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        // Enable compression
        .gzip(true)
        // Security
        .use_rustls_tls()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client")
});
