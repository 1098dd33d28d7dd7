// Shared test helpers for mock upstreams and resolver setup.
//
// One wiremock server plays all three upstreams: the search endpoint lives at
// /images/search, the passthrough relay at /raw and the JSON relay at /get.

use std::time::Duration;

use image_lookup::{Config, ImageResolver};
use wiremock::MockServer;

pub const SEARCH_PATH: &str = "/images/search";
pub const RELAY_RAW_PATH: &str = "/raw";
pub const RELAY_JSON_PATH: &str = "/get";

/// Results page with the metadata serialized in a script block.
pub const MURL_PAGE: &str = r#"<html><body>
<script>var r = {"murl":"http://example.com/a.jpg","turl":"http://tse.example.com/th?id=a"};</script>
</body></html>"#;

#[allow(dead_code)] // Used by other test files
/// Results page where the metadata only exists entity-encoded in an attribute.
pub const ATTRIBUTE_PAGE: &str = r#"<html><body>
<a class="iusc" m="{&quot;murl&quot;:&quot;http://x/1.png&quot;}"></a>
</body></html>"#;

/// Page without any image marker (e.g. a consent wall).
pub const EMPTY_PAGE: &str = "<html><body><p>Please verify you are a human</p></body></html>";

/// Config pointing at `server` with short deadlines.
#[allow(dead_code)] // Used by other test files
pub fn mock_config(server: &MockServer) -> Config {
    mock_config_with_timeouts(
        server,
        Duration::from_millis(400),
        Duration::from_millis(600),
        Duration::from_millis(600),
    )
}

/// Config pointing at `server` with explicit per-strategy deadlines.
pub fn mock_config_with_timeouts(
    server: &MockServer,
    direct: Duration,
    relay_raw: Duration,
    relay_json: Duration,
) -> Config {
    Config {
        search_endpoint: format!("{}{}", server.uri(), SEARCH_PATH),
        relay_raw_endpoint: format!("{}{}", server.uri(), RELAY_RAW_PATH),
        relay_json_endpoint: format!("{}{}", server.uri(), RELAY_JSON_PATH),
        direct_timeout: direct,
        relay_raw_timeout: relay_raw,
        relay_json_timeout: relay_json,
        user_agent: "image_lookup_test/1.0".to_string(),
        ..Default::default()
    }
}

/// Resolver for `config`.
pub fn resolver(config: Config) -> ImageResolver {
    ImageResolver::new(config).expect("Failed to build resolver")
}

/// JSON relay envelope wrapping `html`.
#[allow(dead_code)] // Used by other test files
pub fn envelope(html: &str) -> String {
    serde_json::json!({
        "contents": html,
        "status": { "http_code": 200 }
    })
    .to_string()
}
