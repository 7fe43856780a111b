use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| value.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__SECUREDOC_ENV (env.js) wins over window.__SECUREDOC_CONFIG.
    read_global_key("__SECUREDOC_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__SECUREDOC_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn cache_base_url(value: &str) -> String {
    let value = resolve_against_origin(&normalize_base_url(value), window_origin().as_deref());
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

fn write_window_config(cfg: &RuntimeConfig) {
    let (Some(url), Some(window)) = (&cfg.api_base_url, web_sys::window()) else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &"__SECUREDOC_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = window_origin()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Strips trailing slashes so that endpoint paths can always be appended with a leading `/`.
pub fn normalize_base_url(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// reqwest only accepts absolute URLs, so a root-relative base is anchored to the page origin.
pub fn resolve_against_origin(base: &str, origin: Option<&str>) -> String {
    match origin {
        Some(origin) if base.starts_with('/') => format!("{}{}", origin.trim_end_matches('/'), base),
        _ => base.to_string(),
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if !cfg!(target_arch = "wasm32") {
        return normalize_base_url(DEFAULT_API_BASE_URL);
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    log::warn!("runtime config unavailable, falling back to {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_trailing_slashes() {
        assert_eq!(normalize_base_url("https://docs.example.com/api/"), "https://docs.example.com/api");
        assert_eq!(normalize_base_url("/api//"), "/api");
    }

    #[test]
    fn normalize_base_url_defaults_when_blank() {
        assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
        assert_eq!(normalize_base_url("/"), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn root_relative_base_is_anchored_to_origin() {
        assert_eq!(
            resolve_against_origin("/api", Some("https://docs.example.com/")),
            "https://docs.example.com/api"
        );
        assert_eq!(
            resolve_against_origin("http://backend:8080/api", Some("https://docs.example.com")),
            "http://backend:8080/api"
        );
        assert_eq!(resolve_against_origin("/api", None), "/api");
    }

    #[test]
    fn runtime_config_deserializes_optional_base_url() {
        let cfg: RuntimeConfig = serde_json::from_str(r#"{"api_base_url":"http://localhost:8080/api"}"#)
            .expect("config json");
        assert_eq!(cfg.api_base_url.as_deref(), Some("http://localhost:8080/api"));
        let empty: RuntimeConfig = serde_json::from_str("{}").expect("empty config");
        assert!(empty.api_base_url.is_none());
    }
}
