use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_string(object: &wasm_bindgen::JsValue, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(object, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn global_object(name: &str) -> Option<wasm_bindgen::JsValue> {
        let window = web_sys::window()?;
        js_sys::Reflect::get(&window, &name.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    /// `window.__EMS_ENV` (written by env.js) wins over `window.__EMS_CONFIG`.
    pub fn snapshot() -> Option<String> {
        global_object("__EMS_ENV")
            .and_then(|env| read_string(&env, &["API_BASE_URL", "api_base_url"]))
            .or_else(|| {
                global_object("__EMS_CONFIG")
                    .and_then(|cfg| read_string(&cfg, &["api_base_url", "API_BASE_URL"]))
            })
    }

    pub fn write_config(cfg: &RuntimeConfig) {
        let (Some(window), Some(url)) = (web_sys::window(), cfg.api_base_url.as_ref()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&window, &"__EMS_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
async fn discover_base_url() -> Option<String> {
    if let Some(existing) = globals::snapshot() {
        return Some(existing);
    }
    let cfg = globals::fetch_runtime_config().await?;
    globals::write_config(&cfg);
    cfg.api_base_url
}

#[cfg(not(target_arch = "wasm32"))]
async fn discover_base_url() -> Option<String> {
    None
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    match discover_base_url().await.filter(|url| !url.trim().is_empty()) {
        Some(url) => cache_base_url(&url),
        None => {
            log::info!("no runtime config found, using {}", DEFAULT_API_BASE_URL);
            cache_base_url(DEFAULT_API_BASE_URL)
        }
    }
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::debug!("API base URL resolved to {}", base);
}
