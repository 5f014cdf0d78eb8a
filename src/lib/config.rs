//! Build-time configuration for the resource API and identity provider
//! endpoints with an optional runtime override. The runtime config is read
//! from `window.MERCATO_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub auth_base_url: String,
    pub client_id: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("MERCATO_API_BASE_URL")
            .or(option_env!("MERCATO_API_HOST"))
            .unwrap_or("");
        let auth_base_url = option_env!("MERCATO_AUTH_BASE_URL").unwrap_or("");
        let client_id = option_env!("MERCATO_CLIENT_ID").unwrap_or("mercato-web");

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            auth_base_url: auth_base_url.to_string(),
            client_id: client_id.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    auth_base_url: Option<String>,
    client_id: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.auth_base_url {
        config.auth_base_url = value;
    }
    if let Some(value) = runtime.client_id {
        config.client_id = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("MERCATO_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        auth_base_url: read_runtime_value(&object, "auth_base_url"),
        client_id: read_runtime_value(&object, "client_id"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.mercato.store "),
            Some("https://api.mercato.store".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            auth_base_url: "https://auth.default".to_string(),
            client_id: "default-client".to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            auth_base_url: normalize_runtime_value("  "),
            client_id: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.auth_base_url, "https://auth.default");
        assert_eq!(config.client_id, "default-client");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            auth_base_url: "https://auth.default".to_string(),
            client_id: "default-client".to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            auth_base_url: normalize_runtime_value("https://auth.override"),
            client_id: normalize_runtime_value("override-client"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.auth_base_url, "https://auth.override");
        assert_eq!(config.client_id, "override-client");
    }
}
