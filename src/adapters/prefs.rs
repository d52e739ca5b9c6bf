//! Shared-preferences adapter.
//!
//! Implements both [`ConfigPort`] and [`StoragePort`] over an in-memory
//! key-value map shaped like the platform stores the host app writes to
//! (an iOS app-group `UserDefaults` suite, an Android preferences file).
//!
//! - Namespace isolation: keys are stored as `namespace::key`.
//! - Config persistence: [`WidgetConfig`] is stored as a postcard blob
//!   under [`CONFIG_NAMESPACE`] / [`CONFIG_KEY`] and validated before save.
//! - Snapshots: a namespace can be imported from / exported to a flat JSON
//!   object of string values, the shape of an Android preferences dump.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort, StorageError, StoragePort};
use crate::config::WidgetConfig;

pub const CONFIG_NAMESPACE: &str = "petwidget";
pub const CONFIG_KEY: &str = "widgetcfg";

#[derive(Default)]
pub struct PrefsAdapter {
    store: RefCell<HashMap<String, Vec<u8>>>,
}

impl PrefsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a flat JSON object into `namespace`.
    ///
    /// Only string values are kept; anything else is what a typed
    /// `getString` would fail on, so it is skipped and later reads as
    /// absent.
    pub fn from_json(namespace: &str, json: &str) -> Result<Self, StorageError> {
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| {
                warn!("PrefsAdapter: snapshot is not a JSON object: {}", e);
                StorageError::InvalidData
            })?;

        let adapter = Self::new();
        {
            let mut store = adapter.store.borrow_mut();
            for (key, value) in map {
                match value {
                    serde_json::Value::String(s) => {
                        store.insert(Self::composite_key(namespace, &key), s.into_bytes());
                    }
                    other => warn!("PrefsAdapter: skipping non-string '{}' = {}", key, other),
                }
            }
        }
        info!(
            "PrefsAdapter: imported {} keys into '{}'",
            adapter.store.borrow().len(),
            namespace
        );
        Ok(adapter)
    }

    /// Export every UTF-8 value in `namespace` as a pretty JSON object.
    pub fn to_json(&self, namespace: &str) -> Result<String, StorageError> {
        let prefix = format!("{}::", namespace);
        let store = self.store.borrow();
        let values: BTreeMap<&str, &str> = store
            .iter()
            .filter_map(|(k, v)| {
                let key = k.strip_prefix(&prefix)?;
                let value = core::str::from_utf8(v).ok()?;
                Some((key, value))
            })
            .collect();
        serde_json::to_string_pretty(&values).map_err(|_| StorageError::InvalidData)
    }

    /// Remove every key in `namespace`.
    pub fn erase_namespace(&mut self, namespace: &str) {
        let prefix = format!("{}::", namespace);
        self.store
            .borrow_mut()
            .retain(|k: &String, _: &mut Vec<u8>| !k.starts_with(&prefix));
    }

    fn composite_key(namespace: &str, key: &str) -> String {
        format!("{}::{}", namespace, key)
    }
}

impl ConfigPort for PrefsAdapter {
    fn load(&self) -> Result<WidgetConfig, ConfigError> {
        let key = Self::composite_key(CONFIG_NAMESPACE, CONFIG_KEY);
        if let Some(bytes) = self.store.borrow().get(&key) {
            let cfg: WidgetConfig =
                postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
            info!("PrefsAdapter: loaded config from store");
            Ok(cfg)
        } else {
            info!("PrefsAdapter: no stored config, using defaults");
            Ok(WidgetConfig::default())
        }
    }

    fn save(&self, config: &WidgetConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let key = Self::composite_key(CONFIG_NAMESPACE, CONFIG_KEY);
        let bytes = postcard::to_allocvec(config).map_err(|_| ConfigError::IoError)?;
        info!("PrefsAdapter: config saved ({} bytes)", bytes.len());
        self.store.borrow_mut().insert(key, bytes);
        Ok(())
    }
}

impl StoragePort for PrefsAdapter {
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError> {
        let composite = Self::composite_key(namespace, key);
        match self.store.borrow().get(&composite) {
            Some(data) => {
                let len = data.len().min(buf.len());
                buf[..len].copy_from_slice(&data[..len]);
                Ok(len)
            }
            None => Err(StorageError::NotFound),
        }
    }

    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let composite = Self::composite_key(namespace, key);
        self.store.borrow_mut().insert(composite, data.to_vec());
        Ok(())
    }

    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError> {
        let composite = Self::composite_key(namespace, key);
        self.store.borrow_mut().remove(&composite);
        Ok(())
    }

    fn exists(&self, namespace: &str, key: &str) -> bool {
        let composite = Self::composite_key(namespace, key);
        self.store.borrow().contains_key(&composite)
    }
}
