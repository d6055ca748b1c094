//! Local key-value persistence for the cart and favorites.
//!
//! Each key maps to `<dir>/<key>.json`. Reads never fail: a missing,
//! unreadable or malformed file yields the caller's fallback. Stored
//! shapes are also repaired on load, so a hand-edited file cannot poison
//! the session.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use skybook_core::cart::CartState;
use skybook_core::favorites::FavoritesState;
use skybook_shared::CartItem;
use tokio::fs;

pub const CART_KEY: &str = "cart";
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct JsonStorage {
    dir: PathBuf,
}

impl JsonStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Raw JSON stored under `key`, if any.
    pub async fn read_value(&self, key: &str) -> Option<Value> {
        let raw = match fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read {} from storage: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring malformed {} in storage: {}", key, e);
                None
            }
        }
    }

    pub async fn load_state<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.read_value(key)
            .await
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or(fallback)
    }

    pub async fn save_state<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).await?;
        let body = serde_json::to_vec(value)?;
        // Write then rename so a crash never leaves a half-written file
        let tmp = self.path_for(&format!("{}.tmp", key));
        fs::write(&tmp, body).await?;
        fs::rename(&tmp, self.path_for(key)).await?;
        Ok(())
    }

    pub async fn load_cart(&self) -> CartState {
        fix_cart_shape(&self.load_state(CART_KEY, Value::Null).await)
    }

    pub async fn load_favorites(&self) -> FavoritesState {
        fix_favorites_shape(&self.load_state(FAVORITES_KEY, Value::Null).await)
    }
}

fn as_cart_item(v: &Value) -> Option<CartItem> {
    let o = v.as_object()?;
    let flight_id = o.get("flightId")?.as_str()?;
    let seat = o.get("seat")?.as_str()?;
    let price = o.get("price")?.as_f64()?;
    Some(CartItem::new(flight_id, seat, price))
}

/// Keeps only well-formed cart items.
pub fn fix_cart_shape(input: &Value) -> CartState {
    let items = input
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(as_cart_item).collect())
        .unwrap_or_default();
    CartState { items }
}

/// Keeps only string ids.
pub fn fix_favorites_shape(input: &Value) -> FavoritesState {
    let ids = input
        .get("ids")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    FavoritesState { ids }
}
