use skybook_core::cart::CartState;
use skybook_core::favorites::FavoritesState;
use skybook_shared::CartItem;

use crate::persist::{JsonStorage, CART_KEY, FAVORITES_KEY};

/// Cart and favorites for the local user, written through to storage after
/// every mutation.
#[derive(Debug)]
pub struct Session {
    storage: JsonStorage,
    cart: CartState,
    favorites: FavoritesState,
}

impl Session {
    /// Restores whatever the previous process left behind.
    pub async fn load(storage: JsonStorage) -> Self {
        let cart = storage.load_cart().await;
        let favorites = storage.load_favorites().await;
        tracing::info!(
            "Session restored from {}: {} cart items, {} favorites",
            storage.dir().display(),
            cart.items.len(),
            favorites.ids.len()
        );
        Self { storage, cart, favorites }
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn favorites(&self) -> &FavoritesState {
        &self.favorites
    }

    pub async fn add_to_cart(&mut self, item: CartItem) -> bool {
        let changed = self.cart.add_item(item);
        self.persist().await;
        changed
    }

    pub async fn remove_from_cart(&mut self, flight_id: &str, seat: &str) -> bool {
        let changed = self.cart.remove_item(flight_id, seat);
        self.persist().await;
        changed
    }

    pub async fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist().await;
    }

    pub async fn toggle_favorite(&mut self, flight_id: &str) -> bool {
        let now_favorite = self.favorites.toggle(flight_id);
        self.persist().await;
        now_favorite
    }

    /// Writes both slices. Storage failures are logged and otherwise ignored.
    pub async fn persist(&self) {
        if let Err(e) = self.storage.save_state(CART_KEY, &self.cart).await {
            tracing::warn!("Failed to persist cart: {}", e);
        }
        if let Err(e) = self.storage.save_state(FAVORITES_KEY, &self.favorites).await {
            tracing::warn!("Failed to persist favorites: {}", e);
        }
    }
}
