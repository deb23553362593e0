use crate::actor_framework::Entity;
use crate::domain::CartItem;
use super::error::CartError;

impl Entity for CartItem {
    type Id = String;
    type Patch = CartItem;
    type Error = CartError;

    fn id(&self) -> &String {
        &self.id
    }

    /// A patch is a full cart item; its `id` selects the line to overwrite.
    fn patch_target(patch: &CartItem) -> &String {
        &patch.id
    }

    fn validate_patch(patch: &CartItem) -> Result<(), CartError> {
        patch.validate().map_err(CartError::from)
    }

    /// Overwrites quantity and unit price. Name, currency and image stay as seeded.
    fn on_update(&mut self, patch: CartItem) {
        self.count = patch.count;
        self.price = patch.price;
    }

    fn on_clear(items: &[CartItem]) {
        tracing::info!(removed = items.len(), "Clearing cart");
    }
}
