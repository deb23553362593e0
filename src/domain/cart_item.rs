use thiserror::Error;

/// Smallest quantity a cart line may hold.
pub const MIN_COUNT: u32 = 1;
/// Largest quantity a cart line may hold.
pub const MAX_COUNT: u32 = 99;

/// Reasons a cart item is rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid price: {0}, price must be positive")]
    InvalidPrice(i64),
    #[error("Invalid count: {0}, count must be within 1..=99")]
    InvalidCount(u32),
}

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub price: i64,
    pub currency: String,
    pub image_url: String,
}

impl CartItem {
    /// Creates a validated cart item.
    ///
    /// # Errors
    /// Fails if `price <= 0` or `count` is outside `1..=99`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        count: u32,
        price: i64,
        currency: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            count,
            price,
            currency: currency.into(),
            image_url: image_url.into(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Re-checks the invariants on an item that was built or edited in place.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.price <= 0 {
            return Err(ValidationError::InvalidPrice(self.price));
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&self.count) {
            return Err(ValidationError::InvalidCount(self.count));
        }
        Ok(())
    }

    /// Copy of this item with another quantity. Not validated.
    pub fn with_count(&self, count: u32) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }

    /// `price * count`, clamped at `i64::MAX`.
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.count))
    }
}

/// Sum of `price * count` over the given items, clamped at `i64::MAX`.
pub fn total_price(items: &[CartItem]) -> i64 {
    items
        .iter()
        .map(CartItem::line_total)
        .fold(0, i64::saturating_add)
}
