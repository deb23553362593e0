use crate::domain::{total_price, CartItem};

/// What the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPhase {
    Loading,
    Populated,
    Empty,
    /// Terminal: entered after a confirmed checkout, never left.
    OrderSent,
}

/// Snapshot published by the controller. Items and total always belong together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total: i64,
    pub order_sent: bool,
    loaded: bool,
}

impl CartState {
    pub fn loading() -> Self {
        Self::default()
    }

    /// State after reading the store. Keeps the order-sent flag.
    pub fn with_items(&self, items: Vec<CartItem>) -> Self {
        Self {
            total: total_price(&items),
            items,
            order_sent: self.order_sent,
            loaded: true,
        }
    }

    pub fn cleared(&self) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            order_sent: self.order_sent,
            loaded: true,
        }
    }

    pub fn with_order_sent(&self) -> Self {
        Self {
            order_sent: true,
            ..self.clone()
        }
    }

    pub fn phase(&self) -> CartPhase {
        if self.order_sent {
            CartPhase::OrderSent
        } else if !self.loaded {
            CartPhase::Loading
        } else if self.items.is_empty() {
            CartPhase::Empty
        } else {
            CartPhase::Populated
        }
    }

    pub fn item(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_items;

    #[test]
    fn test_phase_transitions() {
        let state = CartState::loading();
        assert_eq!(state.phase(), CartPhase::Loading);

        let state = state.with_items(seed_items());
        assert_eq!(state.phase(), CartPhase::Populated);
        assert_eq!(state.total, 100 * (99 + 2 + 1 + 99));

        let state = state.cleared();
        assert_eq!(state.phase(), CartPhase::Empty);
        assert_eq!(state.total, 0);

        let state = state.with_order_sent().with_items(seed_items());
        assert_eq!(state.phase(), CartPhase::OrderSent);
    }
}
