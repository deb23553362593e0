use crate::controller::{CartPhase, CartState};
use super::labels::{
    dish_count_label, format_price, CART_TITLE, CHECKOUT_LABEL, EMPTY_CART_MESSAGE, ORDER_SENT_MESSAGE,
};

const DEFAULT_CURRENCY: &str = "₽";

/// Plain-text rendering of a cart snapshot.
pub struct CartView;

impl CartView {
    pub fn render(state: &CartState) -> String {
        match state.phase() {
            CartPhase::OrderSent => ORDER_SENT_MESSAGE.to_string(),
            CartPhase::Empty => EMPTY_CART_MESSAGE.to_string(),
            CartPhase::Loading => String::new(),
            CartPhase::Populated => Self::render_items(state),
        }
    }

    fn render_items(state: &CartState) -> String {
        let count = state.items.len();
        let mut out = format!("{CART_TITLE}\n{count} {}\n", dish_count_label(count));

        for item in &state.items {
            out.push_str(&format!(
                "[{}] {} | {} | x{}\n",
                item.id,
                item.name,
                format_price(item.price, &item.currency),
                item.count
            ));
        }

        let currency = state
            .items
            .first()
            .map(|item| item.currency.as_str())
            .unwrap_or(DEFAULT_CURRENCY);
        out.push_str(&format!("{CHECKOUT_LABEL} {}", format_price(state.total, currency)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CartItem;

    fn populated() -> CartState {
        CartState::loading().with_items(vec![
            CartItem::new("1", "Суп", 2, 100, "₽", "").unwrap(),
            CartItem::new("2", "Поке", 3, 50, "₽", "").unwrap(),
        ])
    }

    #[test]
    fn test_render_populated_cart() {
        let text = CartView::render(&populated());
        assert_eq!(
            text,
            "Корзина\n2 блюда\n[1] Суп | 100 ₽ | x2\n[2] Поке | 50 ₽ | x3\nДалее 350 ₽"
        );
    }

    #[test]
    fn test_render_empty_and_sent() {
        assert_eq!(CartView::render(&populated().cleared()), EMPTY_CART_MESSAGE);
        assert_eq!(CartView::render(&populated().with_order_sent()), ORDER_SENT_MESSAGE);
        assert_eq!(CartView::render(&CartState::loading()), "");
    }
}
