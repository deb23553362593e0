pub const CART_TITLE: &str = "Корзина";
pub const CHECKOUT_LABEL: &str = "Далее";
pub const EMPTY_CART_MESSAGE: &str = "Ваша корзина пуста";
pub const ORDER_SENT_MESSAGE: &str = "Заказ успешно отправлен!";

/// Word for "dish" agreeing with `count`: 1 блюдо, 3 блюда, 5 блюд, 11 блюд, 21 блюдо.
pub fn dish_count_label(count: usize) -> &'static str {
    let (last, last_two) = (count % 10, count % 100);
    if last == 1 && last_two != 11 {
        "блюдо"
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        "блюда"
    } else {
        "блюд"
    }
}

/// Amount followed by the currency symbol, e.g. `350 ₽`.
pub fn format_price(amount: i64, currency: &str) -> String {
    format!("{amount} {currency}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_count_label() {
        assert_eq!(dish_count_label(1), "блюдо");
        assert_eq!(dish_count_label(4), "блюда");
        assert_eq!(dish_count_label(5), "блюд");
        assert_eq!(dish_count_label(0), "блюд");
        assert_eq!(dish_count_label(11), "блюд");
        assert_eq!(dish_count_label(12), "блюд");
        assert_eq!(dish_count_label(21), "блюдо");
        assert_eq!(dish_count_label(22), "блюда");
        assert_eq!(dish_count_label(111), "блюд");
    }
}
