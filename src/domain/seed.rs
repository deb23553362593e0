use super::CartItem;

const CURRENCY: &str = "₽";

/// Demo fixture the store starts with. Not persisted.
pub fn seed_items() -> Vec<CartItem> {
    vec![
        line(
            "1",
            "Суп Том Ям с морепродуктами",
            99,
            "https://i.pinimg.com/736x/70/b0/d5/70b0d50c800039db6f1d58273efbf542.jpg",
        ),
        line(
            "2",
            "Поке с индейкой и чуккой",
            2,
            "http://localhost:8080/poke_with_chiken.png",
        ),
        line(
            "3",
            "Поке с тунцом, лососем, авокадо, чеддером",
            1,
            "http://localhost:8080/poke_with_chiken",
        ),
        line(
            "4",
            "Блинчики с малиной и маскарпоне",
            99,
            "https://i.pinimg.com/736x/70/b0/d5/70b0d50c800039db6f1d58273efbf542.jpg",
        ),
    ]
}

fn line(id: &str, name: &str, count: u32, image_url: &str) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: name.to_string(),
        count,
        price: 100,
        currency: CURRENCY.to_string(),
        image_url: image_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_items_are_valid() {
        for item in seed_items() {
            assert_eq!(item.validate(), Ok(()), "seed item {} is invalid", item.id);
        }
    }
}
