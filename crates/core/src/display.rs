use crate::{CardPool, ResolvedRoute};

/// Width of the longest card name in the pool, in characters.
pub fn longest_name_len(pool: &CardPool) -> usize {
    pool.iter()
        .map(|card| card.name.chars().count())
        .max()
        .unwrap_or(0)
}

/// Centers `name` in `width` columns; odd padding puts the extra space on the right.
pub fn pad_name(name: &str, width: usize) -> String {
    let len = name.chars().count();
    if len >= width {
        return name.to_string();
    }
    let total = width - len;
    let left = total / 2;
    let right = total - left;
    format!("{}{}{}", " ".repeat(left), name, " ".repeat(right))
}

pub fn format_route(route: &ResolvedRoute<'_>, width: usize) -> String {
    format!(
        "{}\t>\t{}\t>\t{}",
        pad_name(&route.starter.name, width),
        pad_name(&route.bridge.name, width),
        pad_name(&route.target.name, width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Card;

    #[test]
    fn padding_centers_with_extra_space_right() {
        assert_eq!(pad_name("ab", 5), " ab  ");
        assert_eq!(pad_name("abc", 5), " abc ");
        assert_eq!(pad_name("toolong", 3), "toolong");
    }

    #[test]
    fn longest_name_counts_chars() {
        let pool = CardPool::from_cards([
            Card::monster(1, "Ash", "Zombie", "FIRE", 3, 0, 1800),
            Card::monster(2, "Ré", "Zombie", "DARK", 3, 0, 1800),
        ]);
        assert_eq!(longest_name_len(&pool), 3);
        assert_eq!(longest_name_len(&CardPool::default()), 0);
    }

    #[test]
    fn route_line_uses_tab_arrows() {
        let a = Card::monster(1, "A", "Warrior", "EARTH", 4, 1000, 1000);
        let b = Card::monster(2, "Bee", "Warrior", "FIRE", 5, 1100, 1100);
        let route = ResolvedRoute {
            starter: &a,
            bridge: &b,
            target: &a,
        };
        assert_eq!(format_route(&route, 3), " A \t>\tBee\t>\t A ");
    }
}
