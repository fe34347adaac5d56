//! Static product catalog.
//!
//! The shop sells from two fixed lists (river and sea catch). They are
//! merged once on first access; prices arrive as display strings and are
//! normalized to whole rupees for cart math.

use once_cell::sync::Lazy;

/// One sellable catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    /// Currency-formatted display price, shown verbatim on the card.
    pub price: &'static str,
    pub image: &'static str,
    /// Whole-rupee price derived from `price`; 0 when the display string
    /// carries no digits.
    pub price_num: u32,
}

struct RawProduct {
    id: u32,
    name: &'static str,
    category: &'static str,
    price: &'static str,
    image: &'static str,
}

const RIVER_FISH: &[RawProduct] = &[
    RawProduct {
        id: 1,
        name: "Rohu",
        category: "river_water",
        price: "₹ 300.00",
        image: "/images/rohu.jpg",
    },
    RawProduct {
        id: 2,
        name: "Katla",
        category: "river_water",
        price: "₹ 350.00",
        image: "/images/katla.jpg",
    },
    RawProduct {
        id: 3,
        name: "Hilsa",
        category: "river_water",
        price: "₹ 1,250.00",
        image: "/images/hilsa.jpg",
    },
    RawProduct {
        id: 4,
        name: "Pabda",
        category: "river_water",
        price: "₹ 550.00",
        image: "/images/pabda.jpg",
    },
];

const SEA_FISH: &[RawProduct] = &[
    RawProduct {
        id: 101,
        name: "Pomfret",
        category: "sea_water",
        price: "₹ 450.00",
        image: "/images/pomfret.jpg",
    },
    RawProduct {
        id: 102,
        name: "Surmai",
        category: "sea_water",
        price: "₹ 800.00",
        image: "/images/surmai.jpg",
    },
    RawProduct {
        id: 103,
        name: "Bangda",
        category: "sea_water",
        price: "₹ 240.00",
        image: "/images/bangda.jpg",
    },
    RawProduct {
        id: 104,
        name: "Prawns",
        category: "sea_water",
        price: "₹ 600.00",
        image: "/images/prawns.jpg",
    },
];

/// Normalize a display price into whole rupees.
///
/// Keeps only ASCII digits and the decimal point, parses the residue as a
/// float and rounds. Anything unparseable (including a digit-free string)
/// yields 0, never an error.
pub fn normalize_price(display: &str) -> u32 {
    let residue: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    residue
        .parse::<f64>()
        .map(|value| value.round() as u32)
        .unwrap_or(0)
}

/// The merged river + sea catalog, normalized once and never re-fetched.
pub fn all_products() -> &'static [Product] {
    static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
        RIVER_FISH
            .iter()
            .chain(SEA_FISH.iter())
            .map(|raw| Product {
                id: raw.id,
                name: raw.name,
                category: raw.category,
                price: raw.price,
                image: raw.image,
                price_num: normalize_price(raw.price),
            })
            .collect()
    });
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_currency_strings() {
        assert_eq!(normalize_price("₹ 1,250.00"), 1250);
        assert_eq!(normalize_price("₹ 300.00"), 300);
        assert_eq!(normalize_price("240"), 240);
    }

    #[test]
    fn digit_free_string_yields_zero() {
        assert_eq!(normalize_price("market price"), 0);
        assert_eq!(normalize_price(""), 0);
    }

    #[test]
    fn unparseable_residue_yields_zero() {
        // two decimal points survive the filter but fail the parse
        assert_eq!(normalize_price("₹ 1.250.00"), 0);
    }

    #[test]
    fn rounds_to_nearest_rupee() {
        assert_eq!(normalize_price("₹ 99.50"), 100);
        assert_eq!(normalize_price("₹ 99.49"), 99);
    }

    #[test]
    fn catalog_is_merged_river_first() {
        let products = all_products();
        assert_eq!(products.len(), RIVER_FISH.len() + SEA_FISH.len());
        assert_eq!(products[0].name, "Rohu");
        assert!(products.iter().all(|p| p.price_num == normalize_price(p.price)));
        assert!(products
            .iter()
            .skip(RIVER_FISH.len())
            .all(|p| p.category == "sea_water"));
    }
}
