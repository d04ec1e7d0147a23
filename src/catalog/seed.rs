use super::{Catalog, Product};
use crate::error::ShopMuseResult;

/// Built-in demo catalog. Loaded once at startup and never mutated.
pub fn seed() -> ShopMuseResult<Catalog> {
    Catalog::from_products(vec![
        product(
            1,
            "Floral Party Dress",
            899,
            Some(1299),
            "https://images.shopmuse.demo/floral-party-dress.jpg",
            "dress",
            &["party", "feminine"],
            &["party", "floral", "pink"],
            "romantic",
            "A playful floral print dress made for celebrations, with a flattering wrap silhouette.",
            Some(4.5),
            Some(128),
        ),
        product(
            2,
            "Classic Evening Gown",
            1499,
            None,
            "https://images.shopmuse.demo/classic-evening-gown.jpg",
            "dress",
            &["elegant", "evening"],
            &["formal", "black"],
            "elegant",
            "Floor-length gown in matte crepe with a subtle side slit for formal evenings.",
            Some(4.7),
            Some(86),
        ),
        product(
            3,
            "Minimal White Tee",
            399,
            None,
            "https://images.shopmuse.demo/minimal-white-tee.jpg",
            "top",
            &["minimal", "casual"],
            &["white", "basic", "cotton"],
            "casual",
            "Everyday organic cotton tee with a relaxed fit and clean lines.",
            Some(4.2),
            Some(311),
        ),
        product(
            4,
            "Elegant Silk Blouse",
            1199,
            Some(1499),
            "https://images.shopmuse.demo/elegant-silk-blouse.jpg",
            "top",
            &["elegant", "professional"],
            &["silk", "cream", "office"],
            "elegant",
            "Lustrous mulberry silk blouse with covered buttons, dressy enough for client days.",
            Some(4.6),
            Some(54),
        ),
        product(
            5,
            "High-Waist Blue Jeans",
            999,
            None,
            "https://images.shopmuse.demo/high-waist-blue-jeans.jpg",
            "bottom",
            &["casual", "modern"],
            &["blue", "denim"],
            "casual",
            "Stretch denim with a high rise and tapered leg that works from brunch to errands.",
            Some(4.4),
            Some(203),
        ),
        product(
            6,
            "Structured Work Blazer",
            1899,
            None,
            "https://images.shopmuse.demo/structured-work-blazer.jpg",
            "jacket",
            &["professional", "business", "structured"],
            &["office", "navy"],
            "professional",
            "Sharp single-breasted blazer with padded shoulders and a nipped waist.",
            Some(4.8),
            Some(41),
        ),
        product(
            7,
            "Cozy Knit Sweater",
            799,
            Some(999),
            "https://images.shopmuse.demo/cozy-knit-sweater.jpg",
            "sweater",
            &["cozy", "comfortable"],
            &["winter", "knitwear", "beige"],
            "cozy",
            "Chunky cable knit in a soft wool blend, the one you reach for all winter.",
            Some(4.3),
            Some(167),
        ),
        product(
            8,
            "Boho Maxi Skirt",
            699,
            None,
            "https://images.shopmuse.demo/boho-maxi-skirt.jpg",
            "bottom",
            &["boho", "flowy"],
            &["bohemian", "print", "maroon"],
            "boho",
            "Tiered maxi skirt in a hand-drawn paisley print with an elastic waist.",
            Some(4.1),
            Some(92),
        ),
        product(
            9,
            "Vintage Denim Jacket",
            1299,
            None,
            "https://images.shopmuse.demo/vintage-denim-jacket.jpg",
            "jacket",
            &["vintage", "casual"],
            &["retro", "blue", "denim"],
            "vintage",
            "Stonewashed trucker jacket with a broken-in feel straight off the rack.",
            Some(4.5),
            Some(138),
        ),
        product(
            10,
            "Black Party Heels",
            1099,
            Some(1399),
            "https://images.shopmuse.demo/black-party-heels.jpg",
            "shoes",
            &["party", "elegant"],
            &["heels", "black", "evening"],
            "party",
            "Pointed-toe stilettos with a cushioned footbed so the night lasts longer.",
            Some(4.0),
            Some(77),
        ),
    ])
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    price: u32,
    original_price: Option<u32>,
    image: &str,
    category: &str,
    style: &[&str],
    tags: &[&str],
    sentiment: &str,
    description: &str,
    rating: Option<f32>,
    reviews: Option<u32>,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        original_price,
        image: image.to_string(),
        category: category.to_string(),
        style: style.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        sentiment: sentiment.to_string(),
        description: description.to_string(),
        rating,
        reviews,
    }
}
