//! Starter catalog for fresh installations and local demos.

use rust_decimal::{Decimal, dec};

use crate::{
    database::CatalogStore,
    error::Result,
    models::{NewCategory, NewProduct},
};

struct SeedCategory {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    products: &'static [(&'static str, Decimal, bool)],
}

const CATALOG: &[SeedCategory] = &[
    SeedCategory {
        name: "Hijab",
        slug: "hijab",
        description: "Beautiful hijabs in various styles and colors perfect for daily wear and special occasions",
        products: &[
            ("Premium Silk Hijab - Midnight Blue", dec!(45.00), true),
            ("Chiffon Square Hijab - Rose Gold", dec!(25.00), true),
            ("Cotton Jersey Hijab - Classic Black", dec!(18.00), false),
            ("Bamboo Fiber Hijab - Forest Green", dec!(32.00), false),
            ("Instant Hijab - Elegant Cream", dec!(22.00), true),
        ],
    },
    SeedCategory {
        name: "Tudung",
        slug: "tudung",
        description: "Traditional Malaysian tudung collection featuring premium fabrics and elegant designs",
        products: &[
            ("Tudung Bawal Premium - Royal Purple", dec!(38.00), true),
            ("Tudung Sarung - Traditional Batik", dec!(42.00), false),
            ("Tudung Lycra - Soft Pink", dec!(28.00), false),
            ("Tudung Chiffon - Ocean Blue", dec!(35.00), true),
        ],
    },
    SeedCategory {
        name: "Caps",
        slug: "caps",
        description: "Stylish caps and headwear for men and women, perfect for casual and sports activities",
        products: &[
            ("Unisex Baseball Cap - Navy", dec!(15.00), false),
            ("Snapback Cap - Urban Grey", dec!(20.00), false),
            ("Sports Cap - Athletic Red", dec!(18.00), false),
        ],
    },
    SeedCategory {
        name: "Hats",
        slug: "hats",
        description: "Fashion hats for all occasions - from sun hats to formal headwear",
        products: &[
            ("Wide Brim Sun Hat - Natural Straw", dec!(35.00), true),
            ("Vintage Fedora - Charcoal", dec!(55.00), false),
            ("Bucket Hat - Floral Print", dec!(22.00), false),
        ],
    },
    SeedCategory {
        name: "Accessories",
        slug: "accessories",
        description: "Hijab pins, clips, brooches and other accessories to complete your look",
        products: &[
            ("Magnetic Hijab Pin Set - Gold Tone", dec!(12.00), false),
            ("Pearl Brooch Collection", dec!(25.00), true),
            ("Under Cap Set - 3 Colors", dec!(15.00), false),
        ],
    },
];

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/600x600";

fn description_for(category: &str) -> String {
    format!(
        "High-quality {} made from premium materials. Perfect for international buyers looking for authentic Malaysian headwear. Each piece is carefully crafted with attention to detail and comfort. Suitable for daily wear and special occasions. Available in multiple colors and sizes to meet your specific requirements.",
        category.to_lowercase()
    )
}

fn images_for(category: &str) -> Vec<String> {
    vec![
        format!("{}/4F46E5/ffffff?text={}", PLACEHOLDER_BASE, category.replace(' ', "+")),
        format!("{}/7C3AED/ffffff?text=Detail", PLACEHOLDER_BASE),
        format!("{}/EC4899/ffffff?text=Style", PLACEHOLDER_BASE),
    ]
}

/// Loads the starter catalog unless the store already has categories.
/// Returns the number of products created.
pub async fn seed_catalog(store: &dyn CatalogStore) -> Result<usize> {
    if !store.categories_with_available_count().await?.is_empty() {
        tracing::info!("Catalog already populated, skipping seed");
        return Ok(0);
    }

    let mut created = 0;

    for entry in CATALOG {
        let category = store
            .create_category(
                NewCategory::new(entry.name)
                    .with_slug(entry.slug)
                    .with_description(entry.description),
            )
            .await?;

        for (name, price, featured) in entry.products {
            store
                .create_product(
                    NewProduct::new(*name, category.id)
                        .with_description(description_for(entry.name))
                        .with_price(*price)
                        .with_images(images_for(entry.name))
                        .featured(*featured),
                )
                .await?;
            created += 1;
        }
    }

    tracing::info!(
        "Seeded {} categories and {} products",
        CATALOG.len(),
        created
    );

    Ok(created)
}
