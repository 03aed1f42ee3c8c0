//! # Product Types
//!
//! Catalog types for reef-store.
//! Products are loaded from `config/products.toml` and never mutated by
//! the cart or checkout layers.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Storefront sections. Closed set: every product belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SecretFish,
    Gamepass,
    SkinCrates,
    EnchantItems,
    BundlePack,
}

impl Category {
    /// Section order as rendered by the storefront
    pub const ALL: [Category; 5] = [
        Category::SecretFish,
        Category::Gamepass,
        Category::SkinCrates,
        Category::EnchantItems,
        Category::BundlePack,
    ];

    /// URL-safe section slug
    pub fn slug(&self) -> &'static str {
        match self {
            Category::SecretFish => "secret-fish",
            Category::Gamepass => "gamepass",
            Category::SkinCrates => "skin-crates",
            Category::EnchantItems => "enchant-items",
            Category::BundlePack => "bundle-pack",
        }
    }

    /// Section heading as shown to the buyer
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::SecretFish => "Secret Fish",
            Category::Gamepass => "Gamepass",
            Category::SkinCrates => "Skin Crates",
            Category::EnchantItems => "Enchant Items",
            Category::BundlePack => "Bundle Pack",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Price in whole rupiah. IDR carries no fractional unit in practice, so
/// one rupiah is the smallest currency unit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Format with id-ID thousands separators (e.g. "Rp 35.000")
    pub fn display(&self) -> String {
        format!("Rp {}", group_thousands(self.0))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Insert a '.' between every group of three digits, id-ID convention
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// A purchasable item in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (e.g. "golden-koi")
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Price,

    /// Storefront section
    pub category: Category,

    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Create a new product
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Price,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            image_url: None,
        }
    }

    /// Builder: set image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Product catalog (loaded from config, read-only at runtime)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Find a product by ID
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in one section, in catalog order
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> StoreResult<Self> {
        toml::from_str(toml_str).map_err(|e| StoreError::Catalog(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
