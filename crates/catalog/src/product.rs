use serde::{Deserialize, Serialize};

use shophub_core::{Entity, ProductId};

/// Catalog product record.
///
/// Immutable once the catalog is built. `image` is an opaque display token
/// (the storefront renders it as-is); the engine never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in whole currency units (the catalog carries no minor units).
    pub price: u64,
    pub category: String,
    pub image: String,
    pub description: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: u64,
        category: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
            description: description.into(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
