use serde::{Deserialize, Serialize};
use vmw_api_portal::models::{ProductSummary, ProductsAtoZResponse};
use vmw_core::ApiError;

use crate::CatalogClient;

/// Action linking a catalog entry to its download components page.
pub const VIEW_DOWNLOAD_COMPONENTS: &str = "View Download Components";
/// Download group type of the main product binaries.
pub const PRODUCT_BINARY: &str = "PRODUCT_BINARY";

/// A product version, in the shape the product and related download group endpoints expect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIndexEntry {
    /// Display name.
    pub name: String,
    /// Relative link to the download components page, e.g.
    /// `./info/slug/networking_security/vmware_nsx_t_data_center/3_x`.
    pub target: String,
    /// Category slug.
    pub category: String,
    /// Product slug.
    pub product: String,
    /// Major version slug, e.g. `3_x`.
    pub version: String,
    /// Always [`PRODUCT_BINARY`].
    pub dlg_type: String,
}

impl ProductIndexEntry {
    /// Builds the entry from a catalog product, if it links to a download components page.
    pub fn from_product(product: &ProductSummary) -> Option<Self> {
        let action = product
            .actions
            .iter()
            .find(|action| action.linkname == VIEW_DOWNLOAD_COMPONENTS)?;

        let segments: Vec<&str> = action.target.split('/').collect();
        let Some(&[category, product_slug, version]) = segments.get(3..6) else {
            tracing::warn!(
                name = %product.name,
                target = %action.target,
                "Unexpected download components link"
            );
            return None;
        };

        Some(Self {
            name: product.name.clone(),
            target: action.target.clone(),
            category: category.to_owned(),
            product: product_slug.to_owned(),
            version: version.to_owned(),
            dlg_type: PRODUCT_BINARY.to_owned(),
        })
    }
}

/// Index of the first catalog category. Products without a download components link are
/// skipped.
pub(crate) fn build_product_index(catalog: &ProductsAtoZResponse) -> Vec<ProductIndexEntry> {
    let Some(category) = catalog.product_category_list.first() else {
        return Vec::new();
    };

    category
        .product_list
        .iter()
        .filter_map(|product| {
            let entry = ProductIndexEntry::from_product(product);
            if entry.is_none() {
                tracing::debug!(name = %product.name, "Skipping product without downloads");
            }
            entry
        })
        .collect()
}

impl CatalogClient {
    /// Lists the products of the catalog with the slugs needed to look up their downloads.
    pub async fn product_index(&self) -> Result<Vec<ProductIndexEntry>, ApiError> {
        let catalog = self.get_products().await?;
        Ok(build_product_index(&catalog))
    }
}
