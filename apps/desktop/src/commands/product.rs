//! # Product Commands
//!
//! Product Entry submission and the Stock Management listing.

use tracing::{debug, info};

use tecpa_core::{Money, Product, ProductSummary};
use tecpa_db::Database;

use crate::error::AppResult;
use crate::state::ProductEntryForm;

/// Validates the Product Entry form and inserts the product.
///
/// ## Returns
/// - `Ok(Some(product))` - inserted with stock 0, fields cleared
/// - `Ok(None)` - invalid input, an error line was added to the form
/// - `Err(_)` - storage failure, the form is untouched
pub async fn submit_product(
    db: &Database,
    form: &mut ProductEntryForm,
) -> AppResult<Option<Product>> {
    let Some(new_product) = form.validate() else {
        debug!("submit_product rejected by validation");
        return Ok(None);
    };

    let product = db.products().create(&new_product).await?;
    info!(id = product.id, name = %product.name, "Product added");

    form.on_created(&product);
    Ok(Some(product))
}

/// Rows for the Stock Management table, in insertion order.
pub async fn list_products(db: &Database) -> AppResult<Vec<ProductSummary>> {
    let products = db.products().list_summaries().await?;
    debug!(count = products.len(), "list_products command");
    Ok(products)
}

/// Options for the Sales product selector, one per row.
pub async fn product_names(db: &Database) -> AppResult<Vec<String>> {
    Ok(db.products().list_names().await?)
}

/// Purchase price of the first product named `name`.
pub async fn unit_price(db: &Database, name: &str) -> AppResult<Option<Money>> {
    Ok(db.products().unit_price(name).await?)
}
