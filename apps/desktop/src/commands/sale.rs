//! # Sale Commands
//!
//! Sales screen events and the history export.
//!
//! ## Register Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register Button                                      │
//! │                                                                         │
//! │  validate_submission()                                                  │
//! │       ├── no product      → "Select a product"        (no write)       │
//! │       └── bad quantity    → "Enter a valid quantity"  (no write)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total empty? → unit_price(product) → finalize()                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SaleRepository::record()  (insert + stock decrement, one transaction) │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Sale registered successfully", fields cleared, recent list reloaded  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use tecpa_core::{Sale, RECENT_SALES_LIMIT};
use tecpa_db::Database;
use tecpa_report::{export_sales_history, ExportOutcome};

use crate::commands::product::{product_names, unit_price};
use crate::error::AppResult;
use crate::state::{AppConfig, SalesForm};

/// Reloads the selector options and the recent-sales table.
pub async fn enter_sales_screen(db: &Database, form: &mut SalesForm) -> AppResult<()> {
    form.product_names = product_names(db).await?;
    form.recent_sales = recent_sales(db).await?;
    debug!(
        products = form.product_names.len(),
        recent = form.recent_sales.len(),
        "Sales screen loaded"
    );
    Ok(())
}

/// Recomputes the total after the quantity text changed.
pub async fn quantity_changed(db: &Database, form: &mut SalesForm) -> AppResult<()> {
    let Some(name) = form.price_lookup() else {
        return Ok(());
    };
    let price = unit_price(db, name).await?;
    form.on_quantity_changed(price);
    Ok(())
}

/// Handles the Register button.
///
/// ## Returns
/// - `Ok(Some(sale))` - recorded, success line added, recent list refreshed
/// - `Ok(None)` - rejected with an inline message, nothing written
/// - `Err(_)` - storage failure, nothing written
pub async fn submit_sale(db: &Database, form: &mut SalesForm) -> AppResult<Option<Sale>> {
    let Some(pending) = form.validate_submission() else {
        return Ok(None);
    };

    let price = if pending.needs_price() {
        unit_price(db, &pending.product_name).await?
    } else {
        None
    };

    let Some(draft) = form.finalize(pending, price) else {
        return Ok(None);
    };

    let sale = db
        .sales()
        .record(&draft.product_name, draft.quantity, draft.total)
        .await?;

    info!(
        id = sale.id,
        product = %sale.product_name,
        quantity = sale.quantity,
        total = %sale.total(),
        "Sale registered"
    );

    form.on_submitted();
    form.recent_sales = recent_sales(db).await?;
    Ok(Some(sale))
}

/// Latest sales for the Sales screen table.
pub async fn recent_sales(db: &Database) -> AppResult<Vec<Sale>> {
    Ok(db.sales().list_recent(RECENT_SALES_LIMIT).await?)
}

/// Writes the full history to the configured file.
pub async fn export_history(db: &Database, config: &AppConfig) -> AppResult<ExportOutcome> {
    let outcome = export_sales_history(db, &config.export_config()).await?;
    info!(notice = %outcome.notice(), "Export finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormMessage, SalesPhase};
    use tecpa_core::{Money, NewProduct, StockPolicy};
    use tecpa_db::DbConfig;

    async fn db_with_cola() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
            .create(&NewProduct {
                name: "Cola".into(),
                category: "Drinks".into(),
                supplier: "Andina".into(),
                purchase_price: Money::from_cents(1000),
            })
            .await
            .unwrap();
        db
    }

    fn config_in(dir: &std::path::Path) -> AppConfig {
        AppConfig {
            database_path: dir.join("stock.db"),
            export_path: dir.join("sales_history.pdf"),
            fonts_dir: None,
            font_family: "DejaVuSans".into(),
            store_name: "TecPa".into(),
            stock_policy: StockPolicy::AllowNegative,
        }
    }

    #[tokio::test]
    async fn test_enter_sales_screen_loads_names() {
        let db = db_with_cola().await;
        let mut form = SalesForm::new();

        enter_sales_screen(&db, &mut form).await.unwrap();
        assert_eq!(form.product_names, vec!["Cola".to_string()]);
        assert!(form.recent_sales.is_empty());
    }

    #[tokio::test]
    async fn test_quantity_changed_computes_total() {
        let db = db_with_cola().await;
        let mut form = SalesForm::new();
        form.select_product("Cola");
        form.quantity_text = "3".into();

        quantity_changed(&db, &mut form).await.unwrap();
        assert_eq!(form.total_text, "30.00");

        form.quantity_text = "x".into();
        quantity_changed(&db, &mut form).await.unwrap();
        assert_eq!(form.total_text, "30.00");
    }

    #[tokio::test]
    async fn test_submit_without_product_writes_nothing() {
        let db = db_with_cola().await;
        let mut form = SalesForm::new();
        form.quantity_text = "3".into();

        assert!(submit_sale(&db, &mut form).await.unwrap().is_none());
        assert_eq!(form.messages, vec![FormMessage::error("Select a product")]);
        assert_eq!(db.sales().count().await.unwrap(), 0);
        assert_eq!(db.products().count().await.unwrap(), 1);
        assert_eq!(db.products().list_summaries().await.unwrap()[0].stock, 0);
    }

    #[tokio::test]
    async fn test_submit_records_and_refreshes() {
        let db = db_with_cola().await;
        let mut form = SalesForm::new();
        form.select_product("Cola");
        form.quantity_text = "3".into();
        quantity_changed(&db, &mut form).await.unwrap();

        let sale = submit_sale(&db, &mut form).await.unwrap().unwrap();
        assert_eq!(sale.quantity, 3);
        assert_eq!(sale.total(), Money::from_cents(3000));

        assert_eq!(form.phase(), SalesPhase::ProductSelected);
        assert_eq!(form.recent_sales.len(), 1);
        assert_eq!(
            form.messages.last(),
            Some(&FormMessage::success("Sale registered successfully"))
        );
        assert_eq!(db.products().list_summaries().await.unwrap()[0].stock, -3);
    }

    #[tokio::test]
    async fn test_submit_with_empty_total_recomputes() {
        let db = db_with_cola().await;
        let mut form = SalesForm::new();
        form.quantity_text = "2".into();
        quantity_changed(&db, &mut form).await.unwrap();
        assert!(form.total_text.is_empty());

        form.select_product("Cola");
        let sale = submit_sale(&db, &mut form).await.unwrap().unwrap();
        assert_eq!(sale.total(), Money::from_cents(2000));
    }

    #[tokio::test]
    async fn test_export_without_sales() {
        let db = db_with_cola().await;
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let outcome = export_history(&db, &config).await.unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert!(!config.export_path.exists());
    }

    #[tokio::test]
    async fn test_export_with_default_config_writes_file() {
        let db = db_with_cola().await;
        let mut form = SalesForm::new();
        form.select_product("Cola");
        form.quantity_text = "2".into();
        submit_sale(&db, &mut form).await.unwrap().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let outcome = export_history(&db, &config).await.unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Written {
                path: config.export_path.clone(),
                rows: 1
            }
        );
        assert!(config.export_path.exists());
    }

    #[tokio::test]
    async fn test_export_with_missing_fonts_fails() {
        let db = db_with_cola().await;
        db.sales()
            .record("Cola", 1, Money::from_cents(1000))
            .await
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            fonts_dir: Some(dir.path().join("fonts")),
            ..config_in(dir.path())
        };

        let err = export_history(&db, &config).await.unwrap_err();
        assert_eq!(err.notice_title(), "Export");
        assert!(!config.export_path.exists());
    }
}
