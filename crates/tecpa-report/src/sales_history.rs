//! # Sales History Export
//!
//! ## Document Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sales History - TecPa                              │
//! │                    Generated on: 2026-10-15                             │
//! │                                                                         │
//! │  ┌──────────┬──────────┬────────────────┬──────────┬──────────┐        │
//! │  │ Date     │ Time     │ Product        │ Quantity │ Total    │        │
//! │  ├──────────┼──────────┼────────────────┼──────────┼──────────┤        │
//! │  │2026-10-15│ 09:30:12 │ Cola 330ml     │ 3        │ $3.60    │        │
//! │  │2026-10-14│ 18:02:45 │ Yerba Mate 1kg │ 1        │ $4.10    │        │
//! │  └──────────┴──────────┴────────────────┴──────────┴──────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table model ([`SalesHistoryReport`]) holds exactly the strings that
//! end up in the document. Rendering only arranges them.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use genpdf::{elements, style, Alignment, Element};
use tracing::{debug, info};

use tecpa_core::Sale;
use tecpa_db::Database;

use crate::error::{ReportError, ReportResult};

/// Header cells, in column order.
pub const COLUMNS: [&str; 5] = ["Date", "Time", "Product", "Quantity", "Total"];

/// Relative column widths (the product column is the wide one).
const COLUMN_WEIGHTS: [usize; 5] = [3, 3, 5, 3, 3];

// =============================================================================
// Export Configuration
// =============================================================================

/// DejaVu Sans, compiled in so the default configuration always renders.
/// License: `fonts/LICENSE-DejaVu.txt`.
const BUNDLED_REGULAR: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");
const BUNDLED_BOLD: &[u8] = include_bytes!("../fonts/DejaVuSans-Bold.ttf");
const BUNDLED_ITALIC: &[u8] = include_bytes!("../fonts/DejaVuSans-Oblique.ttf");
const BUNDLED_BOLD_ITALIC: &[u8] = include_bytes!("../fonts/DejaVuSans-BoldOblique.ttf");

/// Where the document's font family comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontSource {
    /// The DejaVu Sans family shipped inside this crate.
    #[default]
    Bundled,

    /// `<dir>/<family>-Regular.ttf`, `-Bold`, `-Italic`, `-BoldItalic`.
    Directory { dir: PathBuf, family: String },
}

/// Where and how the history document is written.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output file, overwritten on every export.
    pub output_path: PathBuf,

    pub fonts: FontSource,

    /// Store name shown in the title line.
    pub store_name: String,
}

impl ExportConfig {
    /// Bundled fonts, store name "TecPa".
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        ExportConfig {
            output_path: output_path.into(),
            fonts: FontSource::Bundled,
            store_name: "TecPa".to_string(),
        }
    }

    /// Loads the font family from `dir` instead of the bundled one.
    pub fn fonts(mut self, dir: impl Into<PathBuf>, family: impl Into<String>) -> Self {
        self.fonts = FontSource::Directory {
            dir: dir.into(),
            family: family.into(),
        };
        self
    }

    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = name.into();
        self
    }
}

/// What an export did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written with one row per sale.
    Written { path: PathBuf, rows: usize },

    /// There were no sales; no file was touched.
    NothingToExport,
}

impl ExportOutcome {
    /// Text for the notice shown after an export.
    pub fn notice(&self) -> String {
        match self {
            ExportOutcome::Written { path, .. } => {
                let file = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!("Sales history exported to '{}'.", file)
            }
            ExportOutcome::NothingToExport => "No sales to export.".to_string(),
        }
    }
}

// =============================================================================
// Report Model
// =============================================================================

/// One table row, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub date: String,
    pub time: String,
    pub product: String,
    pub quantity: String,
    pub total: String,
}

impl ReportRow {
    fn from_sale(sale: &Sale) -> Self {
        ReportRow {
            date: sale.date.format("%Y-%m-%d").to_string(),
            time: sale.time.format("%H:%M:%S").to_string(),
            product: sale.product_name.clone(),
            quantity: sale.quantity.to_string(),
            total: sale.total().to_string(),
        }
    }

    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.date.as_str(),
            self.time.as_str(),
            self.product.as_str(),
            self.quantity.as_str(),
            self.total.as_str(),
        ]
    }
}

/// Everything the history document shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesHistoryReport {
    pub title: String,
    pub generated_line: String,
    pub rows: Vec<ReportRow>,
}

impl SalesHistoryReport {
    /// Builds the report, keeping the order of `sales`.
    pub fn from_sales(store_name: &str, generated_on: NaiveDate, sales: &[Sale]) -> Self {
        SalesHistoryReport {
            title: format!("Sales History - {}", store_name),
            generated_line: format!("Generated on: {}", generated_on.format("%Y-%m-%d")),
            rows: sales.iter().map(ReportRow::from_sale).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Export
// =============================================================================

/// Exports every sale, newest date first, to `config.output_path`.
///
/// With zero sales nothing is written and
/// [`ExportOutcome::NothingToExport`] is returned.
pub async fn export_sales_history(
    db: &Database,
    config: &ExportConfig,
) -> ReportResult<ExportOutcome> {
    let sales = db.sales().list_all().await?;

    if sales.is_empty() {
        info!("No sales to export");
        return Ok(ExportOutcome::NothingToExport);
    }

    let report = SalesHistoryReport::from_sales(
        &config.store_name,
        Local::now().date_naive(),
        &sales,
    );

    render_pdf(&report, config)?;

    info!(
        path = %config.output_path.display(),
        rows = report.rows.len(),
        "Sales history exported"
    );

    Ok(ExportOutcome::Written {
        path: config.output_path.clone(),
        rows: report.rows.len(),
    })
}

/// Lays out `report` and writes it to `config.output_path`.
///
/// The document is rendered in memory first, so a failed render leaves any
/// earlier export untouched.
pub fn render_pdf(report: &SalesHistoryReport, config: &ExportConfig) -> ReportResult<()> {
    let font_family = load_fonts(&config.fonts)?;

    let mut doc = genpdf::Document::new(font_family);
    doc.set_title(report.title.clone());
    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    doc.push(
        elements::Paragraph::new(report.title.clone())
            .aligned(Alignment::Center)
            .styled(style::Style::new().bold().with_font_size(14)),
    );
    doc.push(elements::Paragraph::new(report.generated_line.clone()).aligned(Alignment::Center));
    doc.push(elements::Break::new(1.5));

    let mut table = elements::TableLayout::new(COLUMN_WEIGHTS.to_vec());
    table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

    let bold = style::Style::new().bold();
    let mut header = table.row();
    for column in COLUMNS {
        header.push_element(elements::Paragraph::new(column).styled(bold));
    }
    header.push()?;

    for row in &report.rows {
        let mut table_row = table.row();
        for cell in row.cells() {
            table_row.push_element(elements::Paragraph::new(cell.to_string()));
        }
        table_row.push()?;
    }

    doc.push(table);

    let mut buffer = Vec::new();
    doc.render(&mut buffer)?;

    std::fs::write(&config.output_path, &buffer).map_err(|e| {
        ReportError::Render(format!(
            "cannot write {}: {}",
            config.output_path.display(),
            e
        ))
    })?;

    debug!(bytes = buffer.len(), "PDF written");
    Ok(())
}

type Fonts = genpdf::fonts::FontFamily<genpdf::fonts::FontData>;

fn load_fonts(source: &FontSource) -> ReportResult<Fonts> {
    match source {
        FontSource::Bundled => bundled_fonts(),
        FontSource::Directory { dir, family } => {
            genpdf::fonts::from_files(dir, family, None).map_err(|_| {
                ReportError::FontNotFound(format!(
                    "font family '{}' not found in {}",
                    family,
                    dir.display()
                ))
            })
        }
    }
}

fn bundled_fonts() -> ReportResult<Fonts> {
    let load = |bytes: &[u8]| {
        genpdf::fonts::FontData::new(bytes.to_vec(), None)
            .map_err(|e| ReportError::FontNotFound(format!("bundled font is unreadable: {}", e)))
    };

    Ok(genpdf::fonts::FontFamily {
        regular: load(BUNDLED_REGULAR)?,
        bold: load(BUNDLED_BOLD)?,
        italic: load(BUNDLED_ITALIC)?,
        bold_italic: load(BUNDLED_BOLD_ITALIC)?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use tecpa_core::{Money, NewProduct};
    use tecpa_db::DbConfig;

    fn sale(id: i64, day: u32, product: &str, quantity: i64, cents: i64) -> Sale {
        Sale {
            id,
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 12).unwrap(),
            product_name: product.to_string(),
            quantity,
            total_cents: cents,
        }
    }

    async fn db_with_sales(n: usize) -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
            .create(&NewProduct {
                name: "Cola".to_string(),
                category: "Drinks".to_string(),
                supplier: "Acme".to_string(),
                purchase_price: Money::from_cents(120),
            })
            .await
            .unwrap();
        for i in 0..n {
            let qty = (i + 1) as i64;
            db.sales()
                .record("Cola", qty, Money::from_cents(120).multiply_quantity(qty))
                .await
                .unwrap();
        }
        db
    }

    #[test]
    fn test_report_rows_and_formatting() {
        let sales = vec![
            sale(2, 15, "Cola 330ml", 3, 360),
            sale(1, 14, "Yerba Mate 1kg", 1, 410),
            sale(3, 14, "Gum", 10, 5000),
        ];
        let generated = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let report = SalesHistoryReport::from_sales("TecPa", generated, &sales);

        assert_eq!(report.title, "Sales History - TecPa");
        assert_eq!(report.generated_line, "Generated on: 2026-10-15");
        assert_eq!(report.rows.len(), 3);
        assert_eq!(
            report.rows[0].cells(),
            ["2026-10-15", "09:30:12", "Cola 330ml", "3", "$3.60"]
        );
        assert_eq!(report.rows[2].total, "$50.00");

        // Every total has a currency symbol and exactly two decimals
        for row in &report.rows {
            let amount = row.total.strip_prefix('$').unwrap();
            let (_, cents) = amount.split_once('.').unwrap();
            assert_eq!(cents.len(), 2);
        }
    }

    #[test]
    fn test_notices() {
        assert_eq!(ExportOutcome::NothingToExport.notice(), "No sales to export.");
        let written = ExportOutcome::Written {
            path: PathBuf::from("/tmp/out/sales_history.pdf"),
            rows: 4,
        };
        assert_eq!(
            written.notice(),
            "Sales history exported to 'sales_history.pdf'."
        );
    }

    #[tokio::test]
    async fn test_export_with_no_sales_writes_nothing() {
        let db = db_with_sales(0).await;
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sales_history.pdf");

        let outcome = export_sales_history(&db, &ExportConfig::new(&out))
            .await
            .unwrap();

        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_missing_fonts_is_surfaced_and_writes_nothing() {
        let db = db_with_sales(2).await;
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sales_history.pdf");
        let config = ExportConfig::new(&out).fonts(dir.path().join("no-fonts"), "Missing");

        let err = export_sales_history(&db, &config).await.unwrap_err();

        assert!(matches!(err, ReportError::FontNotFound(_)));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_default_config_writes_one_row_per_sale() {
        let db = db_with_sales(3).await;
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sales_history.pdf");
        let config = ExportConfig::new(&out);
        assert_eq!(config.fonts, FontSource::Bundled);

        let outcome = export_sales_history(&db, &config).await.unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Written {
                path: out.clone(),
                rows: 3
            }
        );
        let first = std::fs::read(&out).unwrap();
        assert!(first.starts_with(b"%PDF"));

        // A second export overwrites the first
        db.sales()
            .record("Cola", 1, Money::from_cents(120))
            .await
            .unwrap();
        let outcome = export_sales_history(&db, &config).await.unwrap();
        assert!(matches!(outcome, ExportOutcome::Written { rows: 4, .. }));

        let second = std::fs::read(&out).unwrap();
        assert!(second.starts_with(b"%PDF"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_render_many_rows_across_pages() {
        let generated = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let sales: Vec<Sale> = (0..120)
            .map(|i| sale(i, 1 + (i as u32 % 28), "Yerba Mate 1kg", i + 1, 410 * (i + 1)))
            .collect();
        let report = SalesHistoryReport::from_sales("TecPa", generated, &sales);
        assert_eq!(report.rows.len(), 120);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("long.pdf");
        render_pdf(&report, &ExportConfig::new(&out)).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_failed_render_keeps_previous_file() {
        let generated = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let report =
            SalesHistoryReport::from_sales("TecPa", generated, &[sale(1, 15, "Cola", 1, 120)]);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sales_history.pdf");
        std::fs::write(&out, b"previous export").unwrap();

        let config = ExportConfig::new(&out).fonts(dir.path(), "Missing");
        assert!(matches!(
            render_pdf(&report, &config),
            Err(ReportError::FontNotFound(_))
        ));
        assert_eq!(std::fs::read(&out).unwrap(), b"previous export");
    }
}
