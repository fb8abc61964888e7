//! # Sales Form
//!
//! State machine behind the Sales screen.
//!
//! ```text
//!   ┌──────┐  select product   ┌─────────────────┐  type digits   ┌─────────────────┐
//!   │ Idle │ ────────────────► │ ProductSelected │ ─────────────► │ QuantityEntered │
//!   └──────┘                   └─────────────────┘                └────────┬────────┘
//!                                       ▲                                  │
//!                                       │     Register (success):          │
//!                                       └──── quantity and total cleared ◄─┘
//!
//!   Register (failure): one error line appended, state unchanged.
//! ```
//!
//! The selector keeps its value after a successful Register, so the form
//! lands back in `ProductSelected` rather than `Idle`.

use tecpa_core::validation::{parse_quantity, parse_whole_number};
use tecpa_core::{CoreError, Money, Sale};

use super::messages::FormMessage;

pub const SELECT_PRODUCT: &str = "Select a product";
pub const ENTER_VALID_QUANTITY: &str = "Enter a valid quantity";
pub const SALE_REGISTERED: &str = "Sale registered successfully";

/// Derived state of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesPhase {
    Idle,
    ProductSelected,
    QuantityEntered,
}

/// A submission that passed the product and quantity checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSale {
    pub product_name: String,
    pub quantity: i64,
    /// Total currently in the read-only field, if any.
    pub displayed_total: Option<Money>,
}

impl PendingSale {
    /// True when the total has to be recomputed from the unit price.
    pub fn needs_price(&self) -> bool {
        self.displayed_total.is_none()
    }
}

/// What gets handed to Record Sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDraft {
    pub product_name: String,
    pub quantity: i64,
    pub total: Money,
}

#[derive(Debug, Default)]
pub struct SalesForm {
    pub selected_product: Option<String>,
    pub quantity_text: String,
    /// Read-only on screen; only this form writes it.
    pub total_text: String,
    pub messages: Vec<FormMessage>,
    /// Selector options, reloaded each time the screen is entered.
    pub product_names: Vec<String>,
    pub recent_sales: Vec<Sale>,
}

impl SalesForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SalesPhase {
        match &self.selected_product {
            None => SalesPhase::Idle,
            Some(_) if parse_whole_number(&self.quantity_text).is_some()
                && !self.total_text.is_empty() =>
            {
                SalesPhase::QuantityEntered
            }
            Some(_) => SalesPhase::ProductSelected,
        }
    }

    pub fn select_product(&mut self, name: impl Into<String>) {
        self.selected_product = Some(name.into());
    }

    /// Product whose price the quantity field needs, if the typed text is a
    /// whole number and a product is selected.
    pub fn price_lookup(&self) -> Option<&str> {
        parse_whole_number(&self.quantity_text)?;
        self.selected_product.as_deref()
    }

    /// Recomputes the displayed total after a quantity keystroke.
    ///
    /// Non-numeric text, an unknown price or an overflowing product leaves
    /// the previous total in place.
    pub fn on_quantity_changed(&mut self, unit_price: Option<Money>) {
        let (Some(quantity), Some(price)) = (parse_whole_number(&self.quantity_text), unit_price)
        else {
            return;
        };

        if let Some(total) = price.checked_multiply_quantity(quantity) {
            self.total_text = total.to_plain_string();
        }
    }

    /// First half of Register: product, then quantity.
    ///
    /// Each failure appends one error line and returns `None`.
    pub fn validate_submission(&mut self) -> Option<PendingSale> {
        let Some(product_name) = self.selected_product.clone() else {
            self.messages.push(FormMessage::error(SELECT_PRODUCT));
            return None;
        };

        let Ok(quantity) = parse_quantity(&self.quantity_text) else {
            self.messages.push(FormMessage::error(ENTER_VALID_QUANTITY));
            return None;
        };

        let displayed_total = if self.total_text.is_empty() {
            None
        } else {
            Money::parse(&self.total_text).ok()
        };

        Some(PendingSale {
            product_name,
            quantity,
            displayed_total,
        })
    }

    /// Second half of Register: settles the total.
    ///
    /// The displayed total wins. Without one, `unit_price` times the quantity
    /// is used; a product that cannot be priced gets an error line.
    pub fn finalize(&mut self, pending: PendingSale, unit_price: Option<Money>) -> Option<SaleDraft> {
        let total = match pending.displayed_total {
            Some(total) => total,
            None => {
                let Some(price) = unit_price else {
                    self.messages.push(FormMessage::error(
                        CoreError::ProductNotFound(pending.product_name).to_string(),
                    ));
                    return None;
                };
                let Some(total) = price.checked_multiply_quantity(pending.quantity) else {
                    self.messages.push(FormMessage::error(
                        CoreError::TotalOverflow {
                            quantity: pending.quantity,
                        }
                        .to_string(),
                    ));
                    return None;
                };
                total
            }
        };

        Some(SaleDraft {
            product_name: pending.product_name,
            quantity: pending.quantity,
            total,
        })
    }

    /// After Record Sale succeeded. The selector is left as it was.
    pub fn on_submitted(&mut self) {
        self.messages.push(FormMessage::success(SALE_REGISTERED));
        self.quantity_text.clear();
        self.total_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(product: Option<&str>, quantity: &str) -> SalesForm {
        SalesForm {
            selected_product: product.map(String::from),
            quantity_text: quantity.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_phases() {
        let mut form = SalesForm::new();
        assert_eq!(form.phase(), SalesPhase::Idle);

        form.select_product("Cola");
        assert_eq!(form.phase(), SalesPhase::ProductSelected);

        form.quantity_text = "3".into();
        form.on_quantity_changed(Some(Money::from_cents(1000)));
        assert_eq!(form.phase(), SalesPhase::QuantityEntered);

        form.on_submitted();
        assert_eq!(form.phase(), SalesPhase::ProductSelected);
        assert_eq!(form.selected_product.as_deref(), Some("Cola"));
    }

    #[test]
    fn test_total_computed_from_unit_price() {
        let mut form = form_with(Some("Cola"), "3");
        form.on_quantity_changed(Some(Money::from_cents(1000)));
        assert_eq!(form.total_text, "30.00");
    }

    #[test]
    fn test_non_numeric_quantity_keeps_previous_total() {
        let mut form = form_with(Some("Cola"), "3");
        form.on_quantity_changed(Some(Money::from_cents(1000)));

        for text in ["3a", "", " 3", "-1", "2.5"] {
            form.quantity_text = text.into();
            assert_eq!(form.price_lookup(), None);
            form.on_quantity_changed(Some(Money::from_cents(1000)));
            assert_eq!(form.total_text, "30.00", "after {:?}", text);
        }
    }

    #[test]
    fn test_overflowing_quantity_keeps_previous_total() {
        let mut form = form_with(Some("Cola"), "2");
        form.on_quantity_changed(Some(Money::from_cents(150)));
        form.quantity_text = i64::MAX.to_string();
        form.on_quantity_changed(Some(Money::from_cents(150)));
        assert_eq!(form.total_text, "3.00");
    }

    #[test]
    fn test_price_lookup_needs_product() {
        assert_eq!(form_with(None, "3").price_lookup(), None);
        assert_eq!(form_with(Some("Cola"), "3").price_lookup(), Some("Cola"));
    }

    #[test]
    fn test_submit_without_product() {
        let mut form = form_with(None, "3");
        assert!(form.validate_submission().is_none());
        assert_eq!(form.messages, vec![FormMessage::error(SELECT_PRODUCT)]);
    }

    #[test]
    fn test_submit_with_bad_quantity_accumulates() {
        let mut form = form_with(Some("Cola"), "0");
        assert!(form.validate_submission().is_none());
        form.quantity_text = "abc".into();
        assert!(form.validate_submission().is_none());

        assert_eq!(
            form.messages,
            vec![
                FormMessage::error(ENTER_VALID_QUANTITY),
                FormMessage::error(ENTER_VALID_QUANTITY),
            ]
        );
    }

    #[test]
    fn test_displayed_total_is_used() {
        let mut form = form_with(Some("Cola"), "3");
        form.total_text = "30.00".into();

        let pending = form.validate_submission().unwrap();
        assert!(!pending.needs_price());

        let draft = form.finalize(pending, None).unwrap();
        assert_eq!(
            draft,
            SaleDraft {
                product_name: "Cola".into(),
                quantity: 3,
                total: Money::from_cents(3000),
            }
        );
    }

    #[test]
    fn test_switching_product_keeps_stale_total() {
        let mut form = form_with(Some("Cola"), "3");
        form.on_quantity_changed(Some(Money::from_cents(1000)));
        assert_eq!(form.total_text, "30.00");

        // Only a quantity change recomputes; the Gum price is never looked up.
        form.select_product("Gum");
        assert_eq!(form.total_text, "30.00");
        assert_eq!(form.phase(), SalesPhase::QuantityEntered);

        let pending = form.validate_submission().unwrap();
        assert!(!pending.needs_price());
        let draft = form.finalize(pending, None).unwrap();
        assert_eq!(
            draft,
            SaleDraft {
                product_name: "Gum".into(),
                quantity: 3,
                total: Money::from_cents(3000),
            }
        );
    }

    #[test]
    fn test_empty_total_is_recomputed() {
        let mut form = form_with(Some("Cola"), "4");
        let pending = form.validate_submission().unwrap();
        assert!(pending.needs_price());

        let draft = form.finalize(pending, Some(Money::from_cents(250))).unwrap();
        assert_eq!(draft.total, Money::from_cents(1000));
    }

    #[test]
    fn test_unpriceable_product() {
        let mut form = form_with(Some("Ghost"), "1");
        let pending = form.validate_submission().unwrap();
        assert!(form.finalize(pending, None).is_none());
        assert_eq!(form.messages.len(), 1);
        assert!(form.messages[0].is_error());
        assert!(form.messages[0].text.contains("Ghost"));
    }

    #[test]
    fn test_on_submitted() {
        let mut form = form_with(Some("Cola"), "3");
        form.total_text = "30.00".into();
        form.on_submitted();

        assert!(form.quantity_text.is_empty());
        assert!(form.total_text.is_empty());
        assert_eq!(form.messages, vec![FormMessage::success(SALE_REGISTERED)]);
    }
}
