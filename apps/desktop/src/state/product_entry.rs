//! Product Entry form state.

use tecpa_core::validation::validate_new_product;
use tecpa_core::{NewProduct, Product};

use super::messages::FormMessage;

/// Text fields of the Product Entry screen plus its message log.
#[derive(Debug, Default)]
pub struct ProductEntryForm {
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub purchase_price: String,
    pub messages: Vec<FormMessage>,
}

impl ProductEntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the fields.
    ///
    /// On failure an error line is appended and `None` is returned; the fields
    /// keep what the user typed.
    pub fn validate(&mut self) -> Option<NewProduct> {
        match validate_new_product(&self.name, &self.category, &self.supplier, &self.purchase_price)
        {
            Ok(product) => Some(product),
            Err(e) => {
                self.messages.push(FormMessage::error(capitalize(&e.to_string())));
                None
            }
        }
    }

    /// Records the success line and clears the fields.
    pub fn on_created(&mut self, product: &Product) {
        self.messages.push(FormMessage::success(format!(
            "Product '{}' added",
            product.name
        )));
        self.name.clear();
        self.category.clear();
        self.supplier.clear();
        self.purchase_price.clear();
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
