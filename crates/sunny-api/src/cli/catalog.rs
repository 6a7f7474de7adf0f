//! Catalog CLI commands: products, product, faqs.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use sunny_types::catalog::Product;

use crate::state::AppState;

/// List products in a table, optionally filtered.
pub fn list_products(state: &AppState, search: Option<&str>, json: bool) -> Result<()> {
    let products = state.catalog.search(search);

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!();
        match search {
            Some(term) => println!("  No products match {}.", style(term).yellow()),
            None => println!("  The catalog is empty."),
        }
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(Color::White),
            Cell::new("Name").fg(Color::White),
            Cell::new("Price").fg(Color::White),
            Cell::new("Tags").fg(Color::White),
        ]);

    for product in &products {
        table.add_row(vec![
            Cell::new(&product.id).fg(Color::DarkGrey),
            Cell::new(&product.name).fg(Color::Cyan),
            Cell::new(format_price(product)).fg(Color::Green),
            Cell::new(product.tags.join(", ")),
        ]);
    }

    println!();
    println!("{table}");
    println!(
        "  {} product{}",
        products.len(),
        if products.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show one product's details.
pub fn show_product(state: &AppState, id: &str, json: bool) -> Result<()> {
    let product = state.catalog.product_by_id(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(product)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&product.name).cyan().bold());
    println!();
    println!("  {}  {}", style("ID:").bold(), style(&product.id).dim());
    println!("  {}  {}", style("Price:").bold(), format_price(product));
    println!("  {}  {}", style("Tags:").bold(), product.tags.join(", "));
    println!();
    println!("  {}", product.description);
    println!();

    Ok(())
}

/// List FAQ entries.
pub fn list_faqs(state: &AppState, json: bool) -> Result<()> {
    let faqs = state.catalog.all_faqs();

    if json {
        println!("{}", serde_json::to_string_pretty(faqs)?);
        return Ok(());
    }

    println!();
    for faq in faqs {
        println!("  {} {}", style("Q:").yellow().bold(), style(&faq.question).bold());
        println!("  {} {}", style("A:").dim(), faq.answer);
        println!();
    }

    Ok(())
}

fn format_price(product: &Product) -> String {
    format!("${:.2}", product.price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunny_core::catalog::Catalog;

    #[test]
    fn test_price_has_two_decimals() {
        let catalog = Catalog::builtin();
        let product = catalog.product_by_id("party-pack").unwrap();
        assert_eq!(format_price(product), "$27.99");
    }
}
