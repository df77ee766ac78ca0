//! # Seed Data Generator
//!
//! Writes a sample product catalog and a pre-filled cart slot for
//! development, so the storefront has something to render without a live
//! backend.
//!
//! ## Usage
//! ```bash
//! # Write ./catalog.json and a cart slot in the app data directory
//! cargo run -p dezemu-store --bin seed
//!
//! # Custom output paths
//! cargo run -p dezemu-store --bin seed -- --catalog ./demo/catalog.json --cart ./demo/cart-storage.json
//! ```
//!
//! ## Generated Data
//! - A small Turkish-market catalog: electronics, apparel with size
//!   variants, discounted and featured items.
//! - A cart slot built by adding two of the products through the real
//!   store, so everything downstream sees genuine persisted state.

use std::env;
use std::fs;

use tracing_subscriber::EnvFilter;

use dezemu_core::types::{Product, ProductVariant};
use dezemu_store::{CartStore, JsonSlotStorage, TracingNoticeSink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut catalog_path = String::from("./catalog.json");
    let mut cart_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" | "-o" => {
                if i + 1 < args.len() {
                    catalog_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--cart" | "-c" => {
                if i + 1 < args.len() {
                    cart_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Dezemu Shop Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --catalog <PATH>  Catalog output path (default: ./catalog.json)");
                println!("  -c, --cart <PATH>     Cart slot path (default: app data directory)");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Dezemu Shop Seed Data Generator");
    println!("==================================");

    // Write the catalog
    let products = sample_products();
    fs::write(&catalog_path, serde_json::to_string_pretty(&products)?)?;
    println!("✓ Wrote {} products to {}", products.len(), catalog_path);

    // Pre-fill a cart through the real store so the slot format is genuine
    let storage = match cart_path {
        Some(path) => JsonSlotStorage::new(path),
        None => JsonSlotStorage::in_app_data()?,
    };
    println!("Cart slot: {}", storage.path().display());

    let mut store = CartStore::new(Box::new(storage), Box::new(TracingNoticeSink));
    store.hydrate();
    store.clear();

    store.add_item(products[0].cart_input(None), 1);
    let shirt = &products[1];
    let medium = shirt
        .active_variants()
        .next()
        .ok_or("shirt has no active variants")?;
    store.add_item(shirt.cart_input(Some(medium)), 2);

    println!(
        "✓ Cart seeded: {} lines, {} items, subtotal {}",
        store.lines().len(),
        store.total_item_count(),
        store.total_price()
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,dezemu=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A handful of realistic products covering the interesting cases:
/// discount badge, size variants, digital goods, featured placement.
fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "prod-1".to_string(),
            slug: "kablosuz-bluetooth-kulaklik".to_string(),
            name: "Kablosuz Bluetooth Kulaklık".to_string(),
            description: Some(
                "Aktif gürültü engelleme ve 30 saat pil ömrü ile premium ses deneyimi."
                    .to_string(),
            ),
            short_description: Some("Premium ses kalitesi".to_string()),
            price_cents: 29999,
            compare_price_cents: Some(39999),
            stock_quantity: 50,
            image_url: Some("https://img.dezemu.example/kulaklik.jpg".to_string()),
            is_active: true,
            is_digital: false,
            is_featured: true,
            variants: vec![],
        },
        Product {
            id: "prod-2".to_string(),
            slug: "pamuklu-basic-t-shirt".to_string(),
            name: "Pamuklu Basic T-Shirt".to_string(),
            description: Some("%100 pamuk, günlük kullanım için rahat kesim.".to_string()),
            short_description: Some("%100 pamuk".to_string()),
            price_cents: 7990,
            compare_price_cents: None,
            stock_quantity: 200,
            image_url: Some("https://img.dezemu.example/tshirt.jpg".to_string()),
            is_active: true,
            is_digital: false,
            is_featured: false,
            variants: vec![
                ProductVariant {
                    id: "var-tshirt-s".to_string(),
                    name: "Beden".to_string(),
                    value: "S".to_string(),
                    price_adjustment_cents: 0,
                    stock_quantity: 60,
                    is_active: true,
                },
                ProductVariant {
                    id: "var-tshirt-m".to_string(),
                    name: "Beden".to_string(),
                    value: "M".to_string(),
                    price_adjustment_cents: 0,
                    stock_quantity: 80,
                    is_active: true,
                },
                ProductVariant {
                    id: "var-tshirt-xl".to_string(),
                    name: "Beden".to_string(),
                    value: "XL".to_string(),
                    price_adjustment_cents: 500,
                    stock_quantity: 20,
                    is_active: true,
                },
            ],
        },
        Product {
            id: "prod-3".to_string(),
            slug: "akilli-saat-pro".to_string(),
            name: "Akıllı Saat Pro".to_string(),
            description: Some(
                "Nabız, uyku ve antrenman takibi; 7 gün pil ömrü.".to_string(),
            ),
            short_description: Some("Sağlık ve spor takibi".to_string()),
            price_cents: 129900,
            compare_price_cents: Some(159900),
            stock_quantity: 25,
            image_url: Some("https://img.dezemu.example/saat.jpg".to_string()),
            is_active: true,
            is_digital: false,
            is_featured: true,
            variants: vec![],
        },
        Product {
            id: "prod-4".to_string(),
            slug: "e-kitap-rust-programlama".to_string(),
            name: "E-Kitap: Rust Programlama".to_string(),
            description: Some("Başlangıçtan ileri seviyeye Rust, PDF + EPUB.".to_string()),
            short_description: Some("Dijital indirme".to_string()),
            price_cents: 14900,
            compare_price_cents: None,
            stock_quantity: 9999,
            image_url: None,
            is_active: true,
            is_digital: true,
            is_featured: false,
            variants: vec![],
        },
    ]
}
