mod app_config;

use emporia_catalog::{
    combine, peek_serial, Book, Bundle, BundlePricing, CatalogItem, Product, ProductCategory,
    VideoGame,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emporia_demo=info,emporia_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = app_config::Config::load().expect("Failed to load config");
    let pricing = BundlePricing::new(config.catalog.bundle_discount_percent);
    tracing::info!(
        "Starting emporia demo with a {}% bundle discount",
        pricing.discount_percent
    );

    // Generic products: stock, sales, reviews
    let mut sunglasses = Product::new("Vans Hip Cat Sunglasses", 14.0);
    let mut headphones = Product::new("Apple Airpods Pro", 199.0);
    sunglasses.restock(20);
    headphones.restock(5);
    println!("{}\n", sunglasses);
    println!("{}\n", headphones);

    sunglasses.sell(3, 14.0);
    sunglasses.sell(1, 10.0);
    headphones.sell(8, 170.0); // only 5 in stock, the sale clamps
    println!("{}\n", sunglasses);
    println!("{}\n", headphones);

    sunglasses.review(5, "Great sunglasses! Love them.");
    sunglasses.review(3, "Glasses look good but they scratch easily");
    headphones.review(4, "Good but expensive");
    report(&sunglasses);
    report(&headphones);

    let backpack = Product::new("Nike Explore", 60.0);
    report(&backpack);
    tracing::info!(
        "next generic serial: {}",
        peek_serial(ProductCategory::Generic)
    );

    // Video games share the product behavior on their own id sequence
    let mut mario = VideoGame::new("Mario Tennis Aces", 50.0);
    mario.restock(10);
    mario.sell(3, 40.0);
    mario.sell(4, 35.0);
    mario.review(5, "Fun game!");
    mario.review(3, "Too easy");
    mario.review(1, "Boring");
    println!("{}\n", mario);
    report(&mario);

    let mut lego = VideoGame::new("LEGO The Incredibles", 30.0);
    lego.restock(5);
    lego.sell(10, 20.0);
    println!("{}\n", lego);
    report(&lego);

    // Books order by page count
    let mut rust_book = Book::new("The Rust Programming Language", "Steve Klabnik", 560, 39.99);
    rust_book.restock(10);
    rust_book.sell(3, 30.0);
    rust_book.sell(1, 32.0);
    rust_book.review(5, "Excellent how-to guide");
    println!("{}\n", rust_book);
    report(&rust_book);

    let programming_rust = Book::new("Programming Rust", "Jim Blandy", 736, 49.99);
    println!("{}\n", programming_rust);
    println!(
        "{:?} is the shorter read: {}\n",
        rust_book.description(),
        rust_book < programming_rust
    );

    // Bundles capture constituent prices once, then live their own life
    let mut bundle = Bundle::with_pricing(&[&sunglasses, &backpack, &mario], &pricing)
        .expect("bundle needs at least one item");
    bundle.restock(3);
    bundle.sell(1, 90.0);
    bundle.sell(2, 95.0);
    println!("{}\n", bundle);
    report(&bundle);

    let book_bundle = Bundle::with_pricing(&[&rust_book, &programming_rust], &pricing)
        .expect("bundle needs at least one item");
    println!("{}\n", book_bundle);
    tracing::info!(
        "next bundle serial: {}",
        peek_serial(ProductCategory::Bundle)
    );

    let back_to_school = combine(&backpack, &rust_book);
    println!("{}\n", back_to_school);

    let snapshot =
        serde_json::to_string_pretty(&back_to_school).expect("bundle serializes to JSON");
    println!("{}", snapshot);
}

fn report(item: &dyn CatalogItem) {
    match item.lowest_price() {
        Some(price) => println!("{}: lowest sale ${:.2}", item.id(), price),
        None => println!("{}: no sales yet", item.id()),
    }
    match item.average_rating() {
        Some(rating) => println!("{}: average rating {:.1}\n", item.id(), rating),
        None => println!("{}: no reviews yet\n", item.id()),
    }
}
