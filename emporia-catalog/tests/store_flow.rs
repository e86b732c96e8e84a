use emporia_catalog::{
    combine, peek_serial, Book, Bundle, CatalogItem, Product, ProductCategory, VideoGame,
};

// Single test so the process-wide serial registry stays deterministic and
// the ids below can be asserted exactly.
#[test]
fn test_reference_store_walkthrough() {
    // Generic products
    assert_eq!(peek_serial(ProductCategory::Generic), 1);
    let mut sunglasses = Product::new("Vans Hip Cat Sunglasses", 14.0);
    let mut headphones = Product::new("Apple Airpods Pro", 199.0);
    assert_eq!(sunglasses.id(), "GN000001");
    assert_eq!(headphones.id(), "GN000002");
    assert_eq!(peek_serial(ProductCategory::Generic), 3);

    sunglasses.restock(20);
    headphones.restock(5);
    sunglasses.sell(3, 14.0);
    sunglasses.sell(1, 10.0);
    assert_eq!(sunglasses.sales(), &[14.0, 14.0, 14.0, 10.0]);
    assert_eq!(sunglasses.stock(), 16);

    // oversell: 8 requested, 5 available
    headphones.sell(8, 170.0);
    assert_eq!(headphones.sales(), &[170.0; 5]);
    assert_eq!(headphones.stock(), 0);

    sunglasses.review(5, "Great sunglasses! Love them.");
    sunglasses.review(3, "Glasses look good but they scratch easily");
    headphones.review(4, "Good but expensive");
    assert_eq!(sunglasses.lowest_price(), Some(10.0));
    assert_eq!(sunglasses.average_rating(), Some(4.0));

    let backpack = Product::new("Nike Explore", 60.0);
    assert_eq!(backpack.id(), "GN000003");
    assert_eq!(backpack.lowest_price(), None);
    assert_eq!(backpack.average_rating(), None);

    // Video games run their own sequence
    let mut mario = VideoGame::new("Mario Tennis Aces", 50.0);
    assert_eq!(mario.id(), "VG000001");
    mario.restock(10);
    mario.sell(3, 40.0);
    mario.sell(4, 35.0);
    assert_eq!(mario.lowest_price(), Some(35.0));
    mario.review(5, "Fun game!");
    mario.review(3, "Too easy");
    mario.review(1, "Boring");
    assert_eq!(mario.average_rating(), Some(3.0));

    let mut lego = VideoGame::new("LEGO The Incredibles", 30.0);
    assert_eq!(lego.id(), "VG000002");
    lego.restock(5);
    lego.sell(10, 20.0);
    assert_eq!(lego.stock(), 0);
    assert_eq!(lego.lowest_price(), Some(20.0));
    assert_eq!(peek_serial(ProductCategory::VideoGame), 3);

    // Books run their own sequence and order by page count
    let mut rust_book = Book::new("The Rust Programming Language", "Steve Klabnik", 560, 39.99);
    assert_eq!(rust_book.id(), "BK000001");
    rust_book.restock(10);
    rust_book.sell(3, 30.0);
    rust_book.sell(1, 32.0);
    rust_book.review(5, "Excellent how-to guide");
    assert_eq!(rust_book.average_rating(), Some(5.0));
    assert_eq!(rust_book.lowest_price(), Some(30.0));

    let programming_rust = Book::new("Programming Rust", "Jim Blandy", 736, 49.99);
    assert_eq!(programming_rust.id(), "BK000002");
    assert!(rust_book < programming_rust);
    assert!(!(rust_book > programming_rust));

    // Bundles
    let mut bundle = Bundle::new(&[&sunglasses, &backpack, &mario]).unwrap();
    assert_eq!(bundle.id(), "BL000001");
    assert_eq!(bundle.bundle_price(), 124.0);
    assert!((bundle.total_price() - 99.2).abs() < 1e-9);
    assert_eq!(
        bundle.to_string(),
        "Vans Hip Cat Sunglasses & Nike Explore & Mario Tennis Aces\n\
         Product ID: BL000001\nList Price: $99.20\nAvailable in Stock: 0"
    );

    bundle.restock(3);
    bundle.sell(1, 90.0);
    bundle.sell(2, 95.0);
    assert_eq!(bundle.stock(), 0);
    assert_eq!(bundle.lowest_price(), Some(90.0));

    let book_bundle = Bundle::new(&[&rust_book, &programming_rust]).unwrap();
    assert_eq!(book_bundle.id(), "BL000002");
    assert!((book_bundle.bundle_price() - 89.98).abs() < 1e-9);

    // combine() is the two-item construction
    let back_to_school = combine(&backpack, &rust_book);
    assert_eq!(back_to_school.id(), "BL000003");
    assert_eq!(
        back_to_school.bundle_description(),
        "Nike Explore & The Rust Programming Language"
    );
    assert!((back_to_school.bundle_price() - 99.99).abs() < 1e-9);
    assert_eq!(peek_serial(ProductCategory::Bundle), 4);
}
