pub mod element_text;
pub mod extract_price;
pub mod extract_quantity;
pub mod find_quantity_label;
pub mod following_elements;
pub mod search_products;
