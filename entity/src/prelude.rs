pub use super::address::Entity as Address;
pub use super::cart::Entity as Cart;
pub use super::category::Entity as Category;
pub use super::category_product::Entity as CategoryProduct;
pub use super::image::Entity as Image;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::payment::Entity as Payment;
pub use super::product::Entity as Product;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
