pub use super::banner::Entity as Banner;
pub use super::category::Entity as Category;
pub use super::coupon::Entity as Coupon;
pub use super::delivery_man::Entity as DeliveryMan;
pub use super::event::Entity as Event;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::product::Entity as Product;
pub use super::product_review::Entity as ProductReview;
pub use super::shop::Entity as Shop;
pub use super::shop_transaction::Entity as ShopTransaction;
pub use super::shop_withdraw_method::Entity as ShopWithdrawMethod;
pub use super::subcategory::Entity as Subcategory;
pub use super::user::Entity as User;
pub use super::user_address::Entity as UserAddress;
pub use super::withdraw_request::Entity as WithdrawRequest;
