use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth, banner, category, coupon, delivery_man, event, health, order, product, shop, user,
        withdraw,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Marketplace API", description = "Multi-vendor grocery marketplace"),
    paths(
        health::health,
        auth::register_user,
        auth::login_user,
        auth::register_shop,
        auth::login_shop,
        auth::login_delivery_man,
        auth::logout,
        user::get_profile,
        user::update_profile,
        user::change_password,
        user::upsert_address,
        user::delete_address,
        user::list_users,
        user::delete_user,
        user::set_role,
        shop::get_shop_info,
        shop::get_own_shop,
        shop::update_shop,
        shop::set_withdraw_method,
        shop::delete_withdraw_method,
        shop::list_transactions,
        shop::list_shops,
        shop::delete_shop,
        category::list_categories,
        category::create_category,
        category::update_category,
        category::delete_category,
        category::create_subcategory,
        category::delete_subcategory,
        product::list_products,
        product::get_product,
        product::create_review,
        product::list_shop_products,
        product::create_product,
        product::update_product,
        product::delete_product,
        product::list_all_products,
        event::list_running_events,
        event::list_shop_events,
        event::create_event,
        event::delete_event,
        event::list_all_events,
        coupon::get_coupon,
        coupon::list_shop_coupons,
        coupon::create_coupon,
        coupon::delete_coupon,
        banner::list_active_banners,
        banner::list_all_banners,
        banner::create_banner,
        banner::update_banner,
        banner::delete_banner,
        order::place_order,
        order::list_user_orders,
        order::get_user_order,
        order::cancel_user_order,
        order::request_refund,
        order::list_shop_orders,
        order::get_shop_order,
        order::update_order_status,
        order::cancel_shop_order,
        order::approve_refund,
        order::list_delivery_orders,
        order::update_delivery_status,
        order::list_all_orders,
        delivery_man::list_delivery_men,
        delivery_man::create_delivery_man,
        delivery_man::update_delivery_man,
        delivery_man::delete_delivery_man,
        delivery_man::get_delivery_profile,
        withdraw::list_withdrawals,
        withdraw::request_withdrawal,
        withdraw::list_all_withdrawals,
        withdraw::update_withdrawal,
    )
)]
pub struct ApiDoc;

/// Builds every API route plus the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(health::health))
        .merge(account_routes())
        .merge(catalog_routes())
        .merge(order_routes())
        .merge(shop_routes())
        .merge(delivery_routes())
        .merge(admin_routes())
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/register", post(auth::register_user))
        .route("/api/users/login", post(auth::login_user))
        .route("/api/users/logout", post(auth::logout))
        .route(
            "/api/users/me",
            get(user::get_profile).put(user::update_profile),
        )
        .route("/api/users/me/password", put(user::change_password))
        .route("/api/users/me/addresses", put(user::upsert_address))
        .route("/api/users/me/addresses/{id}", delete(user::delete_address))
        .route("/api/shops/register", post(auth::register_shop))
        .route("/api/shops/login", post(auth::login_shop))
        .route("/api/shops/logout", post(auth::logout))
        .route("/api/shops/{id}", get(shop::get_shop_info))
        .route("/api/delivery/login", post(auth::login_delivery_man))
        .route("/api/delivery/logout", post(auth::logout))
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(category::list_categories))
        .route("/api/products", get(product::list_products))
        .route("/api/products/{id}", get(product::get_product))
        .route("/api/products/{id}/reviews", post(product::create_review))
        .route("/api/events", get(event::list_running_events))
        .route("/api/coupons/{code}", get(coupon::get_coupon))
        .route("/api/banners", get(banner::list_active_banners))
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/orders",
            get(order::list_user_orders).post(order::place_order),
        )
        .route("/api/orders/{id}", get(order::get_user_order))
        .route("/api/orders/{id}/cancel", post(order::cancel_user_order))
        .route("/api/orders/{id}/refund", post(order::request_refund))
}

fn shop_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/shop/me",
            get(shop::get_own_shop).put(shop::update_shop),
        )
        .route(
            "/api/shop/withdraw-method",
            put(shop::set_withdraw_method).delete(shop::delete_withdraw_method),
        )
        .route("/api/shop/transactions", get(shop::list_transactions))
        .route(
            "/api/shop/products",
            get(product::list_shop_products).post(product::create_product),
        )
        .route(
            "/api/shop/products/{id}",
            put(product::update_product).delete(product::delete_product),
        )
        .route(
            "/api/shop/events",
            get(event::list_shop_events).post(event::create_event),
        )
        .route("/api/shop/events/{id}", delete(event::delete_event))
        .route(
            "/api/shop/coupons",
            get(coupon::list_shop_coupons).post(coupon::create_coupon),
        )
        .route("/api/shop/coupons/{id}", delete(coupon::delete_coupon))
        .route("/api/shop/orders", get(order::list_shop_orders))
        .route("/api/shop/orders/{id}", get(order::get_shop_order))
        .route(
            "/api/shop/orders/{id}/status",
            put(order::update_order_status),
        )
        .route("/api/shop/orders/{id}/cancel", post(order::cancel_shop_order))
        .route("/api/shop/orders/{id}/refund", post(order::approve_refund))
        .route(
            "/api/shop/withdrawals",
            get(withdraw::list_withdrawals).post(withdraw::request_withdrawal),
        )
}

fn delivery_routes() -> Router<AppState> {
    Router::new()
        .route("/api/delivery/me", get(delivery_man::get_delivery_profile))
        .route("/api/delivery/orders", get(order::list_delivery_orders))
        .route(
            "/api/delivery/orders/{id}/status",
            put(order::update_delivery_status),
        )
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/users", get(user::list_users))
        .route("/api/admin/users/{id}", delete(user::delete_user))
        .route("/api/admin/users/{id}/role", put(user::set_role))
        .route("/api/admin/shops", get(shop::list_shops))
        .route("/api/admin/shops/{id}", delete(shop::delete_shop))
        .route("/api/admin/categories", post(category::create_category))
        .route(
            "/api/admin/categories/{id}",
            put(category::update_category).delete(category::delete_category),
        )
        .route(
            "/api/admin/categories/{id}/subcategories",
            post(category::create_subcategory),
        )
        .route(
            "/api/admin/subcategories/{id}",
            delete(category::delete_subcategory),
        )
        .route("/api/admin/products", get(product::list_all_products))
        .route("/api/admin/events", get(event::list_all_events))
        .route(
            "/api/admin/banners",
            get(banner::list_all_banners).post(banner::create_banner),
        )
        .route(
            "/api/admin/banners/{id}",
            put(banner::update_banner).delete(banner::delete_banner),
        )
        .route("/api/admin/orders", get(order::list_all_orders))
        .route(
            "/api/admin/delivery-men",
            get(delivery_man::list_delivery_men).post(delivery_man::create_delivery_man),
        )
        .route(
            "/api/admin/delivery-men/{id}",
            put(delivery_man::update_delivery_man).delete(delivery_man::delete_delivery_man),
        )
        .route(
            "/api/admin/withdrawals",
            get(withdraw::list_all_withdrawals),
        )
        .route(
            "/api/admin/withdrawals/{id}",
            put(withdraw::update_withdrawal),
        )
}
