mod banner;
mod category;
mod coupon;
mod delivery_man;
mod event;
mod order;
mod product;
mod shop;
mod user;
mod withdraw;
