mod cart;
mod category;
mod order;
mod product;
mod user;
