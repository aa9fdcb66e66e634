use crate::server::{config::Config, service::auth::jwt::JwtService};

mod category;
mod image;
mod product;

fn jwt() -> JwtService {
    JwtService::new(&Config::for_test())
}

const BCRYPT_COST: u32 = 4;
