use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    middleware::auth::{AccessToken, AuthGuard, Permission},
    service::auth::jwt::JwtService,
};
use test_utils::{builder::TestBuilder, factory};

mod gate;
mod require;

fn jwt() -> JwtService {
    JwtService::new(&Config::for_test())
}
