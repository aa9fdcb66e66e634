//! Request authentication and token cookie handling.

pub mod auth;
pub mod cookie;

#[cfg(test)]
mod test;
