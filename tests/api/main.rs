//! tests/api/main.rs
mod health_check;
mod helpers;
mod home;
