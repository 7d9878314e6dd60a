//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, adaptive cost)
//!
//! Domain crates wrap these primitives in their own value objects.

pub mod password;
