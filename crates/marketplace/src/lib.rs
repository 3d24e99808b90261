//! SupplyLink Marketplace library.
//!
//! The logic-bearing core of the marketplace: directory-backed
//! authentication with a persisted session, and pure filtering over the
//! catalog fixtures. The view layer calls [`services::auth::AuthService`]
//! for identity and the [`catalog`] functions for derived lists.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
