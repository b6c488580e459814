//! Cryptocurrency price charts rendered to PNG.
//!
//! `price_chart` pulls a 180-day USD history from CoinGecko for one coin;
//! `dominance_chart` draws a fixed sample series. Both share the renderer in
//! [`services::chart_service`].

pub mod api;
pub mod commands;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_support;
