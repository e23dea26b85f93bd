//! Request execution shared by the seed fetchers.

pub mod http;
