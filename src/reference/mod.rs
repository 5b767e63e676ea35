//! Static reference tables: countries and cultural name material.

pub mod countries;
pub mod cultures;

pub use countries::{COUNTRIES, Country, find_country};
pub use cultures::{Culture, NameTable};
