//! Traveling Salesman domain model.
//!
//! - [`City`]: immutable coordinate record, identified by id
//! - [`Route`]: a closed tour over every city, with cached length
//! - [`Population`]: the routes of one generation

mod city;
mod population;
mod route;

pub use city::{generate_cities, City};
pub use population::Population;
pub use route::Route;
