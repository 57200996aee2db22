pub mod trains_api;

pub use trains_api::TrainsApi;
