pub mod aws;
pub mod model;
pub mod object_store;
