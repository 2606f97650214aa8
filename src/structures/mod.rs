pub mod integer;
pub mod poly;
pub mod poly_ring;
