pub mod errors;
pub mod ray;
pub mod vector3;
