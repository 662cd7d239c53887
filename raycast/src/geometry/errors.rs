use custom_error::custom_error;

custom_error! {#[derive(PartialEq)] pub GeometryError
    ZeroLengthVector = "Cannot normalize a vector of zero length",
    ZeroLengthDirection = "Ray direction should have non-zero length",
    InvalidRadius {radius: f64} = "Sphere radius should be positive and finite, got {radius}",
}
