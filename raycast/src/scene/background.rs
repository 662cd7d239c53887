use crate::geometry::{errors::GeometryError, vector3::{Color, Vector3}};

pub const WHITE: Color = Vector3::new(1.0, 1.0, 1.0);
pub const SKY_BLUE: Color = Vector3::new(0.5, 0.7, 1.0);

/// Vertical gradient: `bottom` for rays pointing straight down, `top` for rays
/// pointing straight up, linear in the y component of the unit direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Background {

    bottom: Color,
    top: Color,
}

impl Background {

    pub fn new(bottom: Color, top: Color) -> Self {
        Self {
            bottom,
            top,
        }
    }

    pub fn sky() -> Self {
        Self::new(WHITE, SKY_BLUE)
    }

    pub fn color(&self, direction: &Vector3) -> Result<Color, GeometryError> {
        let unit_direction = direction.unit_vector()?;
        let a = 0.5 * (unit_direction.y + 1.0);

        Ok((1.0 - a) * self.bottom + a * self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_is_halfway() {
        let color = Background::sky().color(&Vector3::new(0.0, 0.0, -1.0)).unwrap();

        assert_eq!(color, Vector3::new(0.75, 0.85, 1.0));
    }

    #[test]
    fn test_direction_length_does_not_matter() {
        let background = Background::sky();

        assert_eq!(
            background.color(&Vector3::new(3.0, 4.0, 0.0)).unwrap(),
            background.color(&Vector3::new(0.3, 0.4, 0.0)).unwrap()
        );
    }

    #[test]
    fn test_zero_direction() {
        assert!(Background::sky().color(&Vector3::zero()).is_err());
    }
}
