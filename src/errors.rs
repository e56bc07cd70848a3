use std::error::Error;
use std::fmt;


#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MazeError {
    /// A maze needs at least one logical cell in each direction.
    InvalidDimensions { width: usize, height: usize },
    /// Grid access outside of the grid. Generators and the solver never do this unless broken.
    OutOfBounds { x: u32, y: u32 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MazeError::InvalidDimensions { width, height } => {
                write!(f, "invalid maze dimensions {}x{}, both must be at least 1", width, height)
            }
            MazeError::OutOfBounds { x, y } => write!(f, "grid coordinate ({}, {}) is out of bounds", x, y),
        }
    }
}

impl Error for MazeError {}
