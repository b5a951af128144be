//! Ghost pursuit for a Pac-Man maze: four ghosts, their shared mode clock, and the pen.

pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod ghost;
pub mod ghosts;
pub mod level;
pub mod map;
pub mod pacman;
pub mod timing;
