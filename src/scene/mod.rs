pub mod apparition;
pub mod column;
pub mod door;
pub mod viewport;
pub mod world;
