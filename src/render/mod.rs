pub mod composite;
pub mod frame;
pub mod noise;
pub mod post;
pub mod scene;
