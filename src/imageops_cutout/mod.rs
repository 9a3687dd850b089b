pub mod classify;
pub mod component_filter;
pub mod components;
pub mod composite;
pub mod dilation;
pub mod flood_fill;
pub mod pixel_mask;
pub mod remove_background;
