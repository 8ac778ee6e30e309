//! Gateways - Repository implementations

pub mod image_icon_gateway;
pub mod lnk_link_gateway;

pub use image_icon_gateway::ImageIconGateway;
pub use lnk_link_gateway::LnkLinkGateway;
