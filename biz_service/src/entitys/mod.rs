pub mod nav_entity;
pub mod navigation_doc;
