pub mod trains;
