pub mod entities;
pub mod matcher;
pub mod ports;
pub mod scaler;
pub mod services;
pub mod value_objects;
