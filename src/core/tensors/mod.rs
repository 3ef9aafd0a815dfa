pub mod parameter;


// 재수출
pub use parameter::Parameter;
