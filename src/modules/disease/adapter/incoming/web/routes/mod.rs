mod get_disease;
mod list_diseases;

pub use get_disease::*;
pub use list_diseases::*;
