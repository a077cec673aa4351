mod inferrer;
mod naming;

pub use inferrer::*;
pub use naming::to_go_name;
