mod mindmap;
mod normalizer;
mod responses;
mod session_store;

pub use mindmap::*;
pub use normalizer::*;
pub use responses::*;
pub use session_store::*;
