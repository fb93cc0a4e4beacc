mod endpoint;

pub use endpoint::{Category, Endpoint, Method, ParamKind, Parameter};
