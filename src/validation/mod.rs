pub mod disposable;
pub mod mx;
pub mod syntax;
pub mod validator;

pub use disposable::DisposableDomains;
pub use mx::{DnsMxResolver, StaticMxResolver};
pub use validator::Validator;
