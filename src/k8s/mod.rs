pub mod kubeconfig;
pub mod pods;
pub mod policy;
pub mod terminated_pods;

pub use kubeconfig::*;
pub use pods::*;
pub use policy::*;
pub use terminated_pods::*;
