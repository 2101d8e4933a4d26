//! 业务逻辑服务层

mod ddns_service;
mod normalizer;
mod reconciler;

pub use ddns_service::DdnsService;
pub use normalizer::finalize;
pub use reconciler::reconcile;
