//! Gateway 应用状态

use std::sync::Arc;

use crate::inference::ChatCompletion;

/// Gateway 应用状态
///
/// 只包含启动时构造的不可变对象，请求之间不共享可变状态
#[derive(Clone)]
pub struct AppState {
    completion: Arc<dyn ChatCompletion>,
}

impl AppState {
    pub fn new(completion: Arc<dyn ChatCompletion>) -> Self {
        Self { completion }
    }

    pub fn completion(&self) -> &dyn ChatCompletion {
        self.completion.as_ref()
    }
}
