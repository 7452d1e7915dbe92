//! Progress side channel for multi-module generation.
//!
//! Reporting is independent of the workflow state: a reporter only observes.

use tracing::info;

use crate::models::module::Module;

pub trait ProgressReporter: Send + Sync {
    fn module_started(&self, module: Module, step: usize, total: usize);
    fn module_finished(&self, module: Module, step: usize, total: usize);
}

/// Logs progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn module_started(&self, module: Module, step: usize, total: usize) {
        info!("[{step}/{total}] 正在撰写: {} ...", module.label());
    }

    fn module_finished(&self, module: Module, step: usize, total: usize) {
        let percent = step * 100 / total.max(1);
        info!("[{step}/{total}] {} done ({percent}%)", module.id());
    }
}
