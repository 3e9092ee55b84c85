// src/benchmark/system_info.rs

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Host and build details recorded alongside benchmark timings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub cpu_model: String,
    pub cpu_threads: usize,
    pub total_memory_mb: u64,
    pub git_commit: String,
    pub git_dirty: bool,
    pub crate_version: String,
}

impl SystemInfo {
    pub fn collect() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();

        let cpu_model = sys.cpus()
            .first()
            .map(|cpu| cpu.brand().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let os = format!(
            "{} {}",
            System::name().unwrap_or_else(|| "Unknown".to_string()),
            System::os_version().unwrap_or_default()
        );

        let (git_commit, git_dirty) = Self::git_state();

        SystemInfo {
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
            os: os.trim().to_string(),
            cpu_model,
            cpu_threads: sys.cpus().len(),
            total_memory_mb: sys.total_memory() / 1024 / 1024,
            git_commit,
            git_dirty,
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Short commit hash for table headers
    pub fn short_commit(&self) -> String {
        self.git_commit.chars().take(8).collect()
    }

    fn git_state() -> (String, bool) {
        let repo = match git2::Repository::discover(".") {
            Ok(repo) => repo,
            Err(_) => return ("unknown".to_string(), false),
        };

        let commit = repo.head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .map(|c| c.id().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let dirty = repo.statuses(None)
            .map(|statuses| !statuses.is_empty())
            .unwrap_or(false);

        (commit, dirty)
    }

    pub fn to_string_pretty(&self) -> String {
        format!(
            r#"System Information:
  Hostname:     {}
  OS:           {}
  CPU:          {} ({} threads)
  Memory:       {} MB
  Git:          {}{}
  Version:      {}
"#,
            self.hostname,
            self.os,
            self.cpu_model,
            self.cpu_threads,
            self.total_memory_mb,
            self.short_commit(),
            if self.git_dirty { " [dirty]" } else { "" },
            self.crate_version,
        )
    }
}
