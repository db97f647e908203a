/// Compile-time build metadata stamped by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("UPKEEP_CORE_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("UPKEEP_CORE_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("UPKEEP_CORE_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("UPKEEP_CORE_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("UPKEEP_CORE_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

impl BuildMetadata {
    /// One line for `upkeep_core_cli version`; every stamped field appears in it.
    pub fn summary(&self) -> String {
        format!(
            "upkeep_core {} ({} {}, {} {}, built {})",
            self.version, self.git_hash, self.git_status, self.target, self.profile, self.timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_carries_every_stamped_field() {
        let meta = current();
        let line = meta.summary();
        for field in [
            meta.version,
            meta.git_hash,
            meta.git_status,
            meta.target,
            meta.profile,
            meta.timestamp,
        ] {
            assert!(line.contains(field), "{field} missing from {line}");
        }
    }
}
