// src/resolver/mod.rs

//! Plan resolution
//!
//! Resolution is a pure, stateless filter over the rule store: a rule is in
//! the plan iff it applies on the requested platform. No deduplication and
//! no conflict detection happen here; duplicate declarations flow through in
//! order, matching the source recipes' allow-override behavior. The store is
//! read-only after load and each call builds a fresh caller-owned plan, so
//! concurrent resolution needs no locking.

mod plan;

pub use plan::ResolvedPlan;

use crate::error::Result;
use crate::platform::Platform;
use crate::rules::RuleStore;
use tracing::debug;

/// Resolve the active rules for a platform
///
/// Deterministic and order-preserving: for a fixed store and platform,
/// repeated calls yield structurally equal plans.
pub fn resolve(store: &RuleStore, platform: Platform) -> ResolvedPlan {
    let requirements = store
        .requirement_rules()
        .iter()
        .filter(|rule| rule.applies_on(platform))
        .cloned()
        .collect::<Vec<_>>();

    let imports = store
        .import_rules()
        .iter()
        .filter(|rule| rule.applies_on(platform))
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        recipe = store.name(),
        %platform,
        requirements = requirements.len(),
        imports = imports.len(),
        "resolved plan"
    );

    ResolvedPlan {
        platform,
        requirements,
        imports,
    }
}

/// Resolve for a platform given as a tag string
///
/// Fails with `UnknownPlatform` if the tag is not in the enumerated set.
pub fn resolve_tag(store: &RuleStore, tag: &str) -> Result<ResolvedPlan> {
    let platform = Platform::parse(tag)?;
    Ok(resolve(store, platform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::parse_recipe;
    use strum::IntoEnumIterator;

    const FFMPEG_RECIPE: &str = r#"
[recipe]
name = "ffmpeg"

[[requires]]
package = "videoai"
version = "0.5.4"

[[requires]]
package = "openh264"
version = "2.2.0"
platforms = ["macos"]

[[requires]]
package = "libvpx"
version = "1.11.0"
platforms = ["macos"]

[[imports]]
pattern = "*"
dest = "lib3rdparty"
folder = true
platforms = ["windows"]

[[imports]]
pattern = "*"
dest = "bin"
platforms = ["windows"]

[[imports]]
pattern = "*"
dest = "include"
platforms = ["macos"]
"#;

    fn ffmpeg_store() -> RuleStore {
        RuleStore::from_recipe(&parse_recipe(FFMPEG_RECIPE).unwrap()).unwrap()
    }

    #[test]
    fn test_universal_rule_in_every_plan() {
        let store = ffmpeg_store();
        for platform in Platform::iter() {
            let plan = resolve(&store, platform);
            assert!(
                plan.requirements.iter().any(|r| r.package == "videoai"),
                "videoai missing on {}",
                platform
            );
        }
    }

    #[test]
    fn test_platform_scoped_rules_filtered() {
        let store = ffmpeg_store();

        let windows = resolve(&store, Platform::Windows);
        let packages: Vec<&str> = windows
            .requirements
            .iter()
            .map(|r| r.package.as_str())
            .collect();
        assert_eq!(packages, vec!["videoai"]);

        let macos = resolve(&store, Platform::Macos);
        let packages: Vec<&str> = macos
            .requirements
            .iter()
            .map(|r| r.package.as_str())
            .collect();
        assert_eq!(packages, vec!["videoai", "openh264", "libvpx"]);

        let linux = resolve(&store, Platform::Linux);
        assert_eq!(linux.requirements.len(), 1);
    }

    #[test]
    fn test_import_rules_filtered() {
        let store = ffmpeg_store();

        let windows = resolve(&store, Platform::Windows);
        let dests: Vec<&str> = windows.imports.iter().map(|i| i.dest.as_str()).collect();
        assert_eq!(dests, vec!["lib3rdparty", "bin"]);
        assert!(windows.imports[0].folder);
        assert!(!windows.imports[1].folder);

        let linux = resolve(&store, Platform::Linux);
        assert!(linux.imports.is_empty());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let store = ffmpeg_store();
        for platform in Platform::iter() {
            let first = resolve(&store, platform);
            let second = resolve(&store, platform);
            assert_eq!(first.requirements, second.requirements);
            assert_eq!(first.imports, second.imports);
        }
    }

    #[test]
    fn test_resolve_tag() {
        let store = ffmpeg_store();
        let plan = resolve_tag(&store, "macos").unwrap();
        assert_eq!(plan.platform, Platform::Macos);
        assert_eq!(plan.requirements.len(), 3);
    }

    #[test]
    fn test_resolve_tag_unknown() {
        let store = ffmpeg_store();
        assert!(matches!(
            resolve_tag(&store, "beos"),
            Err(crate::Error::UnknownPlatform(_))
        ));
    }

    #[test]
    fn test_duplicates_flow_through_in_order() {
        let recipe = parse_recipe(
            r#"
[recipe]
name = "ffmpeg"

[[requires]]
package = "videoai"
version = "0.3.0"

[[requires]]
package = "videoai"
version = "0.5.4"
"#,
        )
        .unwrap();
        let store = RuleStore::from_recipe(&recipe).unwrap();
        let plan = resolve(&store, Platform::Linux);
        let versions: Vec<String> = plan
            .requirements
            .iter()
            .map(|r| r.constraint.to_string())
            .collect();
        assert_eq!(versions, vec!["0.3.0", "0.5.4"]);
    }
}
