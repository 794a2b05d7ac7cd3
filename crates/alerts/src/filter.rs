use crate::ResourceType;

/// Filter tokens accepted by [`expand`], in the order they're documented.
pub const FILTERS: &[&str] = &["volume", "node", "cluster", "drive", "all"];

/// Expand a resource-type filter token into the resource types to be queried.
///
/// `all` expands to every resource type in a fixed order. Tokens are
/// case-sensitive, and a token which isn't recognized expands to nothing:
/// it's not an error, there's simply nothing to query.
pub fn expand(filter: &str) -> &'static [ResourceType] {
    match filter {
        "volume" => &[ResourceType::Volume],
        "node" => &[ResourceType::Node],
        "cluster" => &[ResourceType::Cluster],
        "drive" => &[ResourceType::Drive],
        "all" => ResourceType::ALL,
        _ => &[],
    }
}

#[cfg(test)]
mod test {
    use super::{expand, FILTERS};
    use crate::ResourceType;

    #[test]
    fn test_all_expands_in_fixed_order() {
        assert_eq!(
            expand("all"),
            &[
                ResourceType::Volume,
                ResourceType::Node,
                ResourceType::Cluster,
                ResourceType::Drive,
            ]
        );
    }

    #[test]
    fn test_single_types() {
        assert_eq!(expand("volume"), &[ResourceType::Volume]);
        assert_eq!(expand("node"), &[ResourceType::Node]);
        assert_eq!(expand("cluster"), &[ResourceType::Cluster]);
        assert_eq!(expand("drive"), &[ResourceType::Drive]);
    }

    #[test]
    fn test_unrecognized_tokens_expand_to_nothing() {
        for token in ["bogus", "", "ALL", "Volume", " node", "pool", "volumes"] {
            assert!(expand(token).is_empty(), "{token:?} should expand to nothing");
        }
    }

    #[test]
    fn test_every_documented_filter_expands() {
        for token in FILTERS {
            let types = expand(token);
            assert!(!types.is_empty());

            let mut deduped = types.to_vec();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), types.len());
        }
    }
}
