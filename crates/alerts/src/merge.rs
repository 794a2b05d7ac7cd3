use crate::{Alert, ResourceType};
use time::OffsetDateTime;

/// Merge per-resource-type batches of alerts into a single sequence
/// ordered on ascending timestamp, compared at whole-second precision.
///
/// Batches are concatenated in iteration order and then stably sorted,
/// so alerts raised within the same second keep their batch order and,
/// within a batch, their arrival order. Alerts without a timestamp sort
/// first. No de-duplication is done.
pub fn merge(batches: impl IntoIterator<Item = (ResourceType, Vec<Alert>)>) -> Vec<Alert> {
    let mut merged = Vec::new();

    for (resource, alerts) in batches {
        tracing::trace!(%resource, alerts = alerts.len(), "merging batch");
        merged.extend(alerts);
    }
    merged.sort_by_key(|alert| alert.timestamp.map(OffsetDateTime::unix_timestamp));

    merged
}

#[cfg(test)]
mod test {
    use super::merge;
    use crate::{Alert, ResourceType, Severity};
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use time::OffsetDateTime;

    fn alert(resource: ResourceType, id: i64, ts: Option<i64>) -> Alert {
        Alert {
            id,
            resource,
            resource_id: format!("{resource}-{id}"),
            alert_type: 1,
            severity: Severity::Alarm,
            count: 1,
            first_seen: None,
            timestamp: ts.map(|ts| OffsetDateTime::from_unix_timestamp(ts).unwrap()),
            message: String::new(),
            cleared: false,
            unique_tag: String::new(),
        }
    }

    fn timestamps(alerts: &[Alert]) -> Vec<Option<i64>> {
        alerts
            .iter()
            .map(|a| a.timestamp.map(OffsetDateTime::unix_timestamp))
            .collect()
    }

    #[test]
    fn test_single_batch_is_sorted() {
        let merged = merge([(
            ResourceType::Node,
            vec![
                alert(ResourceType::Node, 1, Some(10)),
                alert(ResourceType::Node, 2, Some(5)),
                alert(ResourceType::Node, 3, Some(20)),
            ],
        )]);

        assert_eq!(timestamps(&merged), vec![Some(5), Some(10), Some(20)]);
    }

    #[test]
    fn test_batches_interleave_with_ties_in_batch_order() {
        let merged = merge([
            (
                ResourceType::Volume,
                vec![
                    alert(ResourceType::Volume, 1, Some(7)),
                    alert(ResourceType::Volume, 2, Some(3)),
                ],
            ),
            (ResourceType::Node, vec![]),
            (
                ResourceType::Cluster,
                vec![
                    alert(ResourceType::Cluster, 3, Some(7)),
                    alert(ResourceType::Cluster, 4, None),
                ],
            ),
        ]);

        let ids: Vec<_> = merged.iter().map(|a| (a.resource, a.id)).collect();
        assert_eq!(
            ids,
            vec![
                (ResourceType::Cluster, 4),
                (ResourceType::Volume, 2),
                (ResourceType::Volume, 1),
                (ResourceType::Cluster, 3),
            ]
        );
    }

    #[test]
    fn test_same_second_keeps_arrival_order() {
        let mut late = alert(ResourceType::Volume, 1, Some(10));
        late.timestamp = late.timestamp.map(|ts| ts + time::Duration::milliseconds(900));
        let mut early = alert(ResourceType::Volume, 2, Some(10));
        early.timestamp = early.timestamp.map(|ts| ts + time::Duration::milliseconds(100));

        let merged = merge([(
            ResourceType::Volume,
            vec![late, early, alert(ResourceType::Volume, 3, Some(9))],
        )]);

        let ids: Vec<_> = merged.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let dup = alert(ResourceType::Drive, 9, Some(1));
        let merged = merge([
            (ResourceType::Drive, vec![dup.clone()]),
            (ResourceType::Drive, vec![dup.clone()]),
        ]);
        assert_eq!(merged, vec![dup.clone(), dup]);
    }

    #[derive(Clone, Debug)]
    struct Batches(Vec<(ResourceType, Vec<Alert>)>);

    impl Arbitrary for Batches {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut next_id = 0;
            let batches = ResourceType::ALL
                .iter()
                .map(|resource| {
                    let len = usize::arbitrary(g) % 12;
                    let alerts = (0..len)
                        .map(|_| {
                            next_id += 1;
                            // Draw from a narrow range so that ties are common.
                            let ts = Option::<u8>::arbitrary(g).map(|ts| (ts % 8) as i64);
                            alert(*resource, next_id, ts)
                        })
                        .collect();
                    (*resource, alerts)
                })
                .collect();

            Self(batches)
        }
    }

    #[quickcheck]
    fn merge_keeps_every_alert(batches: Batches) -> bool {
        let expect: usize = batches.0.iter().map(|(_, alerts)| alerts.len()).sum();
        merge(batches.0).len() == expect
    }

    #[quickcheck]
    fn merge_is_ordered_and_stable(batches: Batches) -> bool {
        // Ids are assigned in concatenation order, so stability means
        // ids ascend within every run of equal timestamps.
        let merged = merge(batches.0);

        merged.windows(2).all(|pair| match pair[0].timestamp.cmp(&pair[1].timestamp) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Equal => pair[0].id < pair[1].id,
            std::cmp::Ordering::Greater => false,
        })
    }
}
