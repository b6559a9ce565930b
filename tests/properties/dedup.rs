//! Properties of target de-duplication.

use std::collections::HashSet;
use std::path::PathBuf;

use proptest::prelude::*;

use rulesnap::domain::services::dedup_by_source;
use rulesnap::DiscoveredTarget;

fn targets() -> impl Strategy<Value = Vec<DiscoveredTarget>> {
    // Few distinct paths and appliances so duplicates are common.
    proptest::collection::vec((0u8..6, 0u8..3), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(file, appliance)| {
                DiscoveredTarget::local(
                    format!("/etc/rules/{file}.rules"),
                    format!("appliance-{appliance}"),
                    format!("{file}.rules"),
                )
            })
            .collect()
    })
}

proptest! {
    /// PROPERTY: every source path appears once, represented by its first
    /// occurrence, and relative order is preserved.
    #[test]
    fn property_dedup_keeps_first_occurrence(input in targets()) {
        let output = dedup_by_source(input.clone());

        let mut seen = HashSet::new();
        let expected: Vec<DiscoveredTarget> = input
            .into_iter()
            .filter(|t| seen.insert(t.source_path().to_path_buf()))
            .collect();

        prop_assert_eq!(&output, &expected);

        let unique: HashSet<PathBuf> = output.iter().map(|t| t.source_path().to_path_buf()).collect();
        prop_assert_eq!(unique.len(), output.len());
    }
}
