use std::collections::BTreeMap;

/// Name under which alert type codes absent from the catalog are displayed.
pub const UNKNOWN_ALERT_TYPE: &str = "Unknown";

// Display names of the alert types raised by cluster resources,
// keyed on the alert type code carried by each Alert.
const ALERT_TYPES: &[(i64, &str)] = &[
    (1, "DriveOperationFailure"),
    (2, "DriveOperationSuccess"),
    (3, "DriveStateChange"),
    (4, "VolumeOperationFailureAlarm"),
    (5, "VolumeOperationSuccess"),
    (6, "VolumeStateChange"),
    (7, "VolGroupOperationFailure"),
    (8, "VolGroupOperationSuccess"),
    (9, "VolGroupStateChange"),
    (10, "NodeStartFailure"),
    (11, "NodeStartSuccess"),
    (12, "InternalKvdbFailure"),
    (13, "NodeJournalHighUsage"),
    (14, "IOOperation"),
    (15, "ContainerOperationFailure"),
    (16, "ContainerOperationSuccess"),
    (17, "ContainerStateChange"),
    (18, "PXInitFailure"),
    (19, "PXInitSuccess"),
    (20, "PXStateChange"),
    (21, "VolumeOperationFailureWarn"),
    (22, "StorageVolumeMountDegraded"),
    (23, "ClusterManagerFailure"),
    (24, "KernelDriverFailure"),
    (25, "NodeDecommissionSuccess"),
    (26, "NodeDecommissionFailure"),
    (27, "NodeDecommissionPending"),
    (28, "NodeInitFailure"),
    (29, "PXReady"),
    (30, "StorageFailure"),
    (31, "ObjectstoreFailure"),
    (32, "ObjectstoreSuccess"),
    (33, "ObjectstoreStateChange"),
    (34, "LicenseExpiring"),
    (35, "SharedV4SetupFailure"),
    (36, "NodeMarkedDown"),
    (37, "VolumeSpaceLow"),
    (38, "CloudsnapOperationUpdate"),
    (39, "CloudsnapOperationFailure"),
    (40, "CloudsnapOperationSuccess"),
    (41, "CloudMigrationUpdate"),
    (42, "CloudMigrationSuccess"),
    (43, "CloudMigrationFailure"),
    (44, "ClusterPairSuccess"),
    (45, "ClusterPairFailure"),
    (46, "ClusterDomainAdded"),
    (47, "ClusterDomainRemoved"),
    (48, "ClusterDomainActivated"),
    (49, "ClusterDomainDeactivated"),
    (50, "ClusterLicenseUpdated"),
    (51, "PoolExpandSuccessful"),
    (52, "PoolExpandFailed"),
    (53, "PoolExpandInProgress"),
    (54, "MeteringAgentCritical"),
    (55, "MeteringAgentWarning"),
    (56, "VolumeReplicaCountMismatch"),
    (57, "FilesystemCheckFailed"),
    (58, "FilesystemCheckSuccessful"),
    (59, "PoolMaintenanceModeEntered"),
    (60, "PoolMaintenanceModeExited"),
];

/// Catalog is a bidirectional mapping between alert type codes and
/// their human-readable names.
///
/// Codes which aren't present in the catalog resolve to
/// [`UNKNOWN_ALERT_TYPE`] rather than failing a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    name_to_id: BTreeMap<&'static str, i64>,
    id_to_name: BTreeMap<i64, &'static str>,
}

impl Catalog {
    /// Build the Catalog from the compiled-in table of alert types.
    pub fn build() -> Self {
        let mut name_to_id = BTreeMap::new();
        let mut id_to_name = BTreeMap::new();

        for &(id, name) in ALERT_TYPES {
            name_to_id.insert(name, id);
            id_to_name.insert(id, name);
        }

        Self {
            name_to_id,
            id_to_name,
        }
    }

    /// Display name of the alert type `id`.
    pub fn name(&self, id: i64) -> &'static str {
        self.id_to_name
            .get(&id)
            .copied()
            .unwrap_or(UNKNOWN_ALERT_TYPE)
    }

    /// Alert type code having display name `name`, if known.
    pub fn id(&self, name: &str) -> Option<i64> {
        self.name_to_id.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.id_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty()
    }
}
