use crate::builders::{
    ActionRequestBuilder, EntityCollectionRequestBuilder, EntityRequestBuilder,
};
use crate::models::{
    BackupRestoreRoot, DriveProtectionRule, DriveProtectionUnit, DriveRestoreArtifact, EnableBody,
    ExchangeProtectionPolicy, ExchangeRestoreSession, MailboxProtectionRule, MailboxProtectionUnit,
    MailboxRestoreArtifact, OneDriveForBusinessProtectionPolicy, OneDriveForBusinessRestoreSession,
    ProtectionPolicyBase, ProtectionUnitBase, RestorePoint, RestorePointSearchBody,
    RestorePointSearchResponse, RestoreSessionBase, ServiceApp, ServiceAppActivationBody,
    ServiceStatus, SharePointProtectionPolicy, SharePointRestoreSession, SiteProtectionRule,
    SiteProtectionUnit, SiteRestoreArtifact,
};

/// Declares navigation methods to child collections.
macro_rules! collections {
    ($parent:ty { $( $(#[$meta:meta])* $method:ident => $segment:literal : $model:ty; )+ }) => {
        impl EntityRequestBuilder<$parent> {
            $(
                $(#[$meta])*
                pub fn $method(&self) -> EntityCollectionRequestBuilder<$model> {
                    EntityCollectionRequestBuilder::at(self.base(), $segment)
                }
            )+
        }
    };
}

impl EntityRequestBuilder<BackupRestoreRoot> {
    /// Enables the backup service of the tenant.
    ///
    /// `POST /solutions/backupRestore/enable`
    pub fn enable(&self) -> ActionRequestBuilder<EnableBody, ServiceStatus> {
        ActionRequestBuilder::at(self.base(), "enable")
    }
}

collections!(BackupRestoreRoot {
    /// Every protection policy, whatever the service.
    protection_policies => "protectionPolicies": ProtectionPolicyBase;
    /// Every protection unit, whatever the service.
    protection_units => "protectionUnits": ProtectionUnitBase;
    /// Every restore session, whatever the service.
    restore_sessions => "restoreSessions": RestoreSessionBase;
    /// The restore points.
    restore_points => "restorePoints": RestorePoint;
    /// The applications registered to use the backup service.
    service_apps => "serviceApps": ServiceApp;
    /// The protection policies of Exchange.
    exchange_protection_policies => "exchangeProtectionPolicies": ExchangeProtectionPolicy;
    /// The protection policies of SharePoint.
    share_point_protection_policies => "sharePointProtectionPolicies": SharePointProtectionPolicy;
    /// The protection policies of OneDrive for Business.
    one_drive_for_business_protection_policies => "oneDriveForBusinessProtectionPolicies": OneDriveForBusinessProtectionPolicy;
    /// The restore sessions of Exchange.
    exchange_restore_sessions => "exchangeRestoreSessions": ExchangeRestoreSession;
    /// The restore sessions of SharePoint.
    share_point_restore_sessions => "sharePointRestoreSessions": SharePointRestoreSession;
    /// The restore sessions of OneDrive for Business.
    one_drive_for_business_restore_sessions => "oneDriveForBusinessRestoreSessions": OneDriveForBusinessRestoreSession;
    /// The protected mailboxes.
    mailbox_protection_units => "mailboxProtectionUnits": MailboxProtectionUnit;
    /// The protected sites.
    site_protection_units => "siteProtectionUnits": SiteProtectionUnit;
    /// The protected drives.
    drive_protection_units => "driveProtectionUnits": DriveProtectionUnit;
    /// The mailbox inclusion rules.
    mailbox_inclusion_rules => "mailboxInclusionRules": MailboxProtectionRule;
    /// The site inclusion rules.
    site_inclusion_rules => "siteInclusionRules": SiteProtectionRule;
    /// The drive inclusion rules.
    drive_inclusion_rules => "driveInclusionRules": DriveProtectionRule;
});

impl EntityRequestBuilder<ProtectionPolicyBase> {
    /// Starts protecting the units of the policy.
    pub fn activate(&self) -> ActionRequestBuilder<(), ProtectionPolicyBase> {
        ActionRequestBuilder::at(self.base(), "activate")
    }

    /// Stops protecting the units of the policy.
    pub fn deactivate(&self) -> ActionRequestBuilder<(), ProtectionPolicyBase> {
        ActionRequestBuilder::at(self.base(), "deactivate")
    }
}

impl EntityRequestBuilder<RestoreSessionBase> {
    /// Starts the restore.
    pub fn activate(&self) -> ActionRequestBuilder<(), RestoreSessionBase> {
        ActionRequestBuilder::at(self.base(), "activate")
    }
}

impl EntityCollectionRequestBuilder<RestorePoint> {
    /// Searches the restore points of protection units.
    ///
    /// `POST /solutions/backupRestore/restorePoints/search`
    pub fn search(&self) -> ActionRequestBuilder<RestorePointSearchBody, RestorePointSearchResponse> {
        ActionRequestBuilder::at(self.base(), "search")
    }
}

impl EntityRequestBuilder<RestorePoint> {
    /// The protection unit of the restore point.
    pub fn protection_unit(&self) -> EntityRequestBuilder<ProtectionUnitBase> {
        EntityRequestBuilder::at(self.base(), "protectionUnit")
    }
}

impl EntityRequestBuilder<ServiceApp> {
    /// Activates the application.
    pub fn activate(&self) -> ActionRequestBuilder<ServiceAppActivationBody, ServiceApp> {
        ActionRequestBuilder::at(self.base(), "activate")
    }

    /// Deactivates the application.
    pub fn deactivate(&self) -> ActionRequestBuilder<ServiceAppActivationBody, ServiceApp> {
        ActionRequestBuilder::at(self.base(), "deactivate")
    }
}

collections!(ExchangeProtectionPolicy {
    /// The rules selecting the protected mailboxes.
    mailbox_inclusion_rules => "mailboxInclusionRules": MailboxProtectionRule;
    /// The protected mailboxes.
    mailbox_protection_units => "mailboxProtectionUnits": MailboxProtectionUnit;
});

collections!(SharePointProtectionPolicy {
    /// The rules selecting the protected sites.
    site_inclusion_rules => "siteInclusionRules": SiteProtectionRule;
    /// The protected sites.
    site_protection_units => "siteProtectionUnits": SiteProtectionUnit;
});

collections!(OneDriveForBusinessProtectionPolicy {
    /// The rules selecting the protected drives.
    drive_inclusion_rules => "driveInclusionRules": DriveProtectionRule;
    /// The protected drives.
    drive_protection_units => "driveProtectionUnits": DriveProtectionUnit;
});

collections!(ExchangeRestoreSession {
    /// The mailboxes restored by the session.
    mailbox_restore_artifacts => "mailboxRestoreArtifacts": MailboxRestoreArtifact;
});

collections!(SharePointRestoreSession {
    /// The sites restored by the session.
    site_restore_artifacts => "siteRestoreArtifacts": SiteRestoreArtifact;
});

collections!(OneDriveForBusinessRestoreSession {
    /// The drives restored by the session.
    drive_restore_artifacts => "driveRestoreArtifacts": DriveRestoreArtifact;
});

macro_rules! restore_point_of {
    ($($artifact:ty),+) => {
        $(
            impl EntityRequestBuilder<$artifact> {
                /// The restore point the artifact is restored from.
                pub fn restore_point(&self) -> EntityRequestBuilder<RestorePoint> {
                    EntityRequestBuilder::at(self.base(), "restorePoint")
                }
            }
        )+
    };
}

restore_point_of!(MailboxRestoreArtifact, SiteRestoreArtifact, DriveRestoreArtifact);
