//! Models of Microsoft 365 Backup Storage, under `/solutions/backupRestore`.

use chrono::{DateTime, Utc};
use graph_core::{graph_model, graph_properties, graph_union};
use serde::{Deserialize, Serialize};

use super::common::{Identity, IdentitySet, PublicError};
use super::{EntityProperties, graph_enum, impl_properties};

graph_enum! {
    /// The state of the backup service of a tenant.
    pub enum BackupServiceStatus {
        /// The service is not enabled.
        Disabled,
        /// The service is enabled.
        Enabled,
        /// Protection policies cannot be changed.
        ProtectionChangeLocked,
        /// Restores are not allowed.
        RestoreLocked,
    }
}

graph_enum! {
    /// Why the backup service was disabled.
    pub enum DisableReason {
        /// No reason.
        None,
        /// The billing profile is invalid.
        InvalidBillingProfile,
        /// An administrator disabled the service.
        UserRequested,
    }
}

graph_model! {
    /// The state of the backup service of a tenant.
    pub struct ServiceStatus: "#microsoft.graph.serviceStatus" {
        /// Why the service was disabled.
        disable_reason, set_disable_reason: DisableReason => "disableReason";
        /// End of the grace period after the service was disabled.
        grace_period_date_time, set_grace_period_date_time: DateTime<Utc> => "gracePeriodDateTime";
        /// The identity of the last modifier.
        last_modified_by, set_last_modified_by: IdentitySet => "lastModifiedBy";
        /// When the status last changed.
        last_modified_date_time, set_last_modified_date_time: DateTime<Utc> => "lastModifiedDateTime";
        /// Until when restores are allowed.
        restore_allowed_till_date_time, set_restore_allowed_till_date_time: DateTime<Utc> => "restoreAllowedTillDateTime";
        /// The state of the service.
        status, set_status: BackupServiceStatus => "status";
    }
}

graph_model! {
    /// The root of the backup and restore resources.
    pub struct BackupRestoreRoot: "#microsoft.graph.backupRestoreRoot" {
        /// The state of the backup service.
        service_status, set_service_status: ServiceStatus => "serviceStatus";
        /// The drive inclusion rules.
        drive_inclusion_rules, set_drive_inclusion_rules: Vec<DriveProtectionRule> => "driveInclusionRules";
        /// The protected drives.
        drive_protection_units, set_drive_protection_units: Vec<DriveProtectionUnit> => "driveProtectionUnits";
        /// The protection policies of Exchange.
        exchange_protection_policies, set_exchange_protection_policies: Vec<ExchangeProtectionPolicy> => "exchangeProtectionPolicies";
        /// The restore sessions of Exchange.
        exchange_restore_sessions, set_exchange_restore_sessions: Vec<ExchangeRestoreSession> => "exchangeRestoreSessions";
        /// The mailbox inclusion rules.
        mailbox_inclusion_rules, set_mailbox_inclusion_rules: Vec<MailboxProtectionRule> => "mailboxInclusionRules";
        /// The protected mailboxes.
        mailbox_protection_units, set_mailbox_protection_units: Vec<MailboxProtectionUnit> => "mailboxProtectionUnits";
        /// The protection policies of OneDrive for Business.
        one_drive_for_business_protection_policies, set_one_drive_for_business_protection_policies: Vec<OneDriveForBusinessProtectionPolicy> => "oneDriveForBusinessProtectionPolicies";
        /// The restore sessions of OneDrive for Business.
        one_drive_for_business_restore_sessions, set_one_drive_for_business_restore_sessions: Vec<OneDriveForBusinessRestoreSession> => "oneDriveForBusinessRestoreSessions";
        /// Every protection policy.
        protection_policies, set_protection_policies: Vec<ProtectionPolicyBase> => "protectionPolicies";
        /// Every protection unit.
        protection_units, set_protection_units: Vec<ProtectionUnitBase> => "protectionUnits";
        /// The restore points.
        restore_points, set_restore_points: Vec<RestorePoint> => "restorePoints";
        /// Every restore session.
        restore_sessions, set_restore_sessions: Vec<RestoreSessionBase> => "restoreSessions";
        /// The applications registered to use the backup service.
        service_apps, set_service_apps: Vec<ServiceApp> => "serviceApps";
        /// The protection policies of SharePoint.
        share_point_protection_policies, set_share_point_protection_policies: Vec<SharePointProtectionPolicy> => "sharePointProtectionPolicies";
        /// The restore sessions of SharePoint.
        share_point_restore_sessions, set_share_point_restore_sessions: Vec<SharePointRestoreSession> => "sharePointRestoreSessions";
        /// The site inclusion rules.
        site_inclusion_rules, set_site_inclusion_rules: Vec<SiteProtectionRule> => "siteInclusionRules";
        /// The protected sites.
        site_protection_units, set_site_protection_units: Vec<SiteProtectionUnit> => "siteProtectionUnits";
    }
}

impl EntityProperties for BackupRestoreRoot {}

// Protection policies

graph_enum! {
    /// The state of a protection policy.
    pub enum ProtectionPolicyStatus {
        /// Created but not active.
        Inactive,
        /// Activation was requested.
        ActiveRequested,
        /// Deactivation was requested.
        UnprotectRequested,
        /// Protecting its units.
        Active,
    }
}

graph_model! {
    /// A retention setting of a protection policy.
    pub struct RetentionSetting: "#microsoft.graph.retentionSetting" {
        /// The interval between backups, an ISO 8601 duration.
        interval, set_interval: String => "interval";
        /// How long backups are kept, an ISO 8601 duration.
        period, set_period: String => "period";
    }
}

graph_properties! {
    /// Properties shared by every protection policy.
    pub trait ProtectionPolicyProperties: EntityProperties {
        /// The identity of the creator.
        created_by, set_created_by: IdentitySet => "createdBy";
        /// When the policy was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// The name of the policy.
        display_name, set_display_name: String => "displayName";
        /// The identity of the last modifier.
        last_modified_by, set_last_modified_by: IdentitySet => "lastModifiedBy";
        /// When the policy was last modified.
        last_modified_date_time, set_last_modified_date_time: DateTime<Utc> => "lastModifiedDateTime";
        /// The retention settings.
        retention_settings, set_retention_settings: Vec<RetentionSetting> => "retentionSettings";
        /// The state of the policy.
        status, set_status: ProtectionPolicyStatus => "status";
    }
}

graph_model! {
    /// A protection policy of Exchange mailboxes.
    pub struct ExchangeProtectionPolicy: "#microsoft.graph.exchangeProtectionPolicy" {
        /// The rules selecting the protected mailboxes.
        mailbox_inclusion_rules, set_mailbox_inclusion_rules: Vec<MailboxProtectionRule> => "mailboxInclusionRules";
        /// The protected mailboxes.
        mailbox_protection_units, set_mailbox_protection_units: Vec<MailboxProtectionUnit> => "mailboxProtectionUnits";
    }
}

graph_model! {
    /// A protection policy of SharePoint sites.
    pub struct SharePointProtectionPolicy: "#microsoft.graph.sharePointProtectionPolicy" {
        /// The rules selecting the protected sites.
        site_inclusion_rules, set_site_inclusion_rules: Vec<SiteProtectionRule> => "siteInclusionRules";
        /// The protected sites.
        site_protection_units, set_site_protection_units: Vec<SiteProtectionUnit> => "siteProtectionUnits";
    }
}

graph_model! {
    /// A protection policy of OneDrive for Business accounts.
    pub struct OneDriveForBusinessProtectionPolicy: "#microsoft.graph.oneDriveForBusinessProtectionPolicy" {
        /// The rules selecting the protected drives.
        drive_inclusion_rules, set_drive_inclusion_rules: Vec<DriveProtectionRule> => "driveInclusionRules";
        /// The protected drives.
        drive_protection_units, set_drive_protection_units: Vec<DriveProtectionUnit> => "driveProtectionUnits";
    }
}

graph_union! {
    /// Any protection policy.
    pub enum ProtectionPolicyBase: "#microsoft.graph.protectionPolicyBase" {
        /// Exchange mailboxes.
        Exchange(ExchangeProtectionPolicy),
        /// SharePoint sites.
        SharePoint(SharePointProtectionPolicy),
        /// OneDrive for Business accounts.
        OneDriveForBusiness(OneDriveForBusinessProtectionPolicy),
    }
}

impl_properties!([EntityProperties, ProtectionPolicyProperties] =>
    ExchangeProtectionPolicy,
    SharePointProtectionPolicy,
    OneDriveForBusinessProtectionPolicy,
    ProtectionPolicyBase,
);

// Protection units

graph_enum! {
    /// The state of a protection unit.
    pub enum ProtectionUnitStatus {
        /// Protection was requested.
        ProtectRequested,
        /// Protected.
        Protected,
        /// Removal of the protection was requested.
        UnprotectRequested,
        /// Not protected.
        Unprotected,
        /// Removal of the unit was requested.
        RemoveRequested,
    }
}

graph_properties! {
    /// Properties shared by every protection unit.
    pub trait ProtectionUnitProperties: EntityProperties {
        /// The identity of the creator.
        created_by, set_created_by: IdentitySet => "createdBy";
        /// When the unit was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// The error of the last operation, if it failed.
        error, set_error: PublicError => "error";
        /// The identity of the last modifier.
        last_modified_by, set_last_modified_by: IdentitySet => "lastModifiedBy";
        /// When the unit was last modified.
        last_modified_date_time, set_last_modified_date_time: DateTime<Utc> => "lastModifiedDateTime";
        /// The identifier of the policy protecting the unit.
        policy_id, set_policy_id: String => "policyId";
        /// The state of the unit.
        status, set_status: ProtectionUnitStatus => "status";
    }
}

graph_model! {
    /// A protected Exchange mailbox.
    pub struct MailboxProtectionUnit: "#microsoft.graph.mailboxProtectionUnit" {
        /// The identifier of the mailbox owner in the directory.
        directory_object_id, set_directory_object_id: String => "directoryObjectId";
        /// The name of the mailbox owner.
        display_name, set_display_name: String => "displayName";
        /// The address of the mailbox.
        email, set_email: String => "email";
    }
}

graph_model! {
    /// A protected SharePoint site.
    pub struct SiteProtectionUnit: "#microsoft.graph.siteProtectionUnit" {
        /// The identifier of the site.
        site_id, set_site_id: String => "siteId";
        /// The name of the site.
        site_name, set_site_name: String => "siteName";
        /// The URL of the site.
        site_web_url, set_site_web_url: String => "siteWebUrl";
    }
}

graph_model! {
    /// A protected OneDrive for Business account.
    pub struct DriveProtectionUnit: "#microsoft.graph.driveProtectionUnit" {
        /// The identifier of the drive owner in the directory.
        directory_object_id, set_directory_object_id: String => "directoryObjectId";
        /// The name of the drive owner.
        display_name, set_display_name: String => "displayName";
        /// The address of the drive owner.
        email, set_email: String => "email";
    }
}

graph_union! {
    /// Any protection unit.
    pub enum ProtectionUnitBase: "#microsoft.graph.protectionUnitBase" {
        /// A mailbox.
        Mailbox(MailboxProtectionUnit),
        /// A site.
        Site(SiteProtectionUnit),
        /// A drive.
        Drive(DriveProtectionUnit),
    }
}

impl_properties!([EntityProperties, ProtectionUnitProperties] =>
    MailboxProtectionUnit,
    SiteProtectionUnit,
    DriveProtectionUnit,
    ProtectionUnitBase,
);

// Protection rules

graph_enum! {
    /// The state of a protection rule.
    pub enum ProtectionRuleStatus {
        /// Not applied yet.
        Draft,
        /// Applying.
        Active,
        /// Applied.
        Completed,
        /// Applied with errors.
        CompletedWithErrors,
    }
}

graph_properties! {
    /// Properties shared by every protection rule.
    pub trait ProtectionRuleProperties: EntityProperties {
        /// The identity of the creator.
        created_by, set_created_by: IdentitySet => "createdBy";
        /// When the rule was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// The error of the last application, if it failed.
        error, set_error: PublicError => "error";
        /// Whether the rule applies to new matching units.
        is_auto_apply_enabled, set_is_auto_apply_enabled: bool => "isAutoApplyEnabled";
        /// The identity of the last modifier.
        last_modified_by, set_last_modified_by: IdentitySet => "lastModifiedBy";
        /// When the rule was last modified.
        last_modified_date_time, set_last_modified_date_time: DateTime<Utc> => "lastModifiedDateTime";
        /// The state of the rule.
        status, set_status: ProtectionRuleStatus => "status";
    }
}

graph_model! {
    /// A rule selecting mailboxes to protect.
    pub struct MailboxProtectionRule: "#microsoft.graph.mailboxProtectionRule" {
        /// The group filter, such as `group eq 'sales@contoso.com'`.
        mailbox_expression, set_mailbox_expression: String => "mailboxExpression";
    }
}

graph_model! {
    /// A rule selecting sites to protect.
    pub struct SiteProtectionRule: "#microsoft.graph.siteProtectionRule" {
        /// The site filter.
        site_expression, set_site_expression: String => "siteExpression";
    }
}

graph_model! {
    /// A rule selecting drives to protect.
    pub struct DriveProtectionRule: "#microsoft.graph.driveProtectionRule" {
        /// The drive filter.
        drive_expression, set_drive_expression: String => "driveExpression";
    }
}

graph_union! {
    /// Any protection rule.
    pub enum ProtectionRuleBase: "#microsoft.graph.protectionRuleBase" {
        /// Mailboxes.
        Mailbox(MailboxProtectionRule),
        /// Sites.
        Site(SiteProtectionRule),
        /// Drives.
        Drive(DriveProtectionRule),
    }
}

impl_properties!([EntityProperties, ProtectionRuleProperties] =>
    MailboxProtectionRule,
    SiteProtectionRule,
    DriveProtectionRule,
    ProtectionRuleBase,
);

// Restore sessions

graph_enum! {
    /// The state of a restore session.
    pub enum RestoreSessionStatus {
        /// Being prepared.
        Draft,
        /// Activation was requested.
        Activating,
        /// Restoring.
        Active,
        /// Completed with errors.
        CompletedWithError,
        /// Completed.
        Completed,
        /// Failed.
        Failed,
    }
}

graph_properties! {
    /// Properties shared by every restore session.
    pub trait RestoreSessionProperties: EntityProperties {
        /// When the restore completed.
        completed_date_time, set_completed_date_time: DateTime<Utc> => "completedDateTime";
        /// The identity of the creator.
        created_by, set_created_by: IdentitySet => "createdBy";
        /// When the session was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// The error of the session, if it failed.
        error, set_error: PublicError => "error";
        /// The identity of the last modifier.
        last_modified_by, set_last_modified_by: IdentitySet => "lastModifiedBy";
        /// When the session was last modified.
        last_modified_date_time, set_last_modified_date_time: DateTime<Utc> => "lastModifiedDateTime";
        /// The state of the session.
        status, set_status: RestoreSessionStatus => "status";
    }
}

graph_model! {
    /// A restore of Exchange mailboxes.
    pub struct ExchangeRestoreSession: "#microsoft.graph.exchangeRestoreSession" {
        /// The mailboxes to restore.
        mailbox_restore_artifacts, set_mailbox_restore_artifacts: Vec<MailboxRestoreArtifact> => "mailboxRestoreArtifacts";
    }
}

graph_model! {
    /// A restore of SharePoint sites.
    pub struct SharePointRestoreSession: "#microsoft.graph.sharePointRestoreSession" {
        /// The sites to restore.
        site_restore_artifacts, set_site_restore_artifacts: Vec<SiteRestoreArtifact> => "siteRestoreArtifacts";
    }
}

graph_model! {
    /// A restore of OneDrive for Business accounts.
    pub struct OneDriveForBusinessRestoreSession: "#microsoft.graph.oneDriveForBusinessRestoreSession" {
        /// The drives to restore.
        drive_restore_artifacts, set_drive_restore_artifacts: Vec<DriveRestoreArtifact> => "driveRestoreArtifacts";
    }
}

graph_union! {
    /// Any restore session.
    pub enum RestoreSessionBase: "#microsoft.graph.restoreSessionBase" {
        /// Exchange mailboxes.
        Exchange(ExchangeRestoreSession),
        /// SharePoint sites.
        SharePoint(SharePointRestoreSession),
        /// OneDrive for Business accounts.
        OneDriveForBusiness(OneDriveForBusinessRestoreSession),
    }
}

impl_properties!([EntityProperties, RestoreSessionProperties] =>
    ExchangeRestoreSession,
    SharePointRestoreSession,
    OneDriveForBusinessRestoreSession,
    RestoreSessionBase,
);

// Restore artifacts

graph_enum! {
    /// Where an artifact is restored.
    pub enum DestinationType {
        /// To a new location.
        New,
        /// Over the original content.
        InPlace,
    }
}

graph_enum! {
    /// The state of the restore of an artifact.
    pub enum ArtifactRestoreStatus {
        /// Added to the session.
        Added,
        /// Being scheduled.
        Scheduling,
        /// Scheduled.
        Scheduled,
        /// Restoring.
        InProgress,
        /// Restored.
        Succeeded,
        /// Failed.
        Failed,
    }
}

graph_properties! {
    /// Properties shared by every restore artifact.
    pub trait RestoreArtifactProperties: EntityProperties {
        /// When the restore of the artifact completed.
        completion_date_time, set_completion_date_time: DateTime<Utc> => "completionDateTime";
        /// Where the artifact is restored.
        destination_type, set_destination_type: DestinationType => "destinationType";
        /// The error of the restore, if it failed.
        error, set_error: PublicError => "error";
        /// The restore point of the artifact, when expanded.
        restore_point, set_restore_point: RestorePoint => "restorePoint";
        /// When the restore of the artifact started.
        start_date_time, set_start_date_time: DateTime<Utc> => "startDateTime";
        /// The state of the restore.
        status, set_status: ArtifactRestoreStatus => "status";
    }
}

graph_model! {
    /// A mailbox restored by a session.
    pub struct MailboxRestoreArtifact: "#microsoft.graph.mailboxRestoreArtifact" {
        /// The identifier of the folder holding the restored items.
        restored_folder_id, set_restored_folder_id: String => "restoredFolderId";
        /// The name of the folder holding the restored items.
        restored_folder_name, set_restored_folder_name: String => "restoredFolderName";
    }
}

graph_model! {
    /// A site restored by a session.
    pub struct SiteRestoreArtifact: "#microsoft.graph.siteRestoreArtifact" {
        /// The identifier of the restored site.
        restored_site_id, set_restored_site_id: String => "restoredSiteId";
    }
}

graph_model! {
    /// A drive restored by a session.
    pub struct DriveRestoreArtifact: "#microsoft.graph.driveRestoreArtifact" {
        /// The identifier of the site holding the restored drive.
        restored_site_id, set_restored_site_id: String => "restoredSiteId";
    }
}

graph_union! {
    /// Any restore artifact.
    pub enum RestoreArtifactBase: "#microsoft.graph.restoreArtifactBase" {
        /// A mailbox.
        Mailbox(MailboxRestoreArtifact),
        /// A site.
        Site(SiteRestoreArtifact),
        /// A drive.
        Drive(DriveRestoreArtifact),
    }
}

impl_properties!([EntityProperties, RestoreArtifactProperties] =>
    MailboxRestoreArtifact,
    SiteRestoreArtifact,
    DriveRestoreArtifact,
    RestoreArtifactBase,
);

// Restore points

graph_enum! {
    /// Tags of a restore point.
    pub enum RestorePointTags {
        /// No tag.
        None,
        /// Restorable with fast restore.
        FastRestore,
    }
}

graph_enum! {
    /// Which restore point a search returns for each unit.
    pub enum RestorePointPreference {
        /// The latest one.
        Latest,
        /// The oldest one.
        Oldest,
    }
}

graph_model! {
    /// A point in time a protection unit can be restored to.
    pub struct RestorePoint: "#microsoft.graph.restorePoint" {
        /// When the restore point expires.
        expiration_date_time, set_expiration_date_time: DateTime<Utc> => "expirationDateTime";
        /// When the backup was taken.
        protection_date_time, set_protection_date_time: DateTime<Utc> => "protectionDateTime";
        /// The protected unit, when expanded.
        protection_unit, set_protection_unit: ProtectionUnitBase => "protectionUnit";
        /// The tags of the restore point.
        tags, set_tags: RestorePointTags => "tags";
    }
}

impl EntityProperties for RestorePoint {}

graph_model! {
    /// A period of time.
    pub struct TimePeriod: "#microsoft.graph.timePeriod" {
        /// The end of the period.
        end_date_time, set_end_date_time: DateTime<Utc> => "endDateTime";
        /// The start of the period.
        start_date_time, set_start_date_time: DateTime<Utc> => "startDateTime";
    }
}

graph_model! {
    /// A restore point found by a search.
    pub struct RestorePointSearchResult: "#microsoft.graph.restorePointSearchResult" {
        /// The number of artifacts matching the search.
        artifact_hit_count, set_artifact_hit_count: i32 => "artifactHitCount";
        /// The restore point.
        restore_point, set_restore_point: RestorePoint => "restorePoint";
    }
}

graph_model! {
    /// The result of a restore point search.
    pub struct RestorePointSearchResponse: "#microsoft.graph.restorePointSearchResponse" {
        /// The protection units without restore point in the searched period.
        no_result_protection_unit_ids, set_no_result_protection_unit_ids: Vec<String> => "noResultProtectionUnitIds";
        /// The identifier of the search.
        search_response_id, set_search_response_id: String => "searchResponseId";
        /// The restore points found.
        search_results, set_search_results: Vec<RestorePointSearchResult> => "searchResults";
    }
}

// Service apps

graph_enum! {
    /// The state of a service app.
    pub enum ServiceAppStatus {
        /// Registered but not active.
        Inactive,
        /// Active.
        Active,
        /// Activation is pending.
        PendingActive,
        /// Deactivation is pending.
        PendingInactive,
    }
}

graph_model! {
    /// An application registered to use the backup service.
    pub struct ServiceApp: "#microsoft.graph.serviceApp" {
        /// The application.
        application, set_application: Identity => "application";
        /// When the registration was created.
        created_date_time, set_created_date_time: DateTime<Utc> => "createdDateTime";
        /// When the current status takes effect.
        effective_date_time, set_effective_date_time: DateTime<Utc> => "effectiveDateTime";
        /// The identity of the last modifier.
        last_modified_by, set_last_modified_by: IdentitySet => "lastModifiedBy";
        /// When the registration was last modified.
        last_modified_date_time, set_last_modified_date_time: DateTime<Utc> => "lastModifiedDateTime";
        /// When the application was registered.
        registration_date_time, set_registration_date_time: DateTime<Utc> => "registrationDateTime";
        /// The state of the registration.
        status, set_status: ServiceAppStatus => "status";
    }
}

impl EntityProperties for ServiceApp {}

// Action bodies

/// Body of `POST /solutions/backupRestore/enable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableBody {
    /// The tenant owning the billing application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_owner_tenant_id: Option<String>,
}

/// Body of `POST /solutions/backupRestore/restorePoints/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestorePointSearchBody {
    /// The protection units to search.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protection_unit_ids: Vec<String>,
    /// The period to search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_time_period: Option<TimePeriod>,
    /// Which restore point to return for each unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_point_preference: Option<RestorePointPreference>,
    /// The tags the restore points must have.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<RestorePointTags>,
}

/// Body of the `activate` and `deactivate` actions of a service app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAppActivationBody {
    /// When the change takes effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use graph_core::Parsable;
    use serde_json::json;

    use super::*;

    #[test]
    fn should_materialize_policy_variants() -> anyhow::Result<()> {
        let policies: Vec<ProtectionPolicyBase> = serde_json::from_value(json!([
            {
                "@odata.type": "#microsoft.graph.exchangeProtectionPolicy",
                "id": "845457dc-4bb2-4815-bef3-8628ebd1952e",
                "displayName": "Exchange Protection Policy",
                "status": "active",
                "mailboxInclusionRules": [{ "id": "1", "mailboxExpression": "memberOf/any(p:p/id eq 'sales')" }]
            },
            {
                "@odata.type": "#microsoft.graph.sharePointProtectionPolicy",
                "id": "9fec8e78-bce4-4aaf-ab1b-5451cc387264",
                "status": "activeRequested"
            },
            { "id": "1b014d8c-71fe-4d00-a01a-31850bc5b32c" }
        ]))?;

        let [exchange, sharepoint, unknown] = policies.as_slice() else {
            panic!("expected three policies, got {policies:?}");
        };
        let ProtectionPolicyBase::Exchange(exchange) = exchange else {
            panic!("expected an Exchange policy, got {exchange:?}");
        };
        let rules = exchange.mailbox_inclusion_rules()?.unwrap_or_default();
        let rule = rules.first().expect("a rule");
        assert_eq!(rule.mailbox_expression()?.as_deref(), Some("memberOf/any(p:p/id eq 'sales')"));
        assert_eq!(exchange.status()?, Some(ProtectionPolicyStatus::Active));
        assert!(matches!(sharepoint, ProtectionPolicyBase::SharePoint(_)));
        assert_eq!(sharepoint.status()?, Some(ProtectionPolicyStatus::ActiveRequested));
        assert!(matches!(unknown, ProtectionPolicyBase::Other(_)));
        assert_eq!(unknown.id()?.as_deref(), Some("1b014d8c-71fe-4d00-a01a-31850bc5b32c"));
        Ok(())
    }

    #[test]
    fn should_read_expanded_root_collections() -> anyhow::Result<()> {
        let root: BackupRestoreRoot = serde_json::from_value(json!({
            "id": "backupRestore",
            "exchangeProtectionPolicies": [
                { "id": "845457dc-4bb2-4815-bef3-8628ebd1952e", "displayName": "Exchange Protection Policy" }
            ],
            "mailboxProtectionUnits": [{ "id": "unit-1", "email": "adele@contoso.com" }],
            "restorePoints": [{ "id": "1f1fccc3-a642-4b3d-9c5a-4cbd2aa4ee01", "tags": "fastRestore" }],
            "serviceApps": [{ "id": "71633878-8321-4950-bfaf-ed285bdd1461", "status": "pendingActive" }]
        }))?;

        let policies = root.exchange_protection_policies()?.unwrap_or_default();
        let names = policies
            .iter()
            .map(ExchangeProtectionPolicy::display_name)
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(names, vec![Some("Exchange Protection Policy".to_owned())]);
        let units = root.mailbox_protection_units()?.unwrap_or_default();
        assert_eq!(units.first().map(MailboxProtectionUnit::email).transpose()?.flatten().as_deref(), Some("adele@contoso.com"));
        let points = root.restore_points()?.unwrap_or_default();
        assert_eq!(points.first().map(RestorePoint::tags).transpose()?.flatten(), Some(RestorePointTags::FastRestore));
        let apps = root.service_apps()?.unwrap_or_default();
        assert_eq!(apps.first().map(ServiceApp::status).transpose()?.flatten(), Some(ServiceAppStatus::PendingActive));
        assert!(root.share_point_restore_sessions()?.is_none());
        Ok(())
    }

    #[test]
    fn should_keep_unknown_properties_of_variants() -> anyhow::Result<()> {
        let unit: ProtectionUnitBase = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.siteProtectionUnit",
            "siteId": "contoso.sharepoint.com,1",
            "offboardRequestedDateTime": "2024-01-01T00:00:00Z"
        }))?;

        assert!(matches!(unit, ProtectionUnitBase::Site(_)));
        insta::assert_json_snapshot!(unit, @r##"
        {
          "@odata.type": "#microsoft.graph.siteProtectionUnit",
          "offboardRequestedDateTime": "2024-01-01T00:00:00Z",
          "siteId": "contoso.sharepoint.com,1"
        }
        "##);
        Ok(())
    }

    #[test]
    fn should_read_restore_point_dates() -> anyhow::Result<()> {
        let point: RestorePoint = serde_json::from_value(json!({
            "id": "1f1fccc3-a642-4b3d-9c5a-4cbd2aa4ee01",
            "protectionDateTime": "2024-03-04T12:30:00Z",
            "tags": "fastRestore",
            "protectionUnit": {
                "@odata.type": "#microsoft.graph.mailboxProtectionUnit",
                "email": "adele@contoso.com"
            }
        }))?;

        let protected_at = point.protection_date_time()?.expect("a date");
        assert_eq!(protected_at.to_rfc3339(), "2024-03-04T12:30:00+00:00");
        assert_eq!(point.tags()?, Some(RestorePointTags::FastRestore));
        assert!(matches!(point.protection_unit()?, Some(ProtectionUnitBase::Mailbox(_))));
        assert_eq!(point.odata_type(), None);
        Ok(())
    }

    #[test]
    fn should_serialize_search_body() -> anyhow::Result<()> {
        let mut period = TimePeriod::new();
        period.set_start_date_time(DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")?.to_utc())?;
        let body = RestorePointSearchBody {
            protection_unit_ids: vec!["23014d8c-71fe-4d00-a01a-31850bc5b42a".to_owned()],
            protection_time_period: Some(period),
            restore_point_preference: Some(RestorePointPreference::Latest),
            tags: None,
        };

        insta::assert_json_snapshot!(body, @r##"
        {
          "protectionUnitIds": [
            "23014d8c-71fe-4d00-a01a-31850bc5b42a"
          ],
          "protectionTimePeriod": {
            "@odata.type": "#microsoft.graph.timePeriod",
            "startDateTime": "2024-01-01T00:00:00Z"
          },
          "restorePointPreference": "latest"
        }
        "##);
        Ok(())
    }
}
